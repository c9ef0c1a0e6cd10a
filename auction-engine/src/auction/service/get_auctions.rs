use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Service {
    pub async fn get_auctions(&self) -> Result<Vec<entities::Auction>, RestError> {
        self.repo.get_auctions().await
    }
}
