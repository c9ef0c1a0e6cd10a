use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn remove_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<(), RestError> {
        self.db.remove_auction(auction_id).await
    }
}
