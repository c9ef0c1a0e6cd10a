use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Idempotent full overwrite of an auction record.
    pub async fn update_auction(&self, auction: &entities::Auction) -> Result<(), RestError> {
        self.db
            .update_auction(&models::Auction::from(auction))
            .await
    }
}
