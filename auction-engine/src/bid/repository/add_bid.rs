use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    /// Append-only insert into the bid ledger.
    pub async fn add_bid(&self, bid: &entities::Bid) -> Result<(), RestError> {
        self.db.add_bid(&models::Bid::from(bid)).await
    }
}
