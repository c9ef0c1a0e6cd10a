use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::Amount,
    },
};

impl Repository {
    /// Compare-and-swap on the auction's cached highest bid. Returns false
    /// if the stored value no longer equals `expected`, in which case the
    /// caller must re-read and re-validate.
    pub async fn swap_highest_bid(
        &self,
        auction_id: entities::AuctionId,
        expected: Amount,
        new: Amount,
    ) -> Result<bool, RestError> {
        self.db
            .swap_highest_bid(
                auction_id,
                models::convert_amount(expected),
                models::convert_amount(new),
            )
            .await
    }
}
