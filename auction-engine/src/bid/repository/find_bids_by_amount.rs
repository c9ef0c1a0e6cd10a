use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
        kernel::entities::Amount,
    },
};

impl Repository {
    /// Ledger entries matching an exact amount, earliest acceptance first.
    pub async fn find_bids_by_amount(
        &self,
        auction_id: AuctionId,
        amount: Amount,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db
            .find_bids_by_amount(auction_id, models::convert_amount(amount))
            .await?
            .iter()
            .map(|bid| {
                bid.get_bid_entity().map_err(|e| {
                    tracing::error!(error = e.to_string(), bid = ?bid, "Failed to convert bid to entity");
                    RestError::TemporarilyUnavailable
                })
            })
            .collect()
    }
}
