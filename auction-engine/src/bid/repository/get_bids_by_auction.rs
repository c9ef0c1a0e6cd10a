use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
    },
};

impl Repository {
    pub async fn get_bids_by_auction(
        &self,
        auction_id: AuctionId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db
            .get_bids_by_auction(auction_id)
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
