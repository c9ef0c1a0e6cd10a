use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_auctions(&self) -> Result<Vec<entities::Auction>, RestError> {
        self.db
            .get_auctions()
            .await?
            .iter()
            .map(|auction| {
                auction.get_auction_entity().map_err(|e| {
                    tracing::error!(error = e.to_string(), auction = ?auction, "Failed to convert auction to entity");
                    RestError::TemporarilyUnavailable
                })
            })
            .collect()
    }
}
