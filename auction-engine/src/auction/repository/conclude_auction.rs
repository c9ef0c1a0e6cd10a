use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Conditional Live -> Ended transition. The same statement flags the
    /// auction as settlement-pending so a failed product update is picked
    /// up by the retry scan.
    pub async fn conclude_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool> {
        self.db.conclude_auction(auction_id).await
    }
}
