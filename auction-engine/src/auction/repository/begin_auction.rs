use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Conditional Upcoming -> Live transition. Returns false if the
    /// auction was not in the Upcoming state, which makes re-applied scans
    /// no-ops.
    pub async fn begin_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool> {
        self.db.begin_auction(auction_id).await
    }
}
