use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn mark_settled(&self, auction_id: entities::AuctionId) -> anyhow::Result<()> {
        self.db.mark_settled(auction_id).await
    }
}
