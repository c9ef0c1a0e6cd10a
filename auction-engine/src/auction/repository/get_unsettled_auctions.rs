use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_unsettled_auctions(&self) -> anyhow::Result<Vec<entities::Auction>> {
        self.db
            .get_unsettled_auctions()
            .await?
            .iter()
            .map(|auction| auction.get_auction_entity())
            .collect()
    }
}
