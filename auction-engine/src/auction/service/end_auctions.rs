use {
    super::{
        settle_auction::SettleAuctionInput,
        Service,
    },
    crate::auction::entities,
};

impl Service {
    /// End scan: move every Live auction whose end time has passed to
    /// Ended, then settle it against the product catalog. Each auction is
    /// processed on its own; one failure never blocks the rest of the
    /// batch. A settlement failure leaves the auction flagged pending and
    /// the retry scan picks it up on a later tick.
    #[tracing::instrument(skip_all)]
    pub async fn end_auctions(&self) -> anyhow::Result<()> {
        let live = self
            .repo
            .get_auctions_by_status(entities::AuctionStatus::Live)
            .await?;
        let now = self.clock.now();
        for auction in live {
            if !auction.is_due_to_end(now) {
                continue;
            }
            let concluded = match self.repo.conclude_auction(auction.id).await {
                Ok(concluded) => concluded,
                Err(err) => {
                    tracing::error!(
                        error = ?err,
                        auction_id = %auction.id,
                        "Failed to end auction",
                    );
                    continue;
                }
            };
            // Lost the conditional write: some other actor already moved
            // the auction out of Live, and settlement belongs to whoever
            // won.
            if !concluded {
                continue;
            }
            tracing::info!(auction_id = %auction.id, "Auction ended");
            if let Err(err) = self
                .settle_auction(SettleAuctionInput {
                    auction: auction.clone(),
                })
                .await
            {
                tracing::error!(
                    error = ?err,
                    auction_id = %auction.id,
                    "Failed to settle ended auction, will retry on a later tick",
                );
            }
        }
        Ok(())
    }
}
