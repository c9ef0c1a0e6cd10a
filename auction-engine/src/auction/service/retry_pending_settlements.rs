use super::{
    settle_auction::SettleAuctionInput,
    Service,
};

impl Service {
    /// Settlement retry scan. Ended auctions leave the end scan's working
    /// set immediately, so a settlement that failed on the ending tick
    /// would otherwise be stranded; this scan re-drives every auction
    /// still flagged pending until the product write goes through.
    #[tracing::instrument(skip_all)]
    pub async fn retry_pending_settlements(&self) -> anyhow::Result<()> {
        let unsettled = self.repo.get_unsettled_auctions().await?;
        for auction in unsettled {
            let auction_id = auction.id;
            if let Err(err) = self.settle_auction(SettleAuctionInput { auction }).await {
                tracing::error!(
                    error = ?err,
                    auction_id = %auction_id,
                    "Settlement retry failed",
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::{
                entities,
                repository::{
                    models,
                    MockDatabase,
                },
            },
            kernel::{
                clock::tests::FrozenClock,
                entities::ProductId,
            },
            product::{
                client::MockProductClient,
                entities::ProductStatus,
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    fn pending_auction(current_highest_bid: u64) -> entities::Auction {
        let now = OffsetDateTime::UNIX_EPOCH;
        entities::Auction {
            id: entities::AuctionId::new_v4(),
            product_id: ProductId::new_v4(),
            start_time: now - Duration::hours(2),
            end_time: now - Duration::hours(1),
            start_price: 5000,
            current_highest_bid,
            min_bid_increment: 500,
            status: entities::AuctionStatus::Ended,
            settlement: entities::SettlementState::Pending,
            creation_time: now - Duration::hours(3),
        }
    }

    #[tokio::test]
    async fn retry_scan_settles_stranded_auctions() {
        let stranded = pending_auction(15000);
        let product_id = stranded.product_id;
        let auction_id = stranded.id;

        let mut db = MockDatabase::new();
        let scanned = vec![models::Auction::from(&stranded)];
        db.expect_get_unsettled_auctions()
            .returning(move || Ok(scanned.clone()));
        db.expect_mark_settled()
            .withf(move |id| *id == auction_id)
            .times(1)
            .returning(|_| Ok(()));

        let mut product_client = MockProductClient::new();
        product_client
            .expect_set_status()
            .withf(move |id, status| *id == product_id && *status == ProductStatus::Sold)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = Service::new_with_mocks(
            db,
            product_client,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        service.retry_pending_settlements().await.unwrap();
    }

    #[tokio::test]
    async fn retry_scan_is_a_no_op_without_pending_settlements() {
        let mut db = MockDatabase::new();
        db.expect_get_unsettled_auctions().returning(|| Ok(vec![]));
        db.expect_mark_settled().times(0);

        let product_client = MockProductClient::new();

        let service = Service::new_with_mocks(
            db,
            product_client,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        service.retry_pending_settlements().await.unwrap();
    }
}
