use {
    super::Service,
    crate::{
        auction::entities,
        product::entities::ProductStatus,
    },
    anyhow::Context,
};

pub struct SettleAuctionInput {
    pub auction: entities::Auction,
}

impl Service {
    /// Reconciles an ended auction with the product catalog: any accepted
    /// bid means Sold, none means Unsold. The settlement flag is cleared
    /// only after the product write succeeds, so a failure here leaves the
    /// auction in the retry scan's working set.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction.id))]
    pub async fn settle_auction(&self, input: SettleAuctionInput) -> anyhow::Result<()> {
        let auction = input.auction;
        let outcome = if auction.current_highest_bid > 0 {
            ProductStatus::Sold
        } else {
            ProductStatus::Unsold
        };
        self.product_client
            .set_status(auction.product_id, outcome)
            .await
            .context("Failed to update product status")?;
        self.repo.mark_settled(auction.id).await?;
        tracing::info!(
            auction_id = %auction.id,
            product_id = %auction.product_id,
            outcome = outcome.as_str(),
            "Auction settled",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::repository::MockDatabase,
            kernel::{
                clock::tests::FrozenClock,
                entities::ProductId,
            },
            product::client::MockProductClient,
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    fn ended_auction(current_highest_bid: u64) -> entities::Auction {
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
    async fn settlement_with_bids_marks_product_sold() {
        let auction = ended_auction(15000);
        let product_id = auction.product_id;
        let auction_id = auction.id;

        let mut db = MockDatabase::new();
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
        service
            .settle_auction(SettleAuctionInput { auction })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn settlement_without_bids_marks_product_unsold() {
        let auction = ended_auction(0);
        let product_id = auction.product_id;

        let mut db = MockDatabase::new();
        db.expect_mark_settled().times(1).returning(|_| Ok(()));

        let mut product_client = MockProductClient::new();
        product_client
            .expect_set_status()
            .withf(move |id, status| *id == product_id && *status == ProductStatus::Unsold)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = Service::new_with_mocks(
            db,
            product_client,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        service
            .settle_auction(SettleAuctionInput { auction })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_product_write_leaves_settlement_pending() {
        let auction = ended_auction(15000);

        let mut db = MockDatabase::new();
        db.expect_mark_settled().times(0);

        let mut product_client = MockProductClient::new();
        product_client
            .expect_set_status()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("product service timed out")));

        let service = Service::new_with_mocks(
            db,
            product_client,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        let result = service.settle_auction(SettleAuctionInput { auction }).await;
        assert!(result.is_err());
    }
}
