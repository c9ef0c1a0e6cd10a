use {
    super::Service,
    crate::auction::entities,
};

impl Service {
    /// Start scan: move every Upcoming auction whose start time has passed
    /// to Live. The transition is conditioned on the stored status, so a
    /// scan racing another scan (or an admin update) is a no-op for the
    /// auctions it loses.
    #[tracing::instrument(skip_all)]
    pub async fn start_auctions(&self) -> anyhow::Result<()> {
        let upcoming = self
            .repo
            .get_auctions_by_status(entities::AuctionStatus::Upcoming)
            .await?;
        let now = self.clock.now();
        for auction in upcoming {
            if !auction.is_due_to_start(now) {
                continue;
            }
            match self.repo.begin_auction(auction.id).await {
                Ok(true) => {
                    tracing::info!(auction_id = %auction.id, "Auction is now live");
                }
                Ok(false) => {}
                Err(err) => {
                    tracing::error!(
                        error = ?err,
                        auction_id = %auction.id,
                        "Failed to start auction",
                    );
                }
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
            auction::repository::{
                models,
                MockDatabase,
            },
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

    fn upcoming_auction(start_offset: Duration, now: OffsetDateTime) -> entities::Auction {
        entities::Auction {
            id: entities::AuctionId::new_v4(),
            product_id: ProductId::new_v4(),
            start_time: now + start_offset,
            end_time: now + Duration::hours(1),
            start_price: 5000,
            current_highest_bid: 0,
            min_bid_increment: 500,
            status: entities::AuctionStatus::Upcoming,
            settlement: entities::SettlementState::NotDue,
            creation_time: now - Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn start_scan_only_transitions_due_auctions() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(365);
        let due = upcoming_auction(Duration::minutes(-2), now);
        let not_due = upcoming_auction(Duration::minutes(2), now);
        let due_id = due.id;

        let mut db = MockDatabase::new();
        let scanned = vec![
            models::Auction::from(&due),
            models::Auction::from(&not_due),
        ];
        db.expect_get_auctions_by_status()
            .withf(|status| *status == models::AuctionStatus::Upcoming)
            .returning(move |_| Ok(scanned.clone()));
        db.expect_begin_auction()
            .withf(move |id| *id == due_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = Service::new_with_mocks(db, MockProductClient::new(), FrozenClock(now));
        service.start_auctions().await.unwrap();
    }

    #[tokio::test]
    async fn start_scan_survives_single_auction_failure() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(365);
        let first = upcoming_auction(Duration::minutes(-5), now);
        let second = upcoming_auction(Duration::minutes(-1), now);
        let first_id = first.id;
        let second_id = second.id;

        let mut db = MockDatabase::new();
        let scanned = vec![
            models::Auction::from(&first),
            models::Auction::from(&second),
        ];
        db.expect_get_auctions_by_status()
            .returning(move |_| Ok(scanned.clone()));
        db.expect_begin_auction()
            .withf(move |id| *id == first_id)
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection reset")));
        db.expect_begin_auction()
            .withf(move |id| *id == second_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = Service::new_with_mocks(db, MockProductClient::new(), FrozenClock(now));
        service.start_auctions().await.unwrap();
    }

    #[tokio::test]
    async fn start_scan_at_exact_start_time_transitions() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(365);
        let exact = upcoming_auction(Duration::ZERO, now);
        let exact_id = exact.id;

        let mut db = MockDatabase::new();
        let scanned = vec![models::Auction::from(&exact)];
        db.expect_get_auctions_by_status()
            .returning(move |_| Ok(scanned.clone()));
        db.expect_begin_auction()
            .withf(move |id| *id == exact_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = Service::new_with_mocks(db, MockProductClient::new(), FrozenClock(now));
        service.start_auctions().await.unwrap();
    }
}
