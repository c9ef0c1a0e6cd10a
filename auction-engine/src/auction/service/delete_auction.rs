use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct DeleteAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Removes an auction record. Live auctions cannot be deleted; bidders
    /// are actively racing on them.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn delete_auction(&self, input: DeleteAuctionInput) -> Result<(), RestError> {
        let auction = self.repo.get_auction(input.auction_id).await?;
        if auction.status == entities::AuctionStatus::Live {
            return Err(RestError::AuctionLive);
        }
        self.repo.remove_auction(input.auction_id).await
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

    fn auction(status: entities::AuctionStatus) -> entities::Auction {
        let now = OffsetDateTime::UNIX_EPOCH;
        entities::Auction {
            id: entities::AuctionId::new_v4(),
            product_id: ProductId::new_v4(),
            start_time: now,
            end_time: now + Duration::hours(1),
            start_price: 5000,
            current_highest_bid: 0,
            min_bid_increment: 500,
            status,
            settlement: entities::SettlementState::NotDue,
            creation_time: now,
        }
    }

    #[tokio::test]
    async fn delete_auction_refuses_live_auction() {
        let existing = auction(entities::AuctionStatus::Live);
        let auction_id = existing.id;

        let mut db = MockDatabase::new();
        db.expect_get_auction()
            .returning(move |_| Ok(models::Auction::from(&existing)));
        db.expect_remove_auction().times(0);

        let service = Service::new_with_mocks(
            db,
            MockProductClient::new(),
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        let result = service.delete_auction(DeleteAuctionInput { auction_id }).await;
        assert!(matches!(result, Err(RestError::AuctionLive)));
    }

    #[tokio::test]
    async fn delete_auction_removes_upcoming_auction() {
        let existing = auction(entities::AuctionStatus::Upcoming);
        let auction_id = existing.id;

        let mut db = MockDatabase::new();
        db.expect_get_auction()
            .returning(move |_| Ok(models::Auction::from(&existing)));
        db.expect_remove_auction()
            .withf(move |id| *id == auction_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = Service::new_with_mocks(
            db,
            MockProductClient::new(),
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        service
            .delete_auction(DeleteAuctionInput { auction_id })
            .await
            .unwrap();
    }
}
