use {
    super::Service,
    crate::{
        api::RestError,
        auction::{
            entities as auction_entities,
            service::get_auction_by_id::GetAuctionByIdInput,
        },
        bid::entities,
    },
};

pub struct VerifyBidInput {
    pub bid_create: entities::BidCreate,
}

impl Service {
    /// Validates a bid against the auction's current state and returns the
    /// auction as read, so the caller can condition its price write on the
    /// exact value this validation saw.
    pub async fn verify_bid(
        &self,
        input: VerifyBidInput,
    ) -> Result<auction_entities::Auction, RestError> {
        let auction = self
            .auction_service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: input.bid_create.auction_id,
            })
            .await?;

        // Bids are only accepted while bidding is open.
        if auction.status != auction_entities::AuctionStatus::Live {
            return Err(RestError::AuctionNotLive);
        }

        let minimum = auction.minimum_acceptable_bid();
        if input.bid_create.amount < minimum {
            return Err(RestError::InvalidBidAmount(format!(
                "Bid must be at least {}",
                minimum
            )));
        }

        Ok(auction)
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::{
            auction::repository::{
                models,
                MockDatabase as MockAuctionDatabase,
            },
            bid::repository::MockDatabase,
            kernel::{
                clock::tests::FrozenClock,
                entities::ProductId,
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    pub fn live_auction(current_highest_bid: u64) -> auction_entities::Auction {
        let now = OffsetDateTime::UNIX_EPOCH;
        auction_entities::Auction {
            id: auction_entities::AuctionId::new_v4(),
            product_id: ProductId::new_v4(),
            start_time: now - Duration::hours(1),
            end_time: now + Duration::hours(1),
            start_price: 40,
            current_highest_bid,
            min_bid_increment: 10,
            status: auction_entities::AuctionStatus::Live,
            settlement: auction_entities::SettlementState::NotDue,
            creation_time: now - Duration::hours(2),
        }
    }

    pub fn bid_create(auction_id: auction_entities::AuctionId, amount: u64) -> entities::BidCreate {
        entities::BidCreate {
            bidder: "alice".to_string(),
            auction_id,
            amount,
        }
    }

    #[tokio::test]
    async fn verify_bid_rejects_non_live_auction() {
        let auction = auction_entities::Auction {
            status: auction_entities::AuctionStatus::Upcoming,
            ..live_auction(0)
        };
        let auction_id = auction.id;

        let mut auction_db = MockAuctionDatabase::new();
        auction_db
            .expect_get_auction()
            .returning(move |_| Ok(models::Auction::from(&auction)));

        let service = Service::new_with_mocks(
            MockDatabase::new(),
            auction_db,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        let result = service
            .verify_bid(VerifyBidInput {
                bid_create: bid_create(auction_id, 100),
            })
            .await;
        assert!(matches!(result, Err(RestError::AuctionNotLive)));
    }

    #[tokio::test]
    async fn verify_bid_enforces_minimum_increment() {
        let auction = live_auction(50);
        let auction_id = auction.id;

        let mut auction_db = MockAuctionDatabase::new();
        auction_db
            .expect_get_auction()
            .returning(move |_| Ok(models::Auction::from(&auction)));

        let service = Service::new_with_mocks(
            MockDatabase::new(),
            auction_db,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        let result = service
            .verify_bid(VerifyBidInput {
                bid_create: bid_create(auction_id, 59),
            })
            .await;
        assert!(matches!(result, Err(RestError::InvalidBidAmount(_))));

        let accepted = service
            .verify_bid(VerifyBidInput {
                bid_create: bid_create(auction_id, 60),
            })
            .await
            .unwrap();
        assert_eq!(accepted.current_highest_bid, 50);
    }

    #[tokio::test]
    async fn verify_bid_first_bid_must_clear_start_price() {
        // start price 40, increment 10, no bids yet: the floor is 50, not 10.
        let auction = live_auction(0);
        let auction_id = auction.id;

        let mut auction_db = MockAuctionDatabase::new();
        auction_db
            .expect_get_auction()
            .returning(move |_| Ok(models::Auction::from(&auction)));

        let service = Service::new_with_mocks(
            MockDatabase::new(),
            auction_db,
            FrozenClock(OffsetDateTime::UNIX_EPOCH),
        );
        let result = service
            .verify_bid(VerifyBidInput {
                bid_create: bid_create(auction_id, 45),
            })
            .await;
        assert!(matches!(result, Err(RestError::InvalidBidAmount(_))));
    }
}
