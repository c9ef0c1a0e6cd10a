use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        product::entities::ProductStatus,
    },
};

pub struct AddAuctionInput {
    pub auction_create: entities::AuctionCreate,
}

impl Service {
    /// Registers a new auction. The status is forced to Upcoming and the
    /// highest bid to zero regardless of what the caller sent; only the
    /// lifecycle scheduler moves an auction forward from there.
    #[tracing::instrument(skip_all, fields(auction_id, product_id))]
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let create = input.auction_create;
        tracing::Span::current().record("product_id", create.product_id.to_string());

        if create.start_time >= create.end_time {
            return Err(RestError::InvalidSchedule(
                "Start time must be before end time".to_string(),
            ));
        }
        if create.end_time <= self.clock.now() {
            return Err(RestError::InvalidSchedule(
                "End time is already in the past".to_string(),
            ));
        }

        let product = self.product_client.get_product(create.product_id).await?;
        if product.status != ProductStatus::Pending {
            return Err(RestError::InvalidProduct(format!(
                "Product {} is already up for auction",
                product.product_id
            )));
        }

        let auction = entities::Auction {
            id:                  entities::AuctionId::new_v4(),
            product_id:          create.product_id,
            start_time:          create.start_time,
            end_time:            create.end_time,
            start_price:         create.start_price,
            current_highest_bid: 0,
            min_bid_increment:   create.min_bid_increment,
            status:              entities::AuctionStatus::Upcoming,
            settlement:          entities::SettlementState::NotDue,
            creation_time:       self.clock.now(),
        };
        self.repo.add_auction(&auction).await?;
        tracing::Span::current().record("auction_id", auction.id.to_string());

        self.product_client
            .set_status(create.product_id, ProductStatus::Active)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction.id.to_string(),
                    "Failed to activate product for new auction"
                );
                RestError::TemporarilyUnavailable
            })?;

        Ok(auction)
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
            product::{
                client::MockProductClient,
                entities::Product,
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    fn product(product_id: ProductId, status: ProductStatus) -> Product {
        Product {
            product_id,
            product_name: "lamp".to_string(),
            product_description: "an old lamp".to_string(),
            price: 5000,
            seller_name: "bob".to_string(),
            status,
        }
    }

    fn create_input(now: OffsetDateTime, product_id: ProductId) -> AddAuctionInput {
        AddAuctionInput {
            auction_create: entities::AuctionCreate {
                product_id,
                start_time: now + Duration::minutes(5),
                end_time: now + Duration::hours(1),
                start_price: 5000,
                min_bid_increment: 500,
            },
        }
    }

    #[tokio::test]
    async fn add_auction_forces_upcoming_and_activates_product() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let product_id = ProductId::new_v4();

        let mut db = MockDatabase::new();
        db.expect_add_auction()
            .withf(|auction| {
                auction.status == crate::auction::repository::AuctionStatus::Upcoming
                    && auction.settlement == crate::auction::repository::SettlementState::NotDue
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut product_client = MockProductClient::new();
        product_client
            .expect_get_product()
            .returning(move |id| Ok(product(id, ProductStatus::Pending)));
        product_client
            .expect_set_status()
            .withf(|_, status| *status == ProductStatus::Active)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = Service::new_with_mocks(db, product_client, FrozenClock(now));
        let auction = service
            .add_auction(create_input(now, product_id))
            .await
            .unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Upcoming);
        assert_eq!(auction.current_highest_bid, 0);
        assert_eq!(auction.settlement, entities::SettlementState::NotDue);
    }

    #[tokio::test]
    async fn add_auction_rejects_non_pending_product() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let product_id = ProductId::new_v4();

        let mut product_client = MockProductClient::new();
        product_client
            .expect_get_product()
            .returning(move |id| Ok(product(id, ProductStatus::Active)));

        let service =
            Service::new_with_mocks(MockDatabase::new(), product_client, FrozenClock(now));
        let result = service.add_auction(create_input(now, product_id)).await;
        assert!(matches!(result, Err(RestError::InvalidProduct(_))));
    }

    #[tokio::test]
    async fn add_auction_rejects_inverted_schedule() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let mut input = create_input(now, ProductId::new_v4());
        input.auction_create.end_time = input.auction_create.start_time - Duration::minutes(1);

        let service = Service::new_with_mocks(
            MockDatabase::new(),
            MockProductClient::new(),
            FrozenClock(now),
        );
        let result = service.add_auction(input).await;
        assert!(matches!(result, Err(RestError::InvalidSchedule(_))));
    }
}
