use {
    super::repository::{
        self,
        Database,
        Repository,
    },
    crate::{
        auction::service::Service as AuctionService,
        kernel::clock::Clock,
    },
    std::sync::Arc,
};

pub mod get_bids_by_auction;
pub mod get_highest_bid;
pub mod get_highest_bidder;
pub mod place_bid;
pub mod verification;

pub struct Config {
    /// How many times a bid retries the conditional highest-bid write
    /// before giving up with a conflict.
    pub max_bid_attempts: usize,
}

pub struct ServiceInner {
    config:          Config,
    repo:            Arc<Repository>,
    auction_service: AuctionService,
    clock:           Arc<dyn Clock>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        db: impl Database,
        config: Config,
        auction_service: AuctionService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(repository::Repository::new(db)),
            auction_service,
            clock,
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::{
            Config,
            Service,
        },
        crate::{
            auction::{
                repository::MockDatabase as MockAuctionDatabase,
                service::Service as AuctionService,
            },
            bid::repository::MockDatabase,
            kernel::clock::tests::FrozenClock,
            product::client::MockProductClient,
        },
        std::sync::Arc,
    };

    impl Service {
        pub fn new_with_mocks(
            db: MockDatabase,
            auction_db: MockAuctionDatabase,
            clock: FrozenClock,
        ) -> Self {
            let auction_service = AuctionService::new_with_mocks(
                auction_db,
                MockProductClient::new(),
                clock.clone(),
            );
            Service::new(
                db,
                Config {
                    max_bid_attempts: 3,
                },
                auction_service,
                Arc::new(clock),
            )
        }
    }
}
