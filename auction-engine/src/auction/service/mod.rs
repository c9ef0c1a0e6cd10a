use {
    super::repository::{
        self,
        Database,
        Repository,
    },
    crate::{
        kernel::clock::Clock,
        product::ProductClient,
    },
    std::{
        sync::Arc,
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

pub mod add_auction;
pub mod delete_auction;
pub mod end_auctions;
pub mod get_auction_by_id;
pub mod get_auctions;
pub mod retry_pending_settlements;
pub mod settle_auction;
pub mod start_auctions;
pub mod swap_highest_bid;
pub mod update_auction;
pub mod workers;

pub struct Config {
    /// How often the lifecycle scans run.
    pub tick_interval: Duration,
}

pub struct ServiceInner {
    config:         Config,
    repo:           Arc<Repository>,
    product_client: Arc<dyn ProductClient>,
    clock:          Arc<dyn Clock>,
    task_tracker:   TaskTracker,
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
        product_client: Arc<dyn ProductClient>,
        clock: Arc<dyn Clock>,
        task_tracker: TaskTracker,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(repository::Repository::new(db)),
            product_client,
            clock,
            task_tracker,
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
            auction::repository::MockDatabase,
            kernel::clock::Clock,
            product::client::MockProductClient,
        },
        std::{
            sync::Arc,
            time::Duration,
        },
    };

    impl Service {
        pub fn new_with_mocks(
            db: MockDatabase,
            product_client: MockProductClient,
            clock: impl Clock,
        ) -> Self {
            Service::new(
                db,
                Config {
                    tick_interval: Duration::from_secs(10),
                },
                Arc::new(product_client),
                Arc::new(clock),
                tokio_util::task::TaskTracker::new(),
            )
        }
    }
}
