use {
    crate::{
        api,
        auction,
        bid,
        config::{
            Config,
            RunOptions,
        },
        kernel::clock::{
            Clock,
            SystemClock,
        },
        product::{
            HttpProductClient,
            ProductClient,
        },
        state::Store,
    },
    anyhow::anyhow,
    futures::future::join_all,
    sqlx::postgres::PgPoolOptions,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shut down signal received, waiting for tasks...");
            SHOULD_EXIT.store(true, Ordering::Release);
        }
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let product_client: Arc<dyn ProductClient> = Arc::new(HttpProductClient::new(
        config.product_service_url.clone(),
        config.product_timeout,
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let task_tracker = TaskTracker::new();

    let auction_service = auction::service::Service::new(
        pool.clone(),
        auction::service::Config {
            tick_interval: config.tick_interval,
        },
        product_client,
        clock.clone(),
        task_tracker.clone(),
    );
    let bid_service = bid::service::Service::new(
        pool,
        bid::service::Config {
            max_bid_attempts: config.max_bid_attempts,
        },
        auction_service.clone(),
        clock,
    );
    let store = Arc::new(Store {
        auction_service: auction_service.clone(),
        bid_service,
    });

    let lifecycle_loop = tokio::spawn(async move { auction_service.run_lifecycle_loop().await });
    let server_loop = tokio::spawn(api::start_api(run_options, store));
    join_all(vec![lifecycle_loop, server_loop]).await;
    task_tracker.close();
    task_tracker.wait().await;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down.
// This is used to gracefully shutdown the application.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
