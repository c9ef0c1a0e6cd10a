use {
    crate::{
        api::auth::{
            Principal,
            Role,
        },
        auction,
        bid,
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    auction_engine_api_types::{
        auction::{
            Auction,
            AuctionCreate,
            AuctionStatus,
            AuctionUpdate,
            SettlementState,
        },
        bid::{
            Bid,
            BidCreate,
            BidResult,
            Bids,
            HighestBid,
        },
        ErrorBodyResponse,
        Routable,
        Route,
    },
    axum::{
        async_trait,
        extract::FromRequestParts,
        http::{
            request::Parts,
            Method,
            StatusCode,
        },
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            on,
            MethodFilter,
        },
        Json,
        Router,
    },
    clap::crate_version,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

pub mod auth;

#[derive(Clone, Debug)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The auction schedule is malformed
    InvalidSchedule(String),
    /// The referenced product cannot be auctioned
    InvalidProduct(String),
    /// The bid amount does not clear the current minimum
    InvalidBidAmount(String),
    /// The auction was not found
    AuctionNotFound,
    /// The bid was not found
    BidNotFound,
    /// The product was not found
    ProductNotFound,
    /// Bidding is not open on the auction
    AuctionNotLive,
    /// The auction has not started yet
    AuctionNotStarted,
    /// The auction is live and cannot be removed
    AuctionLive,
    /// The requested status change violates the transition order
    IllegalTransition(String),
    /// The bid lost the race against concurrent bids too many times
    ConcurrentBidConflict,
    /// The caller did not present a valid identity
    Unauthorized,
    /// The caller's role does not permit the operation
    Forbidden,
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::InvalidSchedule(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid schedule: {}", msg))
            }
            RestError::InvalidProduct(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid product: {}", msg))
            }
            RestError::InvalidBidAmount(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid bid amount: {}", msg))
            }
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::BidNotFound => (
                StatusCode::NOT_FOUND,
                "Bid with the specified id was not found".to_string(),
            ),
            RestError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "Product with the specified id was not found".to_string(),
            ),
            RestError::AuctionNotLive => (
                StatusCode::CONFLICT,
                "Bidding is not open on this auction".to_string(),
            ),
            RestError::AuctionNotStarted => (
                StatusCode::CONFLICT,
                "Auction has not started yet".to_string(),
            ),
            RestError::AuctionLive => (
                StatusCode::CONFLICT,
                "A live auction cannot be deleted".to_string(),
            ),
            RestError::IllegalTransition(msg) => {
                (StatusCode::CONFLICT, format!("Illegal transition: {}", msg))
            }
            RestError::ConcurrentBidConflict => (
                StatusCode::CONFLICT,
                "Too many concurrent bids, please retry".to_string(),
            ),
            RestError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or malformed identity headers".to_string(),
            ),
            RestError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Your role does not permit this operation".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

async fn root() -> String {
    format!("Auction Engine API {}", crate_version!())
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// Identity forwarded by the gateway. The gateway has already validated the
/// credential; the engine only consumes the resulting claims and applies
/// the capability table.
pub struct Auth {
    pub principal: Principal,
}

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get("x-user")
            .and_then(|value| value.to_str().ok())
            .ok_or(RestError::Unauthorized)?
            .to_string();
        let role: Role = parts
            .headers
            .get("x-role")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .ok_or(RestError::Unauthorized)?;

        if !auth::is_allowed(role, parts.uri.path(), &parts.method) {
            tracing::debug!(
                user,
                role = ?role,
                path = parts.uri.path(),
                method = %parts.method,
                "Denied by capability table"
            );
            return Err(RestError::Forbidden);
        }
        Ok(Self {
            principal: Principal { user, role },
        })
    }
}

pub struct WrappedRouter {
    pub router: Router<Arc<Store>>,
}

impl WrappedRouter {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    pub fn route<H, T>(self, route: impl Routable, handler: H) -> Self
    where
        H: axum::handler::Handler<T, Arc<Store>>,
        T: 'static,
    {
        let properties = route.properties();
        let filter = match properties.method {
            Method::POST => MethodFilter::POST,
            Method::PUT => MethodFilter::PUT,
            Method::DELETE => MethodFilter::DELETE,
            _ => MethodFilter::GET,
        };
        Self {
            router: self
                .router
                .route(&properties.full_path, on(filter, handler)),
        }
    }
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names,
    // otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    auction::api::post_auction,
    auction::api::get_auctions,
    auction::api::get_auction,
    auction::api::put_auction,
    auction::api::delete_auction,
    bid::api::post_bid,
    bid::api::get_bids_by_auction,
    bid::api::get_highest_bid,
    bid::api::get_winning_bid,
    ),
    components(
    schemas(
    Auction,
    AuctionCreate,
    AuctionUpdate,
    AuctionStatus,
    SettlementState,
    Bid,
    BidCreate,
    BidResult,
    Bids,
    HighestBid,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    ),
    ),
    tags(
    (name = "Auction Engine", description = "The auction lifecycle and bid consistency engine. It drives \
    auctions through their schedule, accepts monotonically increasing bids and reconciles outcomes with the product catalog.")
    )
    )]
    struct ApiDoc;

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url(Route::Docs.as_ref(), ApiDoc::openapi()))
        .merge(auction::api::get_routes())
        .merge(bid::api::get_routes())
        .route(Route::Root.as_ref(), get(root))
        .route(Route::Liveness.as_ref(), get(live))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(listen_addr = %run_options.server.listen_addr, "Starting RPC server...");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down RPC server...");
        })
        .await?;
    Ok(())
}
