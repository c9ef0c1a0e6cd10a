use {
    super::{
        entities,
        service::{
            add_auction::AddAuctionInput,
            delete_auction::DeleteAuctionInput,
            get_auction_by_id::GetAuctionByIdInput,
            update_auction::UpdateAuctionInput,
        },
    },
    crate::{
        api::{
            Auth,
            RestError,
            WrappedRouter,
        },
        state::Store,
    },
    auction_engine_api_types::auction::{
        Auction,
        AuctionCreate,
        AuctionPathParams,
        AuctionRoute,
        AuctionStatus,
        AuctionUpdate,
        SettlementState,
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
        Router,
    },
    std::sync::Arc,
};

/// Register a new auction for a pending product.
///
/// The auction always starts out Upcoming with no bids, whatever the caller
/// sent; the lifecycle scheduler opens and closes bidding from there.
#[utoipa::path(post, path = "/v1/auctions", request_body = AuctionCreate, responses(
    (status = 200, description = "Auction was registered successfully", body = Auction),
    (status = 400, response = auction_engine_api_types::ErrorBodyResponse),
    (status = 404, description = "Product was not found", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn post_auction(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Json(auction_create): Json<AuctionCreate>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .add_auction(AddAuctionInput {
            auction_create: auction_create.into(),
        })
        .await?;
    Ok(Json(auction.into()))
}

/// List every auction known to the engine.
#[utoipa::path(get, path = "/v1/auctions", responses(
    (status = 200, description = "All auctions", body = Vec<Auction>),
),)]
pub async fn get_auctions(
    _auth: Auth,
    State(store): State<Arc<Store>>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let auctions = store.auction_service.get_auctions().await?;
    Ok(Json(auctions.into_iter().map(|a| a.into()).collect()))
}

/// Fetch a single auction by id.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}", params(AuctionPathParams), responses(
    (status = 200, description = "The auction", body = Auction),
    (status = 404, description = "Auction was not found", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn get_auction(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput {
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// Overwrite an auction's schedule and pricing.
///
/// The status may only stay put or advance one step in the
/// Upcoming -> Live -> Ended order.
#[utoipa::path(put, path = "/v1/auctions/{auction_id}", params(AuctionPathParams), request_body = AuctionUpdate, responses(
    (status = 200, description = "The updated auction", body = Auction),
    (status = 404, description = "Auction was not found", body = auction_engine_api_types::ErrorBodyResponse),
    (status = 409, description = "The status change violates the transition order", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn put_auction(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
    Json(update): Json<AuctionUpdate>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .update_auction(UpdateAuctionInput {
            auction_id: params.auction_id,
            update:     update.into(),
        })
        .await?;
    Ok(Json(auction.into()))
}

/// Delete an auction. Refused while the auction is live.
#[utoipa::path(delete, path = "/v1/auctions/{auction_id}", params(AuctionPathParams), responses(
    (status = 200, description = "Auction was deleted"),
    (status = 404, description = "Auction was not found", body = auction_engine_api_types::ErrorBodyResponse),
    (status = 409, description = "Auction is live", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn delete_auction(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
) -> Result<Json<()>, RestError> {
    store
        .auction_service
        .delete_auction(DeleteAuctionInput {
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(()))
}

pub fn get_routes() -> Router<Arc<Store>> {
    WrappedRouter::new()
        .route(AuctionRoute::PostAuction, post_auction)
        .route(AuctionRoute::GetAuctions, get_auctions)
        .route(AuctionRoute::GetAuction, get_auction)
        .route(AuctionRoute::PutAuction, put_auction)
        .route(AuctionRoute::DeleteAuction, delete_auction)
        .router
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Upcoming => AuctionStatus::Upcoming,
            entities::AuctionStatus::Live => AuctionStatus::Live,
            entities::AuctionStatus::Ended => AuctionStatus::Ended,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Upcoming => entities::AuctionStatus::Upcoming,
            AuctionStatus::Live => entities::AuctionStatus::Live,
            AuctionStatus::Ended => entities::AuctionStatus::Ended,
        }
    }
}

impl From<entities::SettlementState> for SettlementState {
    fn from(state: entities::SettlementState) -> Self {
        match state {
            entities::SettlementState::NotDue => SettlementState::NotDue,
            entities::SettlementState::Pending => SettlementState::Pending,
            entities::SettlementState::Completed => SettlementState::Completed,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Auction {
            id:                  auction.id,
            product_id:          auction.product_id,
            start_time:          auction.start_time,
            end_time:            auction.end_time,
            start_price:         auction.start_price,
            current_highest_bid: auction.current_highest_bid,
            min_bid_increment:   auction.min_bid_increment,
            status:              auction.status.into(),
            settlement:          auction.settlement.into(),
        }
    }
}

impl From<AuctionCreate> for entities::AuctionCreate {
    fn from(create: AuctionCreate) -> Self {
        entities::AuctionCreate {
            product_id:        create.product_id,
            start_time:        create.start_time,
            end_time:          create.end_time,
            start_price:       create.start_price,
            min_bid_increment: create.min_bid_increment,
        }
    }
}

impl From<AuctionUpdate> for entities::AuctionUpdate {
    fn from(update: AuctionUpdate) -> Self {
        entities::AuctionUpdate {
            start_time:        update.start_time,
            end_time:          update.end_time,
            start_price:       update.start_price,
            min_bid_increment: update.min_bid_increment,
            status:            update.status.into(),
        }
    }
}
