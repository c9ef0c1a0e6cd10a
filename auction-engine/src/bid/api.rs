use {
    super::{
        entities,
        service::{
            get_bids_by_auction::GetBidsByAuctionInput,
            get_highest_bid::GetHighestBidInput,
            get_highest_bidder::GetHighestBidderInput,
            place_bid::PlaceBidInput,
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
    auction_engine_api_types::bid::{
        AuctionQueryParams,
        Bid,
        BidCreate,
        BidResult,
        BidRoute,
        Bids,
        BidsByAuctionPathParams,
        HighestBid,
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        Json,
        Router,
    },
    std::sync::Arc,
};

/// Place a bid on a live auction.
///
/// The bid must exceed the auction's current highest bid by at least the
/// minimum increment. Concurrent bids are linearized per auction; losing a
/// race re-validates against the fresh price before either retrying or
/// rejecting.
#[utoipa::path(post, path = "/v1/bids", request_body = BidCreate, responses(
    (status = 200, description = "Bid was accepted", body = BidResult),
    (status = 400, response = auction_engine_api_types::ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = auction_engine_api_types::ErrorBodyResponse),
    (status = 409, description = "Bidding closed or too many concurrent bids", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn post_bid(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Json(bid_create): Json<BidCreate>,
) -> Result<Json<BidResult>, RestError> {
    let bid = store
        .bid_service
        .place_bid(PlaceBidInput {
            bid_create: entities::BidCreate {
                bidder:     auth.principal.user,
                auction_id: bid_create.auction_id,
                amount:     bid_create.amount,
            },
        })
        .await?;
    Ok(Json(BidResult {
        status: "OK".to_string(),
        id:     bid.id,
    }))
}

/// Every accepted bid on an auction, earliest first.
#[utoipa::path(get, path = "/v1/bids/auction/{auction_id}", params(BidsByAuctionPathParams), responses(
    (status = 200, description = "Bids for the auction", body = Bids),
),)]
pub async fn get_bids_by_auction(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Path(params): Path<BidsByAuctionPathParams>,
) -> Result<Json<Bids>, RestError> {
    let bids = store
        .bid_service
        .get_bids_by_auction(GetBidsByAuctionInput {
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(Bids {
        items: bids.into_iter().map(|b| b.into()).collect(),
    }))
}

/// The auction's current highest accepted amount.
#[utoipa::path(get, path = "/v1/bids/highest", params(AuctionQueryParams), responses(
    (status = 200, description = "The current highest bid", body = HighestBid),
    (status = 404, description = "Auction was not found", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn get_highest_bid(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Query(params): Query<AuctionQueryParams>,
) -> Result<Json<HighestBid>, RestError> {
    let amount = store
        .bid_service
        .get_highest_bid(GetHighestBidInput {
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(HighestBid { amount }))
}

/// The bid currently winning an auction.
///
/// Fails while the auction has not started yet.
#[utoipa::path(get, path = "/v1/bids/winner", params(AuctionQueryParams), responses(
    (status = 200, description = "The winning bid", body = Bid),
    (status = 404, description = "Auction or bid was not found", body = auction_engine_api_types::ErrorBodyResponse),
    (status = 409, description = "Auction has not started", body = auction_engine_api_types::ErrorBodyResponse),
),)]
pub async fn get_winning_bid(
    _auth: Auth,
    State(store): State<Arc<Store>>,
    Query(params): Query<AuctionQueryParams>,
) -> Result<Json<Bid>, RestError> {
    let bid = store
        .bid_service
        .get_highest_bidder(GetHighestBidderInput {
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(bid.into()))
}

pub fn get_routes() -> Router<Arc<Store>> {
    WrappedRouter::new()
        .route(BidRoute::PostBid, post_bid)
        .route(BidRoute::GetBidsByAuction, get_bids_by_auction)
        .route(BidRoute::GetHighestBid, get_highest_bid)
        .route(BidRoute::GetWinningBid, get_winning_bid)
        .router
}

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Bid {
            id:              bid.id,
            bidder:          bid.bidder,
            auction_id:      bid.auction_id,
            amount:          bid.amount,
            submission_time: bid.submission_time,
        }
    }
}
