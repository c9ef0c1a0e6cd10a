use {
    crate::{
        auction::AuctionId,
        Amount,
        Resource,
        Routable,
        Route,
        RouteProperties,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToSchema,
    },
    uuid::Uuid,
};

pub type BidId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct Bid {
    /// The unique id of the accepted bid.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:              BidId,
    /// The identity of the bidder as forwarded by the gateway.
    #[schema(example = "alice")]
    pub bidder:          String,
    /// The auction this bid was placed on.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id:      AuctionId,
    /// Bid amount in minor currency units.
    #[schema(example = 7500)]
    pub amount:          Amount,
    /// Server-assigned acceptance time.
    #[schema(example = "2026-08-07T12:34:56+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub submission_time: OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BidCreate {
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
    /// Bid amount in minor currency units. Must be at least the auction's
    /// current highest bid plus its minimum increment.
    #[schema(example = 7500)]
    pub amount:     Amount,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct BidResult {
    #[schema(example = "OK")]
    pub status: String,
    /// The id of the accepted bid.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:     BidId,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct Bids {
    pub items: Vec<Bid>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct HighestBid {
    /// The auction's cached highest accepted amount, 0 if no bid landed yet.
    #[schema(example = 7500)]
    pub amount: Amount,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
pub struct BidsByAuctionPathParams {
    /// The id of the auction to list bids for.
    #[param(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
pub struct AuctionQueryParams {
    /// The id of the auction to query.
    #[param(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
}

#[derive(AsRefStr, Clone)]
pub enum BidRoute {
    #[strum(serialize = "")]
    PostBid,
    #[strum(serialize = "/auction/:auction_id")]
    GetBidsByAuction,
    #[strum(serialize = "/highest")]
    GetHighestBid,
    #[strum(serialize = "/winner")]
    GetWinningBid,
}

impl Routable for BidRoute {
    fn properties(&self) -> RouteProperties {
        let method = match self {
            BidRoute::PostBid => http::Method::POST,
            BidRoute::GetBidsByAuction | BidRoute::GetHighestBid | BidRoute::GetWinningBid => {
                http::Method::GET
            }
        };
        RouteProperties {
            method,
            full_path: format!("{}/bids{}", Route::V1.as_ref(), self.as_ref()),
            resource: Some(Resource::Bids),
        }
    }
}
