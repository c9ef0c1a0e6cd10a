use {
    crate::{
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

pub type AuctionId = Uuid;
pub type ProductId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    /// The auction is registered but bidding has not opened yet.
    Upcoming,
    /// Bidding is open.
    Live,
    /// Bidding is closed.
    Ended,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettlementState {
    /// The auction has not ended yet.
    NotDue,
    /// The auction ended but the product status write has not succeeded yet.
    Pending,
    /// The product status reflects the auction outcome.
    Completed,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct Auction {
    /// The unique id of the auction.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:                  AuctionId,
    /// The product being sold.
    #[schema(example = "a1f9e3c2-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub product_id:          ProductId,
    /// When bidding opens.
    #[schema(example = "2026-08-07T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub start_time:          OffsetDateTime,
    /// When bidding closes.
    #[schema(example = "2026-08-08T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end_time:            OffsetDateTime,
    /// Opening price in minor currency units.
    #[schema(example = 5000)]
    pub start_price:         Amount,
    /// The highest accepted bid so far, 0 until the first bid lands.
    #[schema(example = 7500)]
    pub current_highest_bid: Amount,
    /// The least a new bid must add on top of the current highest bid.
    #[schema(example = 500)]
    pub min_bid_increment:   Amount,
    pub status:              AuctionStatus,
    pub settlement:          SettlementState,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AuctionCreate {
    #[schema(example = "a1f9e3c2-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub product_id:        ProductId,
    #[schema(example = "2026-08-07T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub start_time:        OffsetDateTime,
    #[schema(example = "2026-08-08T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end_time:          OffsetDateTime,
    #[schema(example = 5000)]
    pub start_price:       Amount,
    #[schema(example = 500)]
    pub min_bid_increment: Amount,
}

/// Full overwrite of the mutable auction fields. The status may only move
/// forward in the Upcoming -> Live -> Ended order.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AuctionUpdate {
    #[schema(example = "2026-08-07T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub start_time:        OffsetDateTime,
    #[schema(example = "2026-08-08T12:00:00+00:00", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end_time:          OffsetDateTime,
    #[schema(example = 5000)]
    pub start_price:       Amount,
    #[schema(example = 500)]
    pub min_bid_increment: Amount,
    pub status:            AuctionStatus,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
pub struct AuctionPathParams {
    /// The id of the auction.
    #[param(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
}

#[derive(AsRefStr, Clone)]
pub enum AuctionRoute {
    #[strum(serialize = "")]
    PostAuction,
    #[strum(serialize = "")]
    GetAuctions,
    #[strum(serialize = "/:auction_id")]
    GetAuction,
    #[strum(serialize = "/:auction_id")]
    PutAuction,
    #[strum(serialize = "/:auction_id")]
    DeleteAuction,
}

impl Routable for AuctionRoute {
    fn properties(&self) -> RouteProperties {
        let method = match self {
            AuctionRoute::PostAuction => http::Method::POST,
            AuctionRoute::GetAuctions | AuctionRoute::GetAuction => http::Method::GET,
            AuctionRoute::PutAuction => http::Method::PUT,
            AuctionRoute::DeleteAuction => http::Method::DELETE,
        };
        RouteProperties {
            method,
            full_path: format!("{}/auctions{}", Route::V1.as_ref(), self.as_ref()),
            resource: Some(Resource::Auctions),
        }
    }
}
