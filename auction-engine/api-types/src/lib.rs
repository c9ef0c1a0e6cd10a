use {
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod auction;
pub mod bid;

/// Monetary value in minor currency units (cents).
pub type Amount = u64;

#[derive(ToResponse, ToSchema, Serialize, Deserialize)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub error: String,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "v1")]
    V1,
    #[strum(serialize = "")]
    Root,
    #[strum(serialize = "live")]
    Liveness,
    #[strum(serialize = "docs")]
    Docs,
}

/// The resource a route operates on, used by the capability table to decide
/// whether a role may touch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Auctions,
    Bids,
}

pub struct RouteProperties {
    pub method:    http::Method,
    pub full_path: String,
    pub resource:  Option<Resource>,
}

pub trait Routable: AsRef<str> + Clone {
    fn properties(&self) -> RouteProperties;
}

impl Routable for Route {
    fn properties(&self) -> RouteProperties {
        RouteProperties {
            method:    http::Method::GET,
            full_path: self.as_ref().to_string(),
            resource:  None,
        }
    }
}
