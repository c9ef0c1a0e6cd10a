use crate::{
    auction,
    bid,
};

/// Everything the request handlers need, wired once at startup.
pub struct Store {
    pub auction_service: auction::service::Service,
    pub bid_service:     bid::service::Service,
}
