mod add_auction;
mod begin_auction;
mod conclude_auction;
mod get_auction;
mod get_auctions;
mod get_auctions_by_status;
mod get_unsettled_auctions;
mod mark_settled;
pub mod models;
mod remove_auction;
mod swap_highest_bid;
mod update_auction;

pub use models::*;

pub struct Repository {
    pub db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
