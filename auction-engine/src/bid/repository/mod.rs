mod add_bid;
mod find_bids_by_amount;
mod get_bids_by_auction;
pub mod models;

pub use models::*;

pub struct Repository {
    pub db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
