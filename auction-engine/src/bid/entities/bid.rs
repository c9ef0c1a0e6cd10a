use {
    crate::{
        auction::entities::AuctionId,
        kernel::entities::Amount,
    },
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;

/// An accepted bid. Ledger entries are immutable once recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:              BidId,
    pub bidder:          String,
    pub auction_id:      AuctionId,
    pub amount:          Amount,
    /// Stamped by the server at acceptance, never client-supplied.
    pub submission_time: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub bidder:     String,
    pub auction_id: AuctionId,
    pub amount:     Amount,
}
