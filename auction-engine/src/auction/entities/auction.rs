use {
    crate::kernel::entities::{
        Amount,
        ProductId,
    },
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Upcoming,
    Live,
    Ended,
}

impl AuctionStatus {
    /// The only status reachable from this one. Transitions never skip a
    /// state and never reverse.
    pub fn next(&self) -> Option<AuctionStatus> {
        match self {
            AuctionStatus::Upcoming => Some(AuctionStatus::Live),
            AuctionStatus::Live => Some(AuctionStatus::Ended),
            AuctionStatus::Ended => None,
        }
    }

    pub fn can_transition_to(&self, new: AuctionStatus) -> bool {
        *self == new || self.next() == Some(new)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementState {
    NotDue,
    Pending,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:                  AuctionId,
    pub product_id:          ProductId,
    pub start_time:          OffsetDateTime,
    pub end_time:            OffsetDateTime,
    pub start_price:         Amount,
    pub current_highest_bid: Amount,
    pub min_bid_increment:   Amount,
    pub status:              AuctionStatus,
    pub settlement:          SettlementState,
    pub creation_time:       OffsetDateTime,
}

impl Auction {
    pub fn is_due_to_start(&self, now: OffsetDateTime) -> bool {
        self.status == AuctionStatus::Upcoming && self.start_time <= now
    }

    pub fn is_due_to_end(&self, now: OffsetDateTime) -> bool {
        self.status == AuctionStatus::Live && self.end_time <= now
    }

    /// The least a new bid must reach to be accepted. Before any bid lands
    /// the floor is the opening price plus one increment, so an accepted
    /// highest bid is always at least the start price.
    pub fn minimum_acceptable_bid(&self) -> Amount {
        if self.current_highest_bid == 0 {
            self.start_price + self.min_bid_increment
        } else {
            self.current_highest_bid + self.min_bid_increment
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuctionCreate {
    pub product_id:        ProductId,
    pub start_time:        OffsetDateTime,
    pub end_time:          OffsetDateTime,
    pub start_price:       Amount,
    pub min_bid_increment: Amount,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuctionUpdate {
    pub start_time:        OffsetDateTime,
    pub end_time:          OffsetDateTime,
    pub start_price:       Amount,
    pub min_bid_increment: Amount,
    pub status:            AuctionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions_are_single_step_and_forward_only() {
        assert_eq!(AuctionStatus::Upcoming.next(), Some(AuctionStatus::Live));
        assert_eq!(AuctionStatus::Live.next(), Some(AuctionStatus::Ended));
        assert_eq!(AuctionStatus::Ended.next(), None);

        assert!(AuctionStatus::Upcoming.can_transition_to(AuctionStatus::Live));
        assert!(!AuctionStatus::Upcoming.can_transition_to(AuctionStatus::Ended));
        assert!(!AuctionStatus::Live.can_transition_to(AuctionStatus::Upcoming));
        assert!(!AuctionStatus::Ended.can_transition_to(AuctionStatus::Live));
        assert!(AuctionStatus::Live.can_transition_to(AuctionStatus::Live));
    }

    #[test]
    fn first_bid_floor_includes_start_price() {
        let auction = Auction {
            id: AuctionId::new_v4(),
            product_id: ProductId::new_v4(),
            start_time: OffsetDateTime::UNIX_EPOCH,
            end_time: OffsetDateTime::UNIX_EPOCH,
            start_price: 5000,
            current_highest_bid: 0,
            min_bid_increment: 500,
            status: AuctionStatus::Live,
            settlement: SettlementState::NotDue,
            creation_time: OffsetDateTime::UNIX_EPOCH,
        };
        assert_eq!(auction.minimum_acceptable_bid(), 5500);

        let auction = Auction {
            current_highest_bid: 7500,
            ..auction
        };
        assert_eq!(auction.minimum_acceptable_bid(), 8000);
    }
}
