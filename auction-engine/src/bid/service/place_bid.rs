use {
    super::{
        verification::VerifyBidInput,
        Service,
    },
    crate::{
        api::RestError,
        auction::service::swap_highest_bid::SwapHighestBidInput,
        bid::entities,
    },
};

pub struct PlaceBidInput {
    pub bid_create: entities::BidCreate,
}

impl Service {
    /// The bid acceptance protocol. Validation and the price write race
    /// against concurrent bidders, so the write is conditioned on the
    /// highest bid still being the value validation read; a lost race
    /// re-reads and re-validates from scratch. The ledger append happens
    /// only after the price write sticks.
    #[tracing::instrument(
        skip_all,
        fields(bid_id, auction_id = %input.bid_create.auction_id, bidder = %input.bid_create.bidder)
    )]
    pub async fn place_bid(&self, input: PlaceBidInput) -> Result<entities::Bid, RestError> {
        let bid_create = input.bid_create;
        for attempt in 0..self.config.max_bid_attempts {
            let auction = self
                .verify_bid(VerifyBidInput {
                    bid_create: bid_create.clone(),
                })
                .await?;

            let swapped = self
                .auction_service
                .swap_highest_bid(SwapHighestBidInput {
                    auction_id: auction.id,
                    expected:   auction.current_highest_bid,
                    new:        bid_create.amount,
                })
                .await?;
            if !swapped {
                tracing::debug!(attempt, "Lost the highest-bid race, retrying");
                continue;
            }

            let bid = entities::Bid {
                id:              entities::BidId::new_v4(),
                bidder:          bid_create.bidder.clone(),
                auction_id:      bid_create.auction_id,
                amount:          bid_create.amount,
                submission_time: self.clock.now(),
            };
            self.repo.add_bid(&bid).await.map_err(|e| {
                // The auction price already reflects this bid; until the
                // append is replayed the ledger is behind the cached price.
                tracing::error!(
                    auction_id = %bid.auction_id,
                    amount = bid.amount,
                    "Ledger append failed after the price update succeeded"
                );
                e
            })?;
            tracing::Span::current().record("bid_id", bid.id.to_string());
            return Ok(bid);
        }
        Err(RestError::ConcurrentBidConflict)
    }
}
