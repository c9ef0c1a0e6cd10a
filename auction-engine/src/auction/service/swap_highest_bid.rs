use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::Amount,
    },
};

pub struct SwapHighestBidInput {
    pub auction_id: entities::AuctionId,
    pub expected:   Amount,
    pub new:        Amount,
}

impl Service {
    /// Conditionally advances the auction's cached highest bid. The bid
    /// acceptance protocol is the only caller; the condition keeps a stale
    /// reader from overwriting a higher concurrent bid with a lower one.
    pub async fn swap_highest_bid(&self, input: SwapHighestBidInput) -> Result<bool, RestError> {
        self.repo
            .swap_highest_bid(input.auction_id, input.expected, input.new)
            .await
    }
}
