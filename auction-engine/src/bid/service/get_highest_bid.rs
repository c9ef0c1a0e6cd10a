use {
    super::Service,
    crate::{
        api::RestError,
        auction::{
            entities::AuctionId,
            service::get_auction_by_id::GetAuctionByIdInput,
        },
        kernel::entities::Amount,
    },
};

pub struct GetHighestBidInput {
    pub auction_id: AuctionId,
}

impl Service {
    /// The auction's cached highest amount. Deliberately not recomputed
    /// from the ledger; the acceptance protocol keeps the cache current.
    pub async fn get_highest_bid(&self, input: GetHighestBidInput) -> Result<Amount, RestError> {
        let auction = self
            .auction_service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: input.auction_id,
            })
            .await?;
        Ok(auction.current_highest_bid)
    }
}
