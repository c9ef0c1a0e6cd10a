use {
    super::Service,
    crate::{
        api::RestError,
        auction::{
            entities::{
                AuctionId,
                AuctionStatus,
            },
            service::get_auction_by_id::GetAuctionByIdInput,
        },
        bid::entities,
    },
};

pub struct GetHighestBidderInput {
    pub auction_id: AuctionId,
}

impl Service {
    /// The ledger entry behind the auction's cached highest amount. Should
    /// several entries share that amount, the earliest acceptance wins.
    pub async fn get_highest_bidder(
        &self,
        input: GetHighestBidderInput,
    ) -> Result<entities::Bid, RestError> {
        let auction = self
            .auction_service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: input.auction_id,
            })
            .await?;
        if auction.status == AuctionStatus::Upcoming {
            return Err(RestError::AuctionNotStarted);
        }
        let bids = self
            .repo
            .find_bids_by_amount(input.auction_id, auction.current_highest_bid)
            .await?;
        bids.into_iter().next().ok_or(RestError::BidNotFound)
    }
}
