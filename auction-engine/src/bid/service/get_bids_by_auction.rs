use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
    },
};

pub struct GetBidsByAuctionInput {
    pub auction_id: AuctionId,
}

impl Service {
    pub async fn get_bids_by_auction(
        &self,
        input: GetBidsByAuctionInput,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.repo.get_bids_by_auction(input.auction_id).await
    }
}
