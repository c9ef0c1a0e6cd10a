use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct UpdateAuctionInput {
    pub auction_id: entities::AuctionId,
    pub update:     entities::AuctionUpdate,
}

impl Service {
    /// Admin overwrite of an auction's schedule and pricing. The status may
    /// only stay put or move one step forward; the scheduler depends on the
    /// transition order never being violated from the outside.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn update_auction(
        &self,
        input: UpdateAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let existing = self.repo.get_auction(input.auction_id).await?;
        if !existing.status.can_transition_to(input.update.status) {
            return Err(RestError::IllegalTransition(format!(
                "Cannot move auction from {:?} to {:?}",
                existing.status, input.update.status
            )));
        }

        let auction = entities::Auction {
            start_time: input.update.start_time,
            end_time: input.update.end_time,
            start_price: input.update.start_price,
            min_bid_increment: input.update.min_bid_increment,
            status: input.update.status,
            ..existing
        };
        self.repo.update_auction(&auction).await?;
        Ok(auction)
    }
}
