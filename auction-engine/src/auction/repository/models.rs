#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        auction::entities,
        kernel::{
            db::DB,
            entities::{
                Amount,
                ProductId,
            },
        },
    },
    axum::async_trait,
    sqlx::{
        types::BigDecimal,
        FromRow,
    },
    std::num::ParseIntError,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
    tracing::{
        info_span,
        Instrument,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Upcoming,
    Live,
    Ended,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Upcoming => AuctionStatus::Upcoming,
            entities::AuctionStatus::Live => AuctionStatus::Live,
            entities::AuctionStatus::Ended => AuctionStatus::Ended,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Upcoming => entities::AuctionStatus::Upcoming,
            AuctionStatus::Live => entities::AuctionStatus::Live,
            AuctionStatus::Ended => entities::AuctionStatus::Ended,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "settlement_state", rename_all = "snake_case")]
pub enum SettlementState {
    NotDue,
    Pending,
    Completed,
}

impl From<entities::SettlementState> for SettlementState {
    fn from(state: entities::SettlementState) -> Self {
        match state {
            entities::SettlementState::NotDue => SettlementState::NotDue,
            entities::SettlementState::Pending => SettlementState::Pending,
            entities::SettlementState::Completed => SettlementState::Completed,
        }
    }
}

impl From<SettlementState> for entities::SettlementState {
    fn from(state: SettlementState) -> Self {
        match state {
            SettlementState::NotDue => entities::SettlementState::NotDue,
            SettlementState::Pending => entities::SettlementState::Pending,
            SettlementState::Completed => entities::SettlementState::Completed,
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Auction {
    pub id:                  entities::AuctionId,
    pub product_id:          ProductId,
    pub start_time:          PrimitiveDateTime,
    pub end_time:            PrimitiveDateTime,
    pub start_price:         BigDecimal,
    pub current_highest_bid: BigDecimal,
    pub min_bid_increment:   BigDecimal,
    pub status:              AuctionStatus,
    pub settlement:          SettlementState,
    pub creation_time:       PrimitiveDateTime,
}

pub fn convert_amount(amount: Amount) -> BigDecimal {
    BigDecimal::from(amount)
}

fn parse_amount(amount: &BigDecimal) -> anyhow::Result<Amount> {
    amount
        .to_string()
        .parse()
        .map_err(|e: ParseIntError| anyhow::anyhow!(e))
}

fn as_primitive(time: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(time.date(), time.time())
}

impl Auction {
    pub fn get_auction_entity(&self) -> anyhow::Result<entities::Auction> {
        Ok(entities::Auction {
            id:                  self.id,
            product_id:          self.product_id,
            start_time:          self.start_time.assume_offset(UtcOffset::UTC),
            end_time:            self.end_time.assume_offset(UtcOffset::UTC),
            start_price:         parse_amount(&self.start_price)?,
            current_highest_bid: parse_amount(&self.current_highest_bid)?,
            min_bid_increment:   parse_amount(&self.min_bid_increment)?,
            status:              self.status.into(),
            settlement:          self.settlement.into(),
            creation_time:       self.creation_time.assume_offset(UtcOffset::UTC),
        })
    }
}

impl From<&entities::Auction> for Auction {
    fn from(auction: &entities::Auction) -> Self {
        Self {
            id:                  auction.id,
            product_id:          auction.product_id,
            start_time:          as_primitive(auction.start_time),
            end_time:            as_primitive(auction.end_time),
            start_price:         convert_amount(auction.start_price),
            current_highest_bid: convert_amount(auction.current_highest_bid),
            min_bid_increment:   convert_amount(auction.min_bid_increment),
            status:              auction.status.into(),
            settlement:          auction.settlement.into(),
            creation_time:       as_primitive(auction.creation_time),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RestError>;
    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError>;
    async fn get_auctions(&self) -> Result<Vec<Auction>, RestError>;
    async fn get_auctions_by_status(&self, status: AuctionStatus)
        -> anyhow::Result<Vec<Auction>>;
    async fn update_auction(&self, auction: &Auction) -> Result<(), RestError>;
    async fn swap_highest_bid(
        &self,
        auction_id: entities::AuctionId,
        expected: BigDecimal,
        new: BigDecimal,
    ) -> Result<bool, RestError>;
    async fn begin_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool>;
    async fn conclude_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool>;
    async fn get_unsettled_auctions(&self) -> anyhow::Result<Vec<Auction>>;
    async fn mark_settled(&self, auction_id: entities::AuctionId) -> anyhow::Result<()>;
    async fn remove_auction(&self, auction_id: entities::AuctionId) -> Result<(), RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO auction (id, product_id, start_time, end_time, start_price, current_highest_bid, min_bid_increment, status, settlement, creation_time) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(auction.id)
        .bind(auction.product_id)
        .bind(auction.start_time)
        .bind(auction.end_time)
        .bind(&auction.start_price)
        .bind(&auction.current_highest_bid)
        .bind(&auction.min_bid_increment)
        .bind(auction.status)
        .bind(auction.settlement)
        .bind(auction.creation_time)
        .execute(self)
        .instrument(info_span!("db_add_auction"))
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), auction_id = auction.id.to_string(), "Failed to insert auction");
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError> {
        sqlx::query_as("SELECT * FROM auction WHERE id = $1")
            .bind(auction_id)
            .fetch_one(self)
            .instrument(info_span!("db_get_auction"))
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::AuctionNotFound,
                _ => {
                    tracing::error!(
                        error = e.to_string(),
                        auction_id = auction_id.to_string(),
                        "Failed to get auction from db"
                    );
                    RestError::TemporarilyUnavailable
                }
            })
    }

    async fn get_auctions(&self) -> Result<Vec<Auction>, RestError> {
        sqlx::query_as("SELECT * FROM auction ORDER BY creation_time")
            .fetch_all(self)
            .instrument(info_span!("db_get_auctions"))
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "Failed to list auctions from db");
                RestError::TemporarilyUnavailable
            })
    }

    async fn get_auctions_by_status(
        &self,
        status: AuctionStatus,
    ) -> anyhow::Result<Vec<Auction>> {
        let auctions = sqlx::query_as("SELECT * FROM auction WHERE status = $1")
            .bind(status)
            .fetch_all(self)
            .instrument(info_span!("db_get_auctions_by_status"))
            .await?;
        Ok(auctions)
    }

    async fn update_auction(&self, auction: &Auction) -> Result<(), RestError> {
        sqlx::query(
            "UPDATE auction SET product_id = $2, start_time = $3, end_time = $4, start_price = $5, current_highest_bid = $6, min_bid_increment = $7, status = $8, settlement = $9 WHERE id = $1",
        )
        .bind(auction.id)
        .bind(auction.product_id)
        .bind(auction.start_time)
        .bind(auction.end_time)
        .bind(&auction.start_price)
        .bind(&auction.current_highest_bid)
        .bind(&auction.min_bid_increment)
        .bind(auction.status)
        .bind(auction.settlement)
        .execute(self)
        .instrument(info_span!("db_update_auction"))
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), auction_id = auction.id.to_string(), "Failed to update auction");
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    async fn swap_highest_bid(
        &self,
        auction_id: entities::AuctionId,
        expected: BigDecimal,
        new: BigDecimal,
    ) -> Result<bool, RestError> {
        let result = sqlx::query(
            "UPDATE auction SET current_highest_bid = $3 WHERE id = $1 AND current_highest_bid = $2",
        )
        .bind(auction_id)
        .bind(expected)
        .bind(new)
        .execute(self)
        .instrument(info_span!("db_swap_highest_bid"))
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = auction_id.to_string(),
                "Failed to swap highest bid"
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(result.rows_affected() == 1)
    }

    async fn begin_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool> {
        let result =
            sqlx::query("UPDATE auction SET status = 'live' WHERE id = $1 AND status = 'upcoming'")
                .bind(auction_id)
                .execute(self)
                .instrument(info_span!("db_begin_auction"))
                .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn conclude_auction(&self, auction_id: entities::AuctionId) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE auction SET status = 'ended', settlement = 'pending' WHERE id = $1 AND status = 'live'",
        )
        .bind(auction_id)
        .execute(self)
        .instrument(info_span!("db_conclude_auction"))
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn get_unsettled_auctions(&self) -> anyhow::Result<Vec<Auction>> {
        let auctions = sqlx::query_as(
            "SELECT * FROM auction WHERE status = 'ended' AND settlement = 'pending'",
        )
        .fetch_all(self)
        .instrument(info_span!("db_get_unsettled_auctions"))
        .await?;
        Ok(auctions)
    }

    async fn mark_settled(&self, auction_id: entities::AuctionId) -> anyhow::Result<()> {
        sqlx::query("UPDATE auction SET settlement = 'completed' WHERE id = $1 AND settlement = 'pending'")
            .bind(auction_id)
            .execute(self)
            .instrument(info_span!("db_mark_settled"))
            .await?;
        Ok(())
    }

    async fn remove_auction(&self, auction_id: entities::AuctionId) -> Result<(), RestError> {
        sqlx::query("DELETE FROM auction WHERE id = $1")
            .bind(auction_id)
            .execute(self)
            .instrument(info_span!("db_remove_auction"))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.to_string(),
                    "Failed to delete auction"
                );
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }
}
