#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
        kernel::{
            db::DB,
            entities::Amount,
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

#[derive(Clone, FromRow, Debug)]
pub struct Bid {
    pub id:              entities::BidId,
    pub bidder:          String,
    pub auction_id:      AuctionId,
    pub amount:          BigDecimal,
    pub submission_time: PrimitiveDateTime,
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

impl Bid {
    pub fn get_bid_entity(&self) -> anyhow::Result<entities::Bid> {
        Ok(entities::Bid {
            id:              self.id,
            bidder:          self.bidder.clone(),
            auction_id:      self.auction_id,
            amount:          parse_amount(&self.amount)?,
            submission_time: self.submission_time.assume_offset(UtcOffset::UTC),
        })
    }
}

impl From<&entities::Bid> for Bid {
    fn from(bid: &entities::Bid) -> Self {
        Self {
            id:              bid.id,
            bidder:          bid.bidder.clone(),
            auction_id:      bid.auction_id,
            amount:          convert_amount(bid.amount),
            submission_time: as_primitive(bid.submission_time),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn add_bid(&self, bid: &Bid) -> Result<(), RestError>;
    async fn get_bids_by_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, RestError>;
    async fn find_bids_by_amount(
        &self,
        auction_id: AuctionId,
        amount: BigDecimal,
    ) -> Result<Vec<Bid>, RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_bid(&self, bid: &Bid) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO bid (id, bidder, auction_id, amount, submission_time) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(bid.id)
        .bind(&bid.bidder)
        .bind(bid.auction_id)
        .bind(&bid.amount)
        .bind(bid.submission_time)
        .execute(self)
        .instrument(info_span!("db_add_bid"))
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), bid_id = bid.id.to_string(), "Failed to insert bid");
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    async fn get_bids_by_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, RestError> {
        sqlx::query_as("SELECT * FROM bid WHERE auction_id = $1 ORDER BY submission_time")
            .bind(auction_id)
            .fetch_all(self)
            .instrument(info_span!("db_get_bids_by_auction"))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.to_string(),
                    "Failed to list bids from db"
                );
                RestError::TemporarilyUnavailable
            })
    }

    async fn find_bids_by_amount(
        &self,
        auction_id: AuctionId,
        amount: BigDecimal,
    ) -> Result<Vec<Bid>, RestError> {
        sqlx::query_as(
            "SELECT * FROM bid WHERE auction_id = $1 AND amount = $2 ORDER BY submission_time",
        )
        .bind(auction_id)
        .bind(amount)
        .fetch_all(self)
        .instrument(info_span!("db_find_bids_by_amount"))
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = auction_id.to_string(),
                "Failed to look up bids by amount"
            );
            RestError::TemporarilyUnavailable
        })
    }
}
