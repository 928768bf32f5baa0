use crate::domain::errors::DraftError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suggested instruments for the journal entry form, most-traded first
pub const SUGGESTED_INSTRUMENTS: &[&str] = &["XAUUSD", "EURUSD", "GBPUSD", "USDCHF", "USDJPY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Long,
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "LONG"),
            TradeDirection::Short => write!(f, "SHORT"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LONG" => Ok(TradeDirection::Long),
            "SHORT" => Ok(TradeDirection::Short),
            _ => Err(format!("Unknown trade direction: '{}'", s)),
        }
    }
}

/// Order execution style. Descriptive only; no execution semantics attach to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit,
    Stop,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "MARKET"),
            OrderKind::Limit => write!(f, "LIMIT"),
            OrderKind::Stop => write!(f, "STOP"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MARKET" => Ok(OrderKind::Market),
            "LIMIT" => Ok(OrderKind::Limit),
            "STOP" => Ok(OrderKind::Stop),
            _ => Err(format!("Unknown order kind: '{}'", s)),
        }
    }
}

/// One logged trade. Records are append-only: once stored they are never
/// updated or deleted, and `profit` stays the value computed at creation
/// even though the prices that produced it are stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRecord {
    /// Store-assigned unique id
    pub id: String,
    /// Calendar date of the trade (date-only, user supplied)
    pub occurred_on: NaiveDate,
    /// Milliseconds since epoch, derived from `occurred_on` at creation.
    /// Ordering and rolling-window cutoffs key on this field.
    pub recorded_at: i64,
    pub instrument: String,
    pub direction: TradeDirection,
    pub order_kind: OrderKind,
    /// Lot size, strictly positive
    pub size: Decimal,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    /// Signed realized profit, frozen at creation
    pub profit: Decimal,
    pub strategy_label: String,
    pub rationale: String,
    pub assumptions: String,
    pub followed_rules: bool,
    pub was_disciplined: bool,
    /// Self-assessed confidence, 1..=5
    pub confidence_rating: u8,
    /// Owning user's id, stamped by the journal service at write time
    pub owner_id: String,
}

/// User-supplied fields of a journal entry, before validation and before the
/// service computes the derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    pub occurred_on: NaiveDate,
    pub instrument: String,
    pub direction: TradeDirection,
    pub order_kind: OrderKind,
    pub size: Decimal,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub strategy_label: String,
    pub rationale: String,
    pub assumptions: String,
    pub followed_rules: bool,
    pub was_disciplined: bool,
    pub confidence_rating: u8,
}

impl TradeDraft {
    /// Entry-form defaults: today's date, gold, the smallest common lot,
    /// a market long, full confidence, both self-assessment flags set.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            occurred_on: today,
            instrument: SUGGESTED_INSTRUMENTS[0].to_string(),
            direction: TradeDirection::Long,
            order_kind: OrderKind::Market,
            size: dec!(0.01),
            entry_price: Decimal::ZERO,
            exit_price: Decimal::ZERO,
            stop_loss: Decimal::ZERO,
            take_profit: Decimal::ZERO,
            strategy_label: String::new(),
            rationale: String::new(),
            assumptions: String::new(),
            followed_rules: true,
            was_disciplined: true,
            confidence_rating: 5,
        }
    }

    /// Enforce the required-field constraints the entry form would.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.instrument.trim().is_empty() {
            return Err(DraftError::MissingInstrument);
        }
        if self.size <= Decimal::ZERO {
            return Err(DraftError::NonPositiveSize { size: self.size });
        }
        if !(1..=5).contains(&self.confidence_rating) {
            return Err(DraftError::RatingOutOfRange {
                rating: self.confidence_rating,
            });
        }
        Ok(())
    }
}

/// A validated draft with its derived fields filled in, waiting for the
/// store to assign an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTradeRecord {
    pub occurred_on: NaiveDate,
    pub recorded_at: i64,
    pub instrument: String,
    pub direction: TradeDirection,
    pub order_kind: OrderKind,
    pub size: Decimal,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub profit: Decimal,
    pub strategy_label: String,
    pub rationale: String,
    pub assumptions: String,
    pub followed_rules: bool,
    pub was_disciplined: bool,
    pub confidence_rating: u8,
    pub owner_id: String,
}

impl NewTradeRecord {
    /// Attach the store-assigned id, producing the persisted record shape.
    pub fn into_record(self, id: String) -> TradeRecord {
        TradeRecord {
            id,
            occurred_on: self.occurred_on,
            recorded_at: self.recorded_at,
            instrument: self.instrument,
            direction: self.direction,
            order_kind: self.order_kind,
            size: self.size,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            profit: self.profit,
            strategy_label: self.strategy_label,
            rationale: self.rationale,
            assumptions: self.assumptions,
            followed_rules: self.followed_rules,
            was_disciplined: self.was_disciplined,
            confidence_rating: self.confidence_rating,
            owner_id: self.owner_id,
        }
    }
}
