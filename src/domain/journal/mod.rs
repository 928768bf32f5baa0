pub mod profit;
pub mod types;

pub use types::{NewTradeRecord, OrderKind, TradeDirection, TradeDraft, TradeRecord};
