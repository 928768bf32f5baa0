use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::errors::{DraftError, SAVE_FAILED_BANNER, StoreError};
use crate::domain::identity::Identity;
use crate::domain::journal::profit::{realized_profit, recorded_at_ms};
use crate::domain::journal::types::{NewTradeRecord, TradeDraft};
use crate::domain::ports::RecordStore;

/// Failure modes of logging a trade. Draft problems come from the user's
/// input; store problems from the backend.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("{0}")]
    Draft(#[from] DraftError),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl JournalError {
    /// User-facing banner text. Draft violations surface verbatim; store
    /// failures collapse to the single save-failed banner.
    pub fn banner(&self) -> String {
        match self {
            JournalError::Draft(e) => e.to_string(),
            JournalError::Store(_) => SAVE_FAILED_BANNER.to_string(),
        }
    }
}

/// Turns validated drafts into appended records. All derived fields are
/// computed exactly once here; nothing downstream recomputes profit.
pub struct JournalService {
    store: Arc<dyn RecordStore>,
}

impl JournalService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate the draft, derive profit and the record timestamp, stamp
    /// the owner and append. Returns the store-assigned id.
    pub async fn log_trade(
        &self,
        draft: TradeDraft,
        identity: &Identity,
    ) -> Result<String, JournalError> {
        draft.validate()?;

        let profit = realized_profit(
            draft.direction,
            draft.entry_price,
            draft.exit_price,
            draft.size,
        );

        let record = NewTradeRecord {
            occurred_on: draft.occurred_on,
            recorded_at: recorded_at_ms(draft.occurred_on),
            instrument: draft.instrument,
            direction: draft.direction,
            order_kind: draft.order_kind,
            size: draft.size,
            entry_price: draft.entry_price,
            exit_price: draft.exit_price,
            stop_loss: draft.stop_loss,
            take_profit: draft.take_profit,
            profit,
            strategy_label: draft.strategy_label,
            rationale: draft.rationale,
            assumptions: draft.assumptions,
            followed_rules: draft.followed_rules,
            was_disciplined: draft.was_disciplined,
            confidence_rating: draft.confidence_rating,
            owner_id: identity.user_id.clone(),
        };

        let id = self.store.append(&record).await?;
        info!(
            "Journal: appended {} ({} {} @ {})",
            id, record.direction, record.instrument, record.profit
        );
        Ok(id)
    }
}
