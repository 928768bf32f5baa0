use crate::domain::errors::StoreError;
use crate::domain::journal::types::{NewTradeRecord, OrderKind, TradeDirection, TradeRecord};
use crate::domain::ports::{RecordStore, RecordSubscription, StoreEvent};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, Sender};
use tracing::info;
use uuid::Uuid;

fn store_err(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable {
        reason: e.to_string(),
    }
}

fn map_row(row: SqliteRow) -> Result<TradeRecord, StoreError> {
    let direction: String = row.try_get("direction").map_err(store_err)?;
    let order_kind: String = row.try_get("order_kind").map_err(store_err)?;

    Ok(TradeRecord {
        id: row.try_get("id").map_err(store_err)?,
        occurred_on: row.try_get("occurred_on").map_err(store_err)?,
        recorded_at: row.try_get("recorded_at").map_err(store_err)?,
        instrument: row.try_get("instrument").map_err(store_err)?,
        direction: direction.parse().unwrap_or(TradeDirection::Long),
        order_kind: order_kind.parse().unwrap_or(OrderKind::Market),
        size: Decimal::from_str(row.try_get("size").map_err(store_err)?).unwrap_or_default(),
        entry_price: Decimal::from_str(row.try_get("entry_price").map_err(store_err)?)
            .unwrap_or_default(),
        exit_price: Decimal::from_str(row.try_get("exit_price").map_err(store_err)?)
            .unwrap_or_default(),
        stop_loss: Decimal::from_str(row.try_get("stop_loss").map_err(store_err)?)
            .unwrap_or_default(),
        take_profit: Decimal::from_str(row.try_get("take_profit").map_err(store_err)?)
            .unwrap_or_default(),
        profit: Decimal::from_str(row.try_get("profit").map_err(store_err)?).unwrap_or_default(),
        strategy_label: row.try_get("strategy_label").map_err(store_err)?,
        rationale: row.try_get("rationale").map_err(store_err)?,
        assumptions: row.try_get("assumptions").map_err(store_err)?,
        followed_rules: row.try_get("followed_rules").map_err(store_err)?,
        was_disciplined: row.try_get("was_disciplined").map_err(store_err)?,
        confidence_rating: row.try_get::<i64, _>("confidence_rating").map_err(store_err)? as u8,
        owner_id: row.try_get("owner_id").map_err(store_err)?,
    })
}

/// Record store backed by the trade_records table. Every append re-queries
/// the owner's journal and fans the fresh snapshot out to subscribers.
pub struct SqliteRecordStore {
    pool: SqlitePool,
    subscribers: Arc<RwLock<HashMap<String, Vec<Sender<StoreEvent>>>>>,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            subscribers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn snapshot(&self, owner_id: &str) -> Result<Vec<TradeRecord>, StoreError> {
        let rows =
            sqlx::query("SELECT * FROM trade_records WHERE owner_id = ? ORDER BY recorded_at DESC")
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
                .map_err(store_err)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn publish(&self, owner_id: &str) {
        // A failed re-query still reaches subscribers, as a Lost event.
        let event = match self.snapshot(owner_id).await {
            Ok(records) => StoreEvent::Snapshot(records),
            Err(e) => StoreEvent::Lost(e),
        };

        let mut subs = self.subscribers.write().await;
        let Some(senders) = subs.get_mut(owner_id) else {
            return;
        };

        let mut active = Vec::new();
        for tx in senders.iter() {
            if tx.send(event.clone()).await.is_ok() {
                active.push(tx.clone());
            }
        }
        // retain only active subscribers
        *senders = active;
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn subscribe(&self, owner_id: &str) -> Result<RecordSubscription, StoreError> {
        let snapshot = self.snapshot(owner_id).await?;

        let (tx, rx) = mpsc::channel(100);
        let _ = tx.send(StoreEvent::Snapshot(snapshot)).await;

        self.subscribers
            .write()
            .await
            .entry(owner_id.to_string())
            .or_default()
            .push(tx);

        Ok(rx)
    }

    async fn append(&self, record: &NewTradeRecord) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO trade_records (
                id, owner_id, occurred_on, recorded_at, instrument,
                direction, order_kind, size, entry_price, exit_price,
                stop_loss, take_profit, profit, strategy_label, rationale,
                assumptions, followed_rules, was_disciplined, confidence_rating
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&record.owner_id)
        .bind(record.occurred_on)
        .bind(record.recorded_at)
        .bind(&record.instrument)
        .bind(format!("{}", record.direction)) // Enum as string
        .bind(format!("{}", record.order_kind))
        .bind(record.size.to_string())
        .bind(record.entry_price.to_string())
        .bind(record.exit_price.to_string())
        .bind(record.stop_loss.to_string())
        .bind(record.take_profit.to_string())
        .bind(record.profit.to_string())
        .bind(&record.strategy_label)
        .bind(&record.rationale)
        .bind(&record.assumptions)
        .bind(record.followed_rules)
        .bind(record.was_disciplined)
        .bind(record.confidence_rating as i64)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        info!("Persisted trade record {}", id);
        self.publish(&record.owner_id).await;
        Ok(id)
    }
}
