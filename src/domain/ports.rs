use crate::domain::errors::{AuthError, StoreError};
use crate::domain::identity::{Identity, ProfileFields};
use crate::domain::journal::types::{NewTradeRecord, TradeRecord};
use crate::domain::reporting::report::Report;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;

/// Events delivered on a record subscription. Every change re-delivers the
/// owner's complete list; there is no incremental diffing.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The current complete record list, newest first
    Snapshot(Vec<TradeRecord>),
    /// The subscription broke and will deliver nothing further
    Lost(StoreError),
}

/// A live feed of one owner's records. Dropping the receiver is the
/// unsubscribe; publishers prune senders whose receivers are gone.
pub type RecordSubscription = Receiver<StoreEvent>;

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
    async fn register(
        &self,
        email: &str,
        password: &str,
        profile: ProfileFields,
    ) -> Result<Identity, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Identity changes as a watch channel. `None` means signed out.
    fn watch_identity(&self) -> watch::Receiver<Option<Identity>>;
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Subscribe to an owner's records. The current snapshot is delivered
    /// first, then a fresh snapshot after every append.
    async fn subscribe(&self, owner_id: &str) -> Result<RecordSubscription, StoreError>;

    /// Append an owner-scoped record and return the store-assigned id.
    async fn append(&self, record: &NewTradeRecord) -> Result<String, StoreError>;
}

/// Extension point for pushing a rendered report somewhere external.
/// Declared for the report surface's export control; nothing installs an
/// implementation yet, and exporting without one is a no-op.
pub trait ReportExporter: Send + Sync {
    fn export(&self, report: &Report) -> Result<()>;
}
