use crate::domain::errors::{AuthError, StoreError};
use crate::domain::identity::{Identity, ProfileFields, UserProfile};
use crate::domain::journal::profit::{realized_profit, recorded_at_ms};
use crate::domain::journal::types::{
    NewTradeRecord, OrderKind, SUGGESTED_INSTRUMENTS, TradeDirection, TradeRecord,
};
use crate::domain::ports::{AuthGateway, RecordStore, RecordSubscription, StoreEvent};
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::credentials::{ensure_configured, password_digest};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Local, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{
    RwLock,
    mpsc::{self, Sender},
    watch,
};
use tracing::info;
use uuid::Uuid;

struct StoredUser {
    user_id: String,
    email: String,
    display_name: Option<String>,
    password_digest: String,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// In-memory authentication backend. Holds the user directory and the
/// identity watch channel; suitable for demos and tests, lost on restart.
pub struct MemoryAuthGateway {
    api_key: String,
    users: Arc<RwLock<HashMap<String, StoredUser>>>,
    identity_tx: watch::Sender<Option<Identity>>,
    profiles: Arc<dyn ProfileRepository>,
}

impl MemoryAuthGateway {
    pub fn new(api_key: String, profiles: Arc<dyn ProfileRepository>) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            api_key,
            users: Arc::new(RwLock::new(HashMap::new())),
            identity_tx,
            profiles,
        }
    }
}

#[async_trait]
impl AuthGateway for MemoryAuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        ensure_configured(&self.api_key)?;

        let key = normalize_email(email);
        let users = self.users.read().await;
        let user = users.get(&key).ok_or(AuthError::InvalidCredentials)?;
        if user.password_digest != password_digest(&self.api_key, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        };
        drop(users);

        let _ = self.identity_tx.send(Some(identity.clone()));
        Ok(identity)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        profile: ProfileFields,
    ) -> Result<Identity, AuthError> {
        ensure_configured(&self.api_key)?;

        let key = normalize_email(email);
        let mut users = self.users.write().await;
        if users.contains_key(&key) {
            return Err(AuthError::EmailTaken { email: key });
        }

        let display_name = match profile.name.trim() {
            "" => None,
            name => Some(name.to_string()),
        };
        let user = StoredUser {
            user_id: Uuid::new_v4().to_string(),
            email: key.clone(),
            display_name,
            password_digest: password_digest(&self.api_key, password),
        };
        let identity = Identity {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        };
        users.insert(key.clone(), user);
        drop(users);

        // The new account is signed in before the profile write settles,
        // matching how the auth backend fires its state change first.
        let _ = self.identity_tx.send(Some(identity.clone()));

        let record = UserProfile {
            user_id: identity.user_id.clone(),
            name: profile.name,
            email: key,
            mobile: profile.mobile,
            created_at: Utc::now().to_rfc3339(),
        };
        self.profiles
            .save(&record)
            .await
            .map_err(|e| AuthError::Unreachable {
                reason: e.to_string(),
            })?;

        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let _ = self.identity_tx.send(None);
        Ok(())
    }

    fn watch_identity(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }
}

/// In-memory record store with live snapshot subscriptions, keyed by owner.
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<String, Vec<TradeRecord>>>>,
    subscribers: Arc<RwLock<HashMap<String, Vec<Sender<StoreEvent>>>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            subscribers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn snapshot(&self, owner_id: &str) -> Vec<TradeRecord> {
        let records = self.records.read().await;
        let mut list = records.get(owner_id).cloned().unwrap_or_default();
        list.sort_by_key(|r| std::cmp::Reverse(r.recorded_at));
        list
    }

    async fn publish(&self, owner_id: &str) {
        let snapshot = self.snapshot(owner_id).await;
        let mut subs = self.subscribers.write().await;
        let Some(senders) = subs.get_mut(owner_id) else {
            return;
        };

        // retain only active subscribers
        let mut active = Vec::new();
        for tx in senders.iter() {
            if tx
                .send(StoreEvent::Snapshot(snapshot.clone()))
                .await
                .is_ok()
            {
                active.push(tx.clone());
            }
        }
        *senders = active;
    }

    #[cfg(test)]
    async fn subscriber_count(&self, owner_id: &str) -> usize {
        self.subscribers
            .read()
            .await
            .get(owner_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn subscribe(&self, owner_id: &str) -> Result<RecordSubscription, StoreError> {
        let (tx, rx) = mpsc::channel(100);
        let snapshot = self.snapshot(owner_id).await;
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
        let stored = record.clone().into_record(id.clone());
        self.records
            .write()
            .await
            .entry(record.owner_id.clone())
            .or_default()
            .push(stored);
        self.publish(&record.owner_id).await;
        Ok(id)
    }
}

pub const DEMO_EMAIL: &str = "demo@braintrader.app";
pub const DEMO_PASSWORD: &str = "demo-trader";

/// Provision the demo account and backfill journal entries spread across
/// the past year, then sign back out so the app starts at the sign-in
/// screen.
pub async fn seed_demo_journal(auth: &MemoryAuthGateway, store: &MemoryRecordStore) -> Result<()> {
    let identity = auth
        .register(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            ProfileFields {
                name: "Demo Trader".to_string(),
                mobile: String::new(),
            },
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to provision demo account: {}", e))?;

    let strategies = [
        "Trend Continuation",
        "Breakout Retest",
        "Range Fade",
        "News Momentum",
    ];
    let rationales = [
        "Clean retest of broken structure on the hourly.",
        "Momentum follow-through after the data release.",
        "Faded the range extreme into prior resistance.",
        "",
    ];

    let mut rng = rand::rng();
    let today = Local::now().date_naive();
    let days_back = [1i64, 3, 6, 9, 14, 22, 27, 40, 55, 75, 110, 160, 230, 310];

    for days in days_back {
        let occurred_on = today - Duration::days(days);
        let instrument = SUGGESTED_INSTRUMENTS[rng.random_range(0..SUGGESTED_INSTRUMENTS.len())];
        let direction = if rng.random_bool(0.5) {
            TradeDirection::Long
        } else {
            TradeDirection::Short
        };
        let order_kind = if rng.random_bool(0.6) {
            OrderKind::Market
        } else {
            OrderKind::Limit
        };

        let entry_price = match instrument {
            "XAUUSD" => dec!(2320) + Decimal::from(rng.random_range(-40..=40)),
            "USDJPY" => dec!(151) + Decimal::from(rng.random_range(-3..=3)),
            _ => dec!(1.08) + Decimal::from(rng.random_range(-4..=4)) / dec!(100),
        };
        // Mild winner bias so the demo report has something to show
        let move_ticks = Decimal::from(rng.random_range(-80..=120));
        let exit_price = entry_price + move_ticks / dec!(100);
        let size = Decimal::from(rng.random_range(1..=20)) / dec!(100);

        let risk = Decimal::from(rng.random_range(50..=150)) / dec!(100);
        let reward = Decimal::from(rng.random_range(80..=240)) / dec!(100);
        let (stop_loss, take_profit) = match direction {
            TradeDirection::Long => (entry_price - risk, entry_price + reward),
            TradeDirection::Short => (entry_price + risk, entry_price - reward),
        };

        let record = NewTradeRecord {
            occurred_on,
            recorded_at: recorded_at_ms(occurred_on),
            instrument: instrument.to_string(),
            direction,
            order_kind,
            size,
            entry_price,
            exit_price,
            stop_loss,
            take_profit,
            profit: realized_profit(direction, entry_price, exit_price, size),
            strategy_label: strategies[rng.random_range(0..strategies.len())].to_string(),
            rationale: rationales[rng.random_range(0..rationales.len())].to_string(),
            assumptions: String::new(),
            followed_rules: rng.random_bool(0.8),
            was_disciplined: rng.random_bool(0.75),
            confidence_rating: rng.random_range(1..=5),
            owner_id: identity.user_id.clone(),
        };

        store
            .append(&record)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed demo records: {}", e))?;
    }

    auth.sign_out()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reset demo session: {}", e))?;

    info!(
        "MemoryBackend: seeded {} demo trades for {}",
        days_back.len(),
        DEMO_EMAIL
    );
    Ok(())
}
