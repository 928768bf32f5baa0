use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::application::session::{Session, SessionCommand, SessionView};
use crate::config::{Config, Mode};
use crate::domain::ports::{AuthGateway, RecordStore};
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::memory::{MemoryAuthGateway, MemoryRecordStore, seed_demo_journal};
use crate::infrastructure::persistence::auth_gateway::SqliteAuthGateway;
use crate::infrastructure::persistence::database::Database;
use crate::infrastructure::persistence::record_store::SqliteRecordStore;
use crate::infrastructure::persistence::repositories::SqliteProfileRepository;
use crate::infrastructure::repositories::in_memory::InMemoryProfileRepository;

/// Channels for driving a started session.
pub struct SessionHandle {
    pub command_tx: mpsc::Sender<SessionCommand>,
    pub view_rx: watch::Receiver<SessionView>,
}

pub struct Application {
    pub config: Config,
    pub auth: Arc<dyn AuthGateway>,
    pub store: Arc<dyn RecordStore>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self> {
        info!("Building BrainTrader Application (Mode: {:?})...", config.mode);

        let (auth, store, profiles): (
            Arc<dyn AuthGateway>,
            Arc<dyn RecordStore>,
            Arc<dyn ProfileRepository>,
        ) = match config.mode {
            Mode::Memory => {
                info!("Using in-memory services");
                let profiles = Arc::new(InMemoryProfileRepository::new());
                let auth = Arc::new(MemoryAuthGateway::new(
                    config.backend_api_key.clone(),
                    profiles.clone(),
                ));
                let store = Arc::new(MemoryRecordStore::new());

                if config.demo_seed {
                    info!("Seeding demo journal");
                    seed_demo_journal(&auth, &store).await?;
                }

                (auth, store, profiles)
            }
            Mode::Sqlite => {
                info!("Initializing Database at {}", config.database_url);
                let db = Database::new(&config.database_url)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to initialize database: {}", e))?;

                let profiles = Arc::new(SqliteProfileRepository::new(db.pool.clone()));
                let auth = Arc::new(SqliteAuthGateway::new(
                    db.pool.clone(),
                    config.backend_api_key.clone(),
                    profiles.clone(),
                ));
                let store = Arc::new(SqliteRecordStore::new(db.pool.clone()));

                (auth, store, profiles)
            }
        };

        Ok(Self {
            config,
            auth,
            store,
            profiles,
        })
    }

    pub async fn start(self) -> Result<SessionHandle> {
        info!("Starting Session...");

        let (command_tx, command_rx) = mpsc::channel(100);
        let (view_tx, view_rx) = watch::channel(SessionView::default());

        let mut session = Session::new(self.auth.clone(), self.store.clone(), command_rx, view_tx);
        tokio::spawn(async move { session.run().await });

        Ok(SessionHandle {
            command_tx,
            view_rx,
        })
    }
}
