use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::application::journal::JournalService;
use crate::domain::identity::{Identity, ProfileFields};
use crate::domain::journal::types::{TradeDraft, TradeRecord};
use crate::domain::ports::{AuthGateway, RecordStore, RecordSubscription, StoreEvent};
use crate::domain::reporting::{ListFilter, Report, ReportWindow, Summary};

/// Commands accepted by the session task.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    SignIn {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        profile: ProfileFields,
    },
    SignOut,
    LogTrade(TradeDraft),
    SetWindow(ReportWindow),
    SetListFilter(ListFilter),
}

/// Everything a front end needs to render, published as one snapshot on
/// every change.
#[derive(Debug, Clone, Default)]
pub struct SessionView {
    pub identity: Option<Identity>,
    /// The owner's complete record list, newest first
    pub records: Vec<TradeRecord>,
    /// `records` narrowed by the calendar list filter
    pub visible: Vec<TradeRecord>,
    /// Headline stats over the complete list, regardless of filters
    pub headline: Summary,
    /// The report for the selected rolling window
    pub report: Report,
    pub window: ReportWindow,
    pub list_filter: ListFilter,
    /// Current error banner. Cleared by the next healthy snapshot.
    pub banner: Option<String>,
}

/// The session task. Owns the live record list and all derived state,
/// reacting to identity changes, store snapshots and front-end commands.
///
/// Derived surfaces are rebuilt wholesale on every change rather than
/// patched incrementally; the record list is small enough that recomputing
/// keeps every surface trivially consistent.
pub struct Session {
    auth: Arc<dyn AuthGateway>,
    store: Arc<dyn RecordStore>,
    journal: JournalService,
    command_rx: mpsc::Receiver<SessionCommand>,
    view_tx: watch::Sender<SessionView>,
    view: SessionView,
    records_rx: Option<RecordSubscription>,
}

impl Session {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        store: Arc<dyn RecordStore>,
        command_rx: mpsc::Receiver<SessionCommand>,
        view_tx: watch::Sender<SessionView>,
    ) -> Self {
        Self {
            auth,
            journal: JournalService::new(store.clone()),
            store,
            command_rx,
            view_tx,
            view: SessionView::default(),
            records_rx: None,
        }
    }

    pub async fn run(&mut self) {
        info!("Session started.");
        let mut identity_rx = self.auth.watch_identity();

        // Adopt whatever identity the gateway already holds, so a restored
        // session has its records before the first command arrives.
        let initial = identity_rx.borrow_and_update().clone();
        self.apply_identity(initial).await;

        loop {
            tokio::select! {
                changed = identity_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let identity = identity_rx.borrow_and_update().clone();
                    self.apply_identity(identity).await;
                }
                event = Self::next_store_event(&mut self.records_rx) => {
                    match event {
                        Some(event) => self.apply_store_event(event),
                        None => self.records_rx = None,
                    }
                }
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.handle_command(cmd).await,
                        None => break,
                    }
                }
            }
        }
        info!("Session stopped.");
    }

    async fn next_store_event(rx: &mut Option<RecordSubscription>) -> Option<StoreEvent> {
        match rx {
            Some(rx) => rx.recv().await,
            None => std::future::pending().await,
        }
    }

    async fn apply_identity(&mut self, identity: Option<Identity>) {
        match identity {
            Some(identity) => {
                info!("Session: signed in as {}", identity.email);
                self.view.banner = None;
                self.view.records.clear();
                match self.store.subscribe(&identity.user_id).await {
                    Ok(rx) => self.records_rx = Some(rx),
                    Err(e) => {
                        warn!("Session: record subscription failed: {}", e);
                        self.records_rx = None;
                        self.view.banner = Some(e.banner());
                    }
                }
                self.view.identity = Some(identity);
            }
            None => {
                if self.view.identity.take().is_some() {
                    info!("Session: signed out");
                }
                self.records_rx = None;
                self.view.records.clear();
                self.view.banner = None;
            }
        }
        self.recompute();
        self.publish();
    }

    fn apply_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Snapshot(records) => {
                // Wholesale replacement. A healthy snapshot also clears
                // any stale error banner.
                self.view.records = records;
                self.view.banner = None;
            }
            StoreEvent::Lost(e) => {
                warn!("Session: record subscription lost: {}", e);
                self.view.banner = Some(e.banner());
            }
        }
        self.recompute();
        self.publish();
    }

    async fn handle_command(&mut self, cmd: SessionCommand) {
        match cmd {
            SessionCommand::SignIn { email, password } => {
                if let Err(e) = self.auth.sign_in(&email, &password).await {
                    warn!("Session: sign-in failed for {}: {}", email, e);
                    self.view.banner = Some(e.banner());
                    self.publish();
                }
            }
            SessionCommand::Register {
                email,
                password,
                profile,
            } => {
                if let Err(e) = self.auth.register(&email, &password, profile).await {
                    warn!("Session: registration failed for {}: {}", email, e);
                    self.view.banner = Some(e.banner());
                    self.publish();
                }
            }
            SessionCommand::SignOut => {
                if let Err(e) = self.auth.sign_out().await {
                    warn!("Session: sign-out failed: {}", e);
                    self.view.banner = Some(e.banner());
                    self.publish();
                }
            }
            SessionCommand::LogTrade(draft) => {
                let Some(identity) = self.view.identity.clone() else {
                    warn!("Session: LogTrade ignored, no authenticated user");
                    return;
                };
                match self.journal.log_trade(draft, &identity).await {
                    // The store publishes a fresh snapshot; the view
                    // updates when it arrives.
                    Ok(id) => info!("Session: trade {} logged", id),
                    Err(e) => {
                        self.view.banner = Some(e.banner());
                        self.publish();
                    }
                }
            }
            SessionCommand::SetWindow(window) => {
                self.view.window = window;
                self.recompute();
                self.publish();
            }
            SessionCommand::SetListFilter(filter) => {
                self.view.list_filter = filter;
                self.recompute();
                self.publish();
            }
        }
    }

    /// Rebuild every derived surface from the record list and the current
    /// selections. The headline always covers the full list; the report is
    /// windowed against wall-clock now; the visible list is narrowed
    /// against the local calendar date.
    fn recompute(&mut self) {
        let now_ms = Utc::now().timestamp_millis();
        let today = Local::now().date_naive();

        self.view.headline = Summary::compute(&self.view.records);
        self.view.report = Report::build(&self.view.records, self.view.window, now_ms);
        self.view.visible = self
            .view
            .records
            .iter()
            .filter(|r| self.view.list_filter.includes(r.occurred_on, today))
            .cloned()
            .collect();
    }

    fn publish(&self) {
        let _ = self.view_tx.send(self.view.clone());
    }
}
