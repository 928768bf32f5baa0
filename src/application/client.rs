use anyhow::Result;
use tokio::sync::watch;

use crate::application::session::{SessionCommand, SessionView};
use crate::application::system::SessionHandle;
use crate::domain::identity::ProfileFields;
use crate::domain::journal::types::TradeDraft;
use crate::domain::reporting::{ListFilter, ReportWindow};

/// A client interface for driving the session.
/// Abstracts away channel management and provides a clean API for a front end.
pub struct SessionClient {
    handle: SessionHandle,
}

impl SessionClient {
    pub fn new(handle: SessionHandle) -> Self {
        Self { handle }
    }

    /// The current view snapshot.
    pub fn view(&self) -> SessionView {
        self.handle.view_rx.borrow().clone()
    }

    /// A watcher over view changes, for callers that await them.
    pub fn watch_view(&self) -> watch::Receiver<SessionView> {
        self.handle.view_rx.clone()
    }

    // --- Command Methods ---

    pub fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        self.send(SessionCommand::SignIn {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn register(&self, email: &str, password: &str, profile: ProfileFields) -> Result<()> {
        self.send(SessionCommand::Register {
            email: email.to_string(),
            password: password.to_string(),
            profile,
        })
    }

    pub fn sign_out(&self) -> Result<()> {
        self.send(SessionCommand::SignOut)
    }

    pub fn log_trade(&self, draft: TradeDraft) -> Result<()> {
        self.send(SessionCommand::LogTrade(draft))
    }

    pub fn set_window(&self, window: ReportWindow) -> Result<()> {
        self.send(SessionCommand::SetWindow(window))
    }

    pub fn set_list_filter(&self, filter: ListFilter) -> Result<()> {
        self.send(SessionCommand::SetListFilter(filter))
    }

    fn send(&self, cmd: SessionCommand) -> Result<()> {
        self.handle
            .command_tx
            .try_send(cmd)
            .map_err(|e| anyhow::anyhow!("Failed to send session command: {}", e))
    }
}
