// Trade logging service
pub mod journal;

// Interactive session task
pub mod session;

// System orchestrator
pub mod client;
pub mod system;
