// Trade journal domain
pub mod journal;

// Aggregate statistics and equity curve
pub mod reporting;

// Identities and user profiles
pub mod identity;

// Port interfaces
pub mod ports;

// Repository traits
pub mod repositories;

// Domain-specific error types
pub mod errors;
