pub mod coaching;
pub mod format;
pub mod view_models;
