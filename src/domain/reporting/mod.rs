pub mod equity;
pub mod report;
pub mod summary;
pub mod window;

pub use equity::{EquityPoint, equity_curve};
pub use report::Report;
pub use summary::Summary;
pub use window::{ListFilter, ReportWindow};
