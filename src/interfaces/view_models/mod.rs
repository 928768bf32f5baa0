pub mod dashboard_view_model;
pub mod report_view_model;
