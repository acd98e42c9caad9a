pub mod commands;
pub mod dashboard;
pub mod dashboard_state;
pub mod table;
