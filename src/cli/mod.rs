pub mod dashboard;
pub mod funds;
pub mod investors;
pub mod setup;
pub mod ui;
