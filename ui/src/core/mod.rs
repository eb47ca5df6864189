pub mod automation;
pub mod catalog;
pub mod chart;
pub mod favicon;
pub mod filter;
pub mod format;
pub mod platform;
pub mod query;
pub mod trend;
pub mod window;
