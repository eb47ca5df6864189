mod dashboard;
pub use dashboard::Dashboard;

mod automations;
pub use automations::Automations;
