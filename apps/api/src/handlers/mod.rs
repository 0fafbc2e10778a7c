pub mod health;
pub mod recommendations;

pub use health::{health_check, ping};
pub use recommendations::{legacy_config, recommendations_config};
