pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::JourneyConfig;

pub use crate::core::tracker::{DeliveryTracker, OutputFormat};
pub use domain::model::{
    print_status, render_status, DeliveryStage, Order, OrderDeliveryState, OrderJourney, StageSpec,
};
pub use utils::error::{DeliveryError, Result};
