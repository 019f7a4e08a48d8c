pub mod tracker;

pub use crate::domain::model::{OrderDeliveryState, OrderJourney};
pub use crate::domain::ports::JourneyProvider;
