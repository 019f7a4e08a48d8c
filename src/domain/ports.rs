use crate::domain::model::OrderJourney;

/// Source of the journeys the tracker renders.
pub trait JourneyProvider {
    fn journey_name(&self) -> &str;
    fn orders(&self) -> &[OrderJourney];
}
