use order_tracking::utils::validation::Validate;
use order_tracking::{
    DeliveryError, DeliveryStage, DeliveryTracker, JourneyConfig, OutputFormat,
};
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_ORDER_JOURNEY: &str = r#"
[journey]
name = "two-orders"
description = "Knives and a lamp"

[[orders]]
item = "Kitchen Knife Sets"

[[orders.states]]
stage = "received_at_depot"
depot_name = "Stockholm City"

[[orders.states]]
stage = "dispatched"
truck_id = "JVY-354"
driver_name = "Peter Parker"

[[orders.states]]
stage = "delivered"
destination = "Arkansas"
is_delivered = true

[[orders]]
item = "Desk Lamp"

[[orders.states]]
stage = "dispatched"
truck_id = "ABC-001"
driver_name = "Mary Jane"
"#;

fn write_journey(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn render(tracker: &DeliveryTracker<JourneyConfig>) -> String {
    let mut out = Vec::new();
    tracker.run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_demo_journey_end_to_end() {
    let journey = JourneyConfig::demo();
    journey.validate().unwrap();

    let output = render(&DeliveryTracker::new(journey));
    assert_eq!(
        output,
        "Kitchen Knife Sets is received at Stockholm City depot.\n\
         Kitchen Knife Sets is dispatched, Truck ID is JVY-354 and driver is Peter Parker\n\
         Kitchen Knife Sets delivered at Arkansas.\nDelivery to customer = true.\n\n"
    );
}

#[test]
fn test_journey_file_end_to_end() {
    let file = write_journey(TWO_ORDER_JOURNEY);
    let journey = JourneyConfig::from_file(file.path()).unwrap();
    journey.validate().unwrap();
    assert_eq!(journey.state_count(), 4);

    let tracker = DeliveryTracker::new(journey).with_stage_filter(Some(DeliveryStage::Dispatched));
    let output = render(&tracker);

    assert_eq!(
        output,
        "Kitchen Knife Sets is dispatched, Truck ID is JVY-354 and driver is Peter Parker\n\
         Desk Lamp is dispatched, Truck ID is ABC-001 and driver is Mary Jane\n"
    );
}

#[test]
fn test_journey_file_json_output() {
    let file = write_journey(TWO_ORDER_JOURNEY);
    let journey = JourneyConfig::from_file(file.path()).unwrap();

    let tracker = DeliveryTracker::new(journey).with_format(OutputFormat::Json);
    let output = render(&tracker);

    let records: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["stage"], "received_at_depot");
    assert_eq!(records[3]["item"], "Desk Lamp");
    assert_eq!(
        records[2]["status"],
        "Kitchen Knife Sets delivered at Arkansas.\nDelivery to customer = true.\n"
    );
}

#[test]
fn test_unknown_stage_lookup_fails() {
    let err = "out_for_delivery".parse::<DeliveryStage>().unwrap_err();
    assert!(matches!(err, DeliveryError::UnknownStage { ref name } if name == "out_for_delivery"));
    assert!(err.to_string().contains("out_for_delivery"));
}

#[test]
fn test_invalid_journey_file_is_rejected() {
    let file = write_journey("[journey]\nname = \"\"\n");
    let journey = JourneyConfig::from_file(file.path()).unwrap();
    assert!(journey.validate().is_err());

    let broken = write_journey("[journey\nname = 1");
    assert!(JourneyConfig::from_file(broken.path()).is_err());
}
