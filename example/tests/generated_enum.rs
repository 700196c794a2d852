#![cfg(test)]

use std::collections::HashSet;

use example_app::enums::{Color, ColorValueError, Status, COLOR_INSTANCE};
use pretty_assertions::assert_eq;

#[test]
fn test_names_and_values_follow_declaration_order() {
    assert_eq!(Color::names(), ["Red", "blue"]);
    assert_eq!(Status::names(), ["pending", "running", "Done"]);

    let values: Vec<&str> = Status::values().iter().map(Status::value).collect();
    assert_eq!(values, ["Pending", "Running", "Done"]);
    assert_eq!(Color::values(), [Color::Red, Color::Blue]);
}

#[test]
fn test_instance_mapping() {
    assert_eq!(COLOR_INSTANCE, [("Red", "Red"), ("Blue", "blue")]);
}

#[test]
fn test_new_by_display_name() {
    assert_eq!(Color::new("blue"), Ok(Color::Blue));
    assert_eq!(Color::new("Red"), Ok(Color::Red));
    assert_eq!(Status::new("Done").unwrap().value(), "Done");
}

#[test]
fn test_new_rejects_unknown_names() {
    let err: ColorValueError = Color::new("green").unwrap_err();
    assert_eq!(err.value(), "green");
    assert_eq!(err.to_string(), "'green' is not a valid value for type Color");

    // Lookup is by display name only, case-sensitive.
    assert!(Color::new("Blue").is_err());
    assert!(Color::new("").is_err());
}

#[test]
fn test_accessors() {
    assert_eq!(Color::Blue.name(), "blue");
    assert_eq!(Color::Blue.value(), "Blue");
    assert_eq!(Color::Blue.description(), "primary color");
    assert_eq!(Color::Red.description(), "");
    assert_eq!(Status::Pending.description(), "waiting for a worker");
}

#[test]
fn test_display_and_from_str() {
    assert_eq!(Color::Blue.to_string(), "blue");
    assert_eq!(format!("{}", Status::Running), "running");

    let parsed: Color = "blue".parse().unwrap();
    assert_eq!(parsed, Color::Blue);
    assert!("purple".parse::<Color>().is_err());
}

#[test]
fn test_from_value() {
    assert_eq!(Color::from_value("Blue"), Some(Color::Blue));
    assert_eq!(Color::from_value("blue"), None);
}

#[test]
fn test_instance_as_error() {
    fn fail() -> Result<(), Box<dyn std::error::Error>> {
        Err(Box::new(Status::Running))
    }
    assert_eq!(fail().unwrap_err().to_string(), "running");
}

#[test]
fn test_encode_json() {
    assert_eq!(serde_json::to_string(&Color::Red).unwrap(), r#""Red""#);
    assert_eq!(
        serde_json::to_string(&Color::Blue).unwrap(),
        r#"{"name":"blue","description":"primary color"}"#
    );
}

#[test]
fn test_decode_json() {
    let red: Color = serde_json::from_str(r#""Red""#).unwrap();
    assert_eq!(red, Color::Red);

    let blue: Color = serde_json::from_str(r#""blue""#).unwrap();
    assert_eq!(blue, Color::Blue);
    assert_eq!(blue.name(), "blue");
    // Decoding does not restore the description.
    assert_eq!(blue.description(), "");

    let err = serde_json::from_str::<Color>(r#""green""#).unwrap_err();
    assert!(err.to_string().contains("'green' is not a valid value for type Color"));

    assert!(serde_json::from_str::<Color>("42").is_err());
}

#[test]
fn test_json_round_trip_with_description() {
    let encoded = serde_json::to_string(&vec![Color::Red, Color::Blue]).unwrap();
    let decoded: Vec<Color> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, [Color::Red, Color::Blue]);
    assert_eq!(decoded[1].name(), "blue");
}

#[test]
fn test_equality_and_hash_use_value() {
    let decoded: Color = serde_json::from_str(r#""blue""#).unwrap();
    assert_eq!(decoded, Color::Blue);

    let set: HashSet<Color> = [Color::Blue, decoded, Color::Red].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
#[should_panic(expected = "Could not map enum")]
fn test_default_instance_is_unknown() {
    let _ = Color::default().name();
}
