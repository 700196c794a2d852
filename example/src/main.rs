// example/src/main.rs

use example_app::enums::{Color, Status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("colors = {:?}", Color::names());

    // Parse a display name the way user input would arrive.
    let color: Color = "blue".parse()?;
    println!("{} ({}) = {:?}", color, color.value(), color.description());

    match Color::new("green") {
        Ok(color) => println!("unexpected color {}", color),
        Err(err) => println!("rejected: {}", err),
    }

    for status in Status::values() {
        println!("{:<8} -> {}", status.name(), serde_json::to_string(status)?);
    }

    let decoded: Vec<Status> = serde_json::from_str(r#"["running", {"name": "pending"}]"#)?;
    println!("decoded = {:?}", decoded.iter().map(Status::name).collect::<Vec<_>>());

    Ok(())
}
