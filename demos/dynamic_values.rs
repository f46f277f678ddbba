//! Building and mutating Value trees at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use std::error::Error;
use yujson::{from_value, to_value, yujson, Value};

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with the yujson! macro
    let mut config = yujson!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "debug": true
    });

    println!("Config:\n{:#}\n", config);

    // Read-only indexing never panics; missing children read as null
    println!("host = {}", config["host"]);
    println!("port = {}", config["port"].convert_to_int(80));
    println!("missing = {}\n", config["nope"]["deeper"]);

    // Typed accessors report mismatches as errors
    if let Err(err) = config["host"].array() {
        println!("host is not an array: {}\n", err);
    }

    // Mutate in place
    {
        let object = config.object_mut()?;
        object.get_mut("features")?.array_mut()?.push(Value::from("metrics"));
        object.set("port", Value::from(9090));
        object.remove("debug");
    }

    // Changing a child's kind means replacing it in its slot
    let features = config.object_mut()?.get_mut("features")?;
    let old = std::mem::replace(features, Value::from("all"));
    println!("replaced {} with {}\n", old, config["features"]);

    println!("Updated config:\n{}\n", config);

    // Convert between structs and values
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value:\n{:#}\n", user_value);

    let back: User = from_value(user_value.clone())?;
    println!("Back to struct: {:?}\n", back);

    println!("Type checks:");
    println!("  kind:      {}", user_value.kind());
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  len:       {}", user_value.len()?);

    Ok(())
}
