//! Parse a document, inspect it and print it back.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use std::error::Error;
use yujson::{from_str, parse, print, to_string, Document};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"{"qvq":["233",123,"emm",{"qaq":"sb","emmm":true}]}"#;

    let value = parse(text)?;
    println!("Compact:\n{}\n", print(&value, false));
    println!("Pretty:\n{}\n", print(&value, true));

    let items = value.object()?.get("qvq")?.array()?;
    println!("'qvq' holds {} items, the second is {}", items.len(), items.at(1)?);

    // Rejected text reports where it went wrong
    if let Err(err) = parse("[1, 2,]") {
        println!("Rejected: {}", err);
    }

    // A document swallows the error instead
    let doc = Document::parse("{\"open\": ");
    println!("Invalid document prints as {:?}\n", doc.print(true));

    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let json = to_string(&users)?;
    println!("Typed output:\n{}\n", json);

    let users_back: Vec<User> = from_str(&json)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    Ok(())
}
