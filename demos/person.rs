//! Validating a nested Person graph
//!
//! Demonstrates:
//! - Declaring validated types with `subject!`
//! - Qualified paths across several nesting levels
//! - Diagnostics for malformed declarations via `tracing`
//! - Emitting violations as JSON
//!
//! Run with `RUST_LOG=structassert=debug cargo run --example person` to see
//! the diagnostics.

use structassert::{subject, validate, validate_all};
use tracing_subscriber::EnvFilter;

subject! {
    #[derive(Debug, Default)]
    pub struct Latitude {
        pub degrees: f64 as "Degrees" => "required=true,min=0.0,max=90.0",
        pub direction: String as "Direction" => "required=true,pattern=N|S",
    }
}

subject! {
    #[derive(Debug, Default)]
    pub struct Location {
        pub latitude: Latitude as "Latitude" => "required=true",
        pub longitude: f64 as "Longitude" => "required=true,min=-180.0,max=180.0",
    }
}

subject! {
    #[derive(Debug, Default)]
    pub struct Address {
        pub address1: String as "Address1" => "required=true",
        pub city: String as "City",
        pub state: String as "State" => "required=true",
        // `maxlength:3` lands in the reserved segment and is never checked
        pub country: String as "Country" => "required=true,maxlength:3",
        pub zip_code: String as "ZipCode" => "required=true",
        pub location: Location as "Location",
    }
}

subject! {
    #[derive(Debug, Default)]
    pub struct Person {
        pub first_name: String as "FirstName" => "required=true",
        pub middle_init: String as "MiddleInit" => "required=true,minlength=1,maxlength=1",
        pub last_name: String as "LastName" => "required=true",
        pub address: Vec<Address> as "Address" => "required=true",
        // unparsable bound, logged and skipped
        pub age: Option<u8> as "Age" => "min=zero",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Valid Person ===\n");
    let kirk = Person {
        first_name: "James".to_string(),
        middle_init: "T".to_string(),
        last_name: "Kirk".to_string(),
        address: vec![Address {
            address1: "755 Crossover Lane".to_string(),
            city: "Memphis".to_string(),
            state: "TN".to_string(),
            country: "USA".to_string(),
            zip_code: "38107".to_string(),
            location: Location {
                latitude: Latitude {
                    degrees: 35.1098212,
                    direction: "N".to_string(),
                },
                longitude: -89.9077976,
            },
        }],
        age: Some(34),
    };
    println!("violations: {:?}", validate(&kirk));
    println!("success: {}", validate_all(&kirk).is_success());

    println!("\n=== Invalid Person ===\n");
    let mut invalid = Person {
        first_name: "James".to_string(),
        middle_init: "TJ".to_string(),
        ..Person::default()
    };
    invalid.address.push(Address {
        country: "USAX".to_string(),
        location: Location {
            latitude: Latitude {
                degrees: 135.0,
                direction: "E".to_string(),
            },
            longitude: 0.0,
        },
        ..Address::default()
    });

    let violations = validate(&invalid);
    for violation in &violations {
        println!("  {violation}");
    }

    match serde_json::to_string_pretty(&violations) {
        Ok(json) => println!("\n{json}"),
        Err(err) => eprintln!("failed to encode violations: {err}"),
    }
}
