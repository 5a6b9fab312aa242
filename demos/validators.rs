//! Validators Example
//!
//! Filters and partitions small data sets with reusable predicates.
//!
//! Run with: cargo run --example validators

use serde_json::{json, Value};
use sluice::prelude::*;

fn main() {
    println!("=== Predicate Validators Example ===\n");

    emails();
    numbers();
    ages();
    combined_rules();
    mixed_json();
}

/// Demonstrates syntactic and corporate email checks
fn emails() {
    println!("--- Emails ---\n");

    let emails = [
        "usuario@example.com",
        "email_invalido",
        "contacto@empresa.org",
        "sin_arroba.com",
        "valido@dominio.co",
        "alguien@gmail.com",
    ];
    println!("All: {:?}", emails);
    println!("Valid: {:?}", filter(&emails, valid_email()));
    println!("Corporate: {:?}\n", filter(&emails, corporate_email()));
}

/// Demonstrates numeric thresholds
fn numbers() {
    println!("--- Numbers ---\n");

    let numbers = [5, 15, 3, 20, 8, 12, 10, 25];
    println!("All: {:?}", numbers);
    println!("Greater than 10: {:?}", filter(&numbers, greater_than(10)));
    println!("Even: {:?}\n", filter(&numbers, even()));
}

/// Demonstrates a range factory and a partition report
fn ages() {
    println!("--- Ages (18-65) ---\n");

    let ages = [15, 25, 30, 70, 45, 12, 60, 80];
    let split = partition(&ages, in_range(18, 65));
    println!("Accepted ({}): {:?}", split.valid.len(), split.valid);
    println!("Rejected ({}): {:?}\n", split.invalid.len(), split.invalid);
}

/// Demonstrates AND / OR / NOT
fn combined_rules() {
    println!("--- Combined Rules ---\n");

    let numbers = [8, 9, 11, 12, 15, 16];
    let big_and_even: AllOf<i32> = all_of([greater_than(10).boxed(), even().boxed()]);
    let even_or_big: AnyOf<i32> = any_of([even().boxed(), greater_than(10).boxed()]);

    println!("All: {:?}", numbers);
    println!("> 10 AND even: {:?}", filter(&numbers, big_and_even));
    println!("even OR > 10: {:?}", filter(&numbers, even_or_big));
    println!("NOT > 10: {:?}\n", filter(&numbers, negate(greater_than(10))));
}

/// Demonstrates predicates over heterogeneous JSON data
fn mixed_json() {
    println!("--- Mixed JSON ---\n");

    let data: Vec<Value> = vec![
        json!(42),
        json!("17"),
        json!("texto"),
        json!(null),
        json!([1, 2, 3]),
        json!({"nombre": "Juan"}),
        json!(""),
    ];

    let numeric = partition(&data, positive());
    println!("Positive numbers: {:?}", numeric.valid);
    println!("Everything else: {:?}", numeric.invalid);
    println!("Non-empty lists: {:?}", filter(&data, non_empty_list()));
    println!("With 'nombre': {:?}", filter(&data, has_key("nombre")));
    println!("Non-blank text: {:?}", filter(&data, not_blank()));
}
