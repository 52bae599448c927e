//! # Seed Data Generator
//!
//! Populates a data directory with a sample catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data (default)
//! cargo run -p grocer-store --bin seed
//!
//! # Seed a specific directory
//! cargo run -p grocer-store --bin seed -- --dir ./demo-data
//!
//! # Also write a few sample bills
//! cargo run -p grocer-store --bin seed -- --bills
//! ```
//!
//! An existing catalog is left alone so the seeder never creates duplicates.

use std::env;

use grocer_core::{Category, ItemDraft, LineSelection, QuantityLabel};
use grocer_store::{Store, StoreConfig};

/// Sample catalog: (name, category, quantity, price)
const ITEMS: &[(&str, Category, QuantityLabel, i64)] = &[
    ("Apple", Category::Fruits, QuantityLabel::OneKg, 50),
    ("Banana", Category::Fruits, QuantityLabel::OneKg, 40),
    ("Mango", Category::Fruits, QuantityLabel::TwoKg, 180),
    ("Grapes", Category::Fruits, QuantityLabel::HalfKg, 60),
    ("Tomato", Category::Vegetables, QuantityLabel::OneKg, 30),
    ("Potato", Category::Vegetables, QuantityLabel::FiveKg, 120),
    ("Onion", Category::Vegetables, QuantityLabel::TwoKg, 70),
    ("Spinach", Category::Vegetables, QuantityLabel::HalfKg, 25),
    ("Milk", Category::Dairy, QuantityLabel::OneLitre, 30),
    ("Curd", Category::Dairy, QuantityLabel::FiveHundredMl, 35),
    ("Paneer", Category::Dairy, QuantityLabel::HalfKg, 180),
    ("Potato Chips", Category::Snacks, QuantityLabel::HalfKg, 90),
    ("Salted Peanuts", Category::Snacks, QuantityLabel::OneKg, 160),
    ("Orange Juice", Category::Beverages, QuantityLabel::OneLitre, 120),
    ("Mineral Water", Category::Beverages, QuantityLabel::FiveLitre, 80),
    ("Cola", Category::Beverages, QuantityLabel::TwoLitre, 95),
    ("Rice", Category::Other, QuantityLabel::TenKg, 650),
    ("Sugar", Category::Other, QuantityLabel::FiveKg, 240),
];

/// Sample bills: (customer, [(item, qty)])
const BILLS: &[(&str, &[(&str, i64)])] = &[
    ("Asha", &[("Apple", 3), ("Milk", 2)]),
    ("Ravi", &[("Rice", 1), ("Sugar", 1), ("Onion", 2)]),
    ("Meera", &[("Paneer", 1), ("Spinach", 2), ("Curd", 1)]),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./data");
    let mut with_bills = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--bills" | "-b" => with_bills = true,
            "--help" | "-h" => {
                println!("Grocer Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>   Data directory (default: ./data)");
                println!("  -b, --bills        Also generate sample bills");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Grocer Seed Data Generator");
    println!("=============================");
    println!("Data dir: {}", data_dir);
    println!();

    let store = Store::open(StoreConfig::new(&data_dir)).await?;
    println!("✓ Store opened");

    let existing = store.items().count().await;
    if existing > 0 {
        println!("⚠ Catalog already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the items snapshot to regenerate.");
        return Ok(());
    }

    println!();
    println!("Adding items...");
    let mut added = 0;
    for (name, category, quantity, price) in ITEMS {
        let draft = ItemDraft::new(*name, *category, *quantity, *price);
        if let Err(e) = store.items().add(draft).await {
            eprintln!("Failed to add {}: {}", name, e);
            continue;
        }
        added += 1;
    }
    println!("✓ Added {} items", added);

    if with_bills {
        println!();
        println!("Generating bills...");
        for (customer, lines) in BILLS {
            let selections: Vec<LineSelection> = lines
                .iter()
                .map(|(name, qty)| LineSelection::new(*name, *qty))
                .collect();
            match store.bills().generate(customer, &selections).await {
                Ok(bill) => println!("  {} → {}", bill.name, bill.total()),
                Err(e) => eprintln!("Failed to bill {}: {}", customer, e),
            }
        }
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
