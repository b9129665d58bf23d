//! # Seed Data Generator
//!
//! Populates a development database with store rates and categories.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults (gold ₹6000/g, GST 3%)
//! cargo run -p aurum-db --bin seed
//!
//! # Custom gold rate (rupees per gram)
//! cargo run -p aurum-db --bin seed -- --gold-rate 6500
//!
//! # Specify database path
//! cargo run -p aurum-db --bin seed -- --db ./data/aurum.db
//! ```
//!
//! ## Seeded Data
//! - Gold rate and GST rate in the settings row
//! - One category per common jewellery item type, each with a
//!   per-gram seikuli (labor) rate

use std::env;

use aurum_core::{GstRate, Money};
use aurum_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Default categories: (name, seikuli rate in paise per gram).
const CATEGORIES: &[(&str, i64)] = &[
    ("Ring", 20_000),
    ("Chain", 25_000),
    ("Necklace", 50_000),
    ("Bangle", 30_000),
    ("Stud", 15_000),
    ("Bracelet", 35_000),
    ("Pendant", 20_000),
    ("Anklet", 25_000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./aurum_dev.db");
    let mut gold_rate_rupees: i64 = 6000;
    let mut gst_percent: u32 = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--gold-rate" | "-g" => {
                if i + 1 < args.len() {
                    gold_rate_rupees = args[i + 1].parse().unwrap_or(6000);
                    i += 1;
                }
            }
            "--gst" => {
                if i + 1 < args.len() {
                    gst_percent = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aurum POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>        Database file path (default: ./aurum_dev.db)");
                println!("  -g, --gold-rate <RS>   Gold rate in rupees per gram (default: 6000)");
                println!("      --gst <PCT>        GST rate in whole percent (default: 3)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Aurum POS Seed Data Generator");
    println!("================================");
    println!("Database:  {}", db_path);
    println!("Gold rate: ₹{}/gram", gold_rate_rupees);
    println!("GST:       {}%", gst_percent);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing categories
    let existing = db.categories().list().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} categories", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Seed settings
    let settings = db
        .settings()
        .update_gold_rate(Money::from_paise(gold_rate_rupees * 100))
        .await?;
    db.settings()
        .update_gst_rate(GstRate::from_bps(gst_percent * 100))
        .await?;

    println!();
    println!(
        "✓ Settings: gold {} / gram, GST {} bps",
        settings.gold_rate(),
        gst_percent * 100
    );

    // Seed categories
    println!();
    println!("Seeding categories...");

    for (name, seikuli_rate_paise) in CATEGORIES {
        let category = db
            .categories()
            .insert(name, Money::from_paise(*seikuli_rate_paise))
            .await?;
        println!(
            "  {} (seikuli {}/g)",
            category.name,
            category.seikuli_rate()
        );
    }

    // Verify the snapshot the billing screen would load
    let rates = db.rate_config().await?;
    println!();
    println!(
        "✓ Rate config: {} categories, gold {}/g",
        rates.categories.len(),
        rates.gold_rate()
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
