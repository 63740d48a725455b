//! # Seed Data Generator
//!
//! Populates the database with demo accounts and a laptop catalog for
//! development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 laptops (default)
//! cargo run -p rentora-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p rentora-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p rentora-db --bin seed -- --db ./data/rentora.db
//! ```
//!
//! ## Generated Data
//! - One admin account plus a handful of demo customers
//! - Laptops across the usual rental brands, each with:
//!   - Brand + model from real product lines
//!   - A specifications line (CPU, RAM, storage, display)
//!   - Daily price: Rp75.000 - Rp350.000 depending on tier
//!   - Status `available`

use std::env;

use rentora_db::{Database, DbConfig};
use rentora_core::{AccountRole, NewItem};
use tracing_subscriber::EnvFilter;

/// Brand catalogs: (brand, models with a spec line and a price tier 0-3)
const BRANDS: &[(&str, &[(&str, &str, usize)])] = &[
    (
        "Lenovo",
        &[
            ("ThinkPad X1 Carbon Gen 11", "i7-1355U, 16GB RAM, 512GB SSD, 14\" WUXGA", 3),
            ("ThinkPad T14 Gen 4", "Ryzen 7 PRO 7840U, 16GB RAM, 512GB SSD, 14\" FHD", 2),
            ("ThinkPad E14", "i5-1335U, 8GB RAM, 256GB SSD, 14\" FHD", 1),
            ("IdeaPad Slim 5", "Ryzen 5 7530U, 16GB RAM, 512GB SSD, 14\" FHD OLED", 1),
            ("Legion 5 Pro", "Ryzen 7 7745HX, 16GB RAM, RTX 4060, 16\" WQXGA 165Hz", 3),
            ("Yoga 7i", "i7-1360P, 16GB RAM, 512GB SSD, 14\" 2.8K touch", 2),
        ],
    ),
    (
        "ASUS",
        &[
            ("ROG Zephyrus G14", "Ryzen 9 7940HS, 16GB RAM, RTX 4060, 14\" QHD 165Hz", 3),
            ("TUF Gaming A15", "Ryzen 7 7735HS, 16GB RAM, RTX 4050, 15.6\" FHD 144Hz", 2),
            ("Zenbook 14 OLED", "i5-1340P, 16GB RAM, 512GB SSD, 14\" 2.8K OLED", 2),
            ("Vivobook 15", "i3-1215U, 8GB RAM, 256GB SSD, 15.6\" FHD", 0),
            ("Vivobook Pro 16X", "i7-13700H, 16GB RAM, RTX 4050, 16\" 3.2K OLED", 3),
            ("ExpertBook B1", "i5-1235U, 8GB RAM, 512GB SSD, 14\" FHD", 1),
        ],
    ),
    (
        "Apple",
        &[
            ("MacBook Air M2", "M2 8-core, 8GB RAM, 256GB SSD, 13.6\" Liquid Retina", 2),
            ("MacBook Air M3 15\"", "M3 8-core, 16GB RAM, 512GB SSD, 15.3\" Liquid Retina", 3),
            ("MacBook Pro 14 M3 Pro", "M3 Pro 11-core, 18GB RAM, 512GB SSD, 14.2\" XDR", 3),
            ("MacBook Pro 16 M3 Max", "M3 Max 14-core, 36GB RAM, 1TB SSD, 16.2\" XDR", 3),
        ],
    ),
    (
        "Dell",
        &[
            ("XPS 13 Plus", "i7-1360P, 16GB RAM, 512GB SSD, 13.4\" 3.5K OLED", 3),
            ("Latitude 5440", "i5-1345U, 16GB RAM, 512GB SSD, 14\" FHD", 2),
            ("Inspiron 14", "i5-1335U, 8GB RAM, 512GB SSD, 14\" FHD+", 1),
            ("Vostro 3420", "i3-1215U, 8GB RAM, 256GB SSD, 14\" FHD", 0),
            ("Alienware m16", "i9-13900HX, 32GB RAM, RTX 4070, 16\" QHD+ 240Hz", 3),
        ],
    ),
    (
        "HP",
        &[
            ("Spectre x360 14", "i7-1355U, 16GB RAM, 1TB SSD, 13.5\" 3K2K OLED touch", 3),
            ("Pavilion Aero 13", "Ryzen 5 7535U, 16GB RAM, 512GB SSD, 13.3\" WUXGA", 1),
            ("EliteBook 840 G10", "i5-1335U, 16GB RAM, 512GB SSD, 14\" WUXGA", 2),
            ("Victus 16", "Ryzen 5 7640HS, 16GB RAM, RTX 4050, 16.1\" FHD 144Hz", 2),
            ("HP 14s", "Ryzen 3 7320U, 8GB RAM, 256GB SSD, 14\" FHD", 0),
        ],
    ),
    (
        "Acer",
        &[
            ("Swift Go 14", "i5-13500H, 16GB RAM, 512GB SSD, 14\" 2.8K OLED", 1),
            ("Aspire 5", "i5-1335U, 8GB RAM, 512GB SSD, 15.6\" FHD", 0),
            ("Nitro 5", "i5-12450H, 16GB RAM, RTX 4050, 15.6\" FHD 144Hz", 2),
            ("Predator Helios Neo 16", "i7-13700HX, 16GB RAM, RTX 4060, 16\" WQXGA 165Hz", 3),
        ],
    ),
];

/// Daily prices per tier, whole rupiah
const TIER_PRICES: &[i64] = &[75_000, 120_000, 180_000, 350_000];

/// Demo customer accounts: (name, email)
const CUSTOMERS: &[(&str, &str)] = &[
    ("Budi Santoso", "budi@example.com"),
    ("Sari Wulandari", "sari@example.com"),
    ("Agus Pratama", "agus@example.com"),
    ("Dewi Lestari", "dewi@example.com"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./rentora_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Rentora Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of laptops to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./rentora_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Rentora Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Laptops:  {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} laptops", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Demo accounts
    println!();
    println!("Creating accounts...");

    db.accounts()
        .insert("Rentora Admin", "admin@rentora.example", AccountRole::Admin)
        .await?;
    for (name, email) in CUSTOMERS {
        db.accounts()
            .insert(name, email, AccountRole::Customer)
            .await?;
    }
    println!("  1 admin + {} customers", CUSTOMERS.len());

    // Generate catalog
    println!();
    println!("Generating laptops...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: loop {
        for (brand, models) in BRANDS {
            for (model, specs, tier) in *models {
                if generated >= count {
                    break 'outer;
                }

                let new_item = generate_item(brand, model, specs, *tier, generated);

                if let Err(e) = db.items().insert(&new_item).await {
                    eprintln!("Failed to insert {} {}: {}", brand, model, e);
                    continue;
                }

                generated += 1;

                if generated % 50 == 0 {
                    println!("  Generated {} laptops...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} laptops in {:?}", generated, elapsed);

    let available = db.items().list_available().await?;
    println!("  Available for rent: {}", available.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single catalog entry. Duplicate brand/model pairs are fine;
/// each unit is its own rentable row.
fn generate_item(brand: &str, model: &str, specs: &str, tier: usize, seed: usize) -> NewItem {
    NewItem {
        brand: brand.to_string(),
        model: model.to_string(),
        specifications: specs.to_string(),
        price_per_day: TIER_PRICES[tier],
        image_ref: Some(format!(
            "/uploads/laptops/{}-{:03}.jpg",
            brand.to_lowercase(),
            seed
        )),
    }
}
