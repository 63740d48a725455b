//! # rentora-db: Database Layer for Rentora
//!
//! This crate provides database access for the Rentora rental marketplace.
//! It uses SQLite for storage with sqlx for async operations, and hosts the
//! Booking Engine - the orchestrator that owns every multi-row transaction.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rentora Data Flow                                │
//! │                                                                         │
//! │  API handler (POST checkout, PATCH status, DELETE item, ...)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rentora-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ BookingEngine │    │ Repositories │  │   │
//! │  │   │   (pool.rs)   │    │  (engine.rs)  │    │              │  │   │
//! │  │   │               │    │               │    │ ItemRepo     │  │   │
//! │  │   │ SqlitePool    │◄───│ checkout      │    │ CartRepo     │  │   │
//! │  │   │ Migrations    │    │ status change │◄───│ RentalRepo   │  │   │
//! │  │   │ Management    │    │ cascade del   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (WAL mode, foreign keys on)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (item, cart, rental)
//! - [`engine`] - The Booking Engine (checkout, status transitions, cascades)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rentora_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/rentora.db");
//! let db = Database::new(config).await?;
//!
//! // Read paths go through repositories
//! let catalog = db.items().list_available().await?;
//!
//! // Multi-row writes go through the Booking Engine
//! let summary = db.booking().checkout(&request).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use engine::{BookingEngine, BookingError, CheckoutSummary};
pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::account::AccountRepository;
pub use repository::cart::CartRepository;
pub use repository::item::ItemRepository;
pub use repository::rental::RentalRepository;
