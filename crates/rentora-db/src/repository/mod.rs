//! # Repository Module
//!
//! Database repository implementations for Rentora.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  API handler                                                           │
//! │       │                                                                 │
//! │       │  db.items().list_available()                                   │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── list_available(&self)                                             │
//! │  ├── get(&self, id)                                                    │
//! │  ├── insert(&self, new_item)                                           │
//! │  └── update(&self, id, update)                                         │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Repositories cover single-row writes and all reads. Anything that     │
//! │  must touch more than one row atomically belongs to the Booking        │
//! │  Engine instead (see engine.rs).                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Inventory Store (catalog CRUD, status override)
//! - [`cart::CartRepository`] - Cart Store (set semantics per account)
//! - [`rental::RentalRepository`] - Rental Ledger (history views, owner cancel)
//! - [`account::AccountRepository`] - Minimal account rows (seed/test support)

pub mod account;
pub mod cart;
pub mod item;
pub mod rental;
