//! # Core Application Logic
//!
//! This module contains Proplog's business logic.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Listing (data model) │
//!                    │  • Codec (line format)  │
//!                    │  • Session (states)     │
//!                    │  • Store (flat file)    │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No terminal. No color. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                        ┌──────────────┐
//!                        │   Console    │
//!                        │   Adapter    │
//!                        │ (crossterm)  │
//!                        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`listing`]: The `Listing` struct and field-level validation
//! - [`codec`]: encode/decode for the comma-delimited store format
//! - [`session`]: The menu state machine
//! - [`store`]: Append/read access to the flat text store
//! - [`config`]: Layered configuration (defaults → file → env → CLI)

pub mod codec;
pub mod config;
pub mod listing;
pub mod session;
pub mod store;
