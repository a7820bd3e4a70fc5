//! # Cinos CLI
//!
//! Thin command-line shell over `cinos-core`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stand.toml ──► StandConfig ──► Menu + ReceiptFormatter                 │
//! │                                        │                                │
//! │  order.toml ──► OrderFile ─────────────┴──► Order ──► receipt / JSON    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod order_file;

pub use error::{CliError, CliResult};
