//! Fantasy Football Data CLI Library
//!
//! A small Rust library for pulling fantasy-football reference data from
//! public endpoints and emitting it as JSON.
//!
//! ## Features
//!
//! - **Sleeper Roster**: Fetch the full NFL player map from the Sleeper API
//! - **DynastyProcess IDs**: Fetch the cross-platform player ID map and
//!   convert each CSV row to a JSON object
//! - **Flexible Output**: Write to stdout or to a file, creating parent
//!   directories as needed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ff_data::{commands::sleeper_players::handle_sleeper_players, Result};
//!
//! # async fn example() -> Result<()> {
//! // Fetch all Sleeper players and print them to stdout
//! handle_sleeper_players(None).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod sources;

// Re-export commonly used types
pub use error::{FfError, Result};
