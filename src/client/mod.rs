//! # Yummly HTTP Client
//!
//! This module provides the HTTP client for the Yummly recipe-search API,
//! covering recipe lookup, keyword/faceted search, and metadata lists.
//!
//! ## Modules
//!
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`params`] - Open-ended search parameter configuration
//! - [`types`] - Type definitions for API responses
//! - [`error`] - Typed errors, including the distinct timeout failure
//!
//! ## Quick Start
//!
//! ```no_run
//! use yummly::client::{SearchParams, YummlyClient};
//!
//! # async fn example() -> Result<(), yummly::YummlyError> {
//! let client = YummlyClient::new("app-id", "app-key");
//!
//! // Search for recipes
//! let results = client.search("chicken casserole", Some(10)).await?;
//! println!("{} matches", results.matches.len());
//!
//! // Fetch full detail for the first match
//! if let Some(first) = results.matches.first() {
//!     let recipe = client.recipe(&first.id).await?;
//!     println!("{}: {} ingredients", recipe.name, recipe.ingredient_lines.len());
//! }
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod params;
pub mod types;

pub use client::{YummlyClient, DEFAULT_BASE_URL, METADATA_KEYS};
pub use error::{YummlyError, YummlyResult};
pub use params::SearchParams;
pub use types::*;
