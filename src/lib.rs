//! # Yummly Client Library
//!
//! A typed client for the Yummly recipe-search web API. It exposes three
//! remote operations — recipe lookup by identifier, keyword/faceted search,
//! and metadata lookup — with bounded retry-on-timeout handling.
//!
//! The [`client`] module holds the HTTP client, its parameter builder, and
//! the typed response structures.
//!
//! ## Quick Start
//!
//! ```no_run
//! use yummly::{SearchParams, YummlyClient};
//!
//! # async fn example() -> Result<(), yummly::YummlyError> {
//! let client = YummlyClient::new("app-id", "app-key");
//!
//! let results = client
//!     .search_with(
//!         &SearchParams::new("chicken")
//!             .with_max_result(5)
//!             .exclude_ingredient("cumin"),
//!     )
//!     .await?;
//!
//! for m in &results.matches {
//!     println!("{} ({})", m.recipe_name, m.source_display_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{
    Match, MetadataEntry, Range, Recipe, SearchCriteria, SearchParams, SearchResult, YummlyClient,
    YummlyError, YummlyResult, METADATA_KEYS,
};
