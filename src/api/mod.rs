//! REST API client module for the campus map backend.
//!
//! This module provides the `ApiClient` for fetching building lists,
//! single buildings, server-side search results and search suggestions,
//! plus the `BuildingProvider` trait the store consumes so transports
//! stay pluggable.

pub mod client;
pub mod error;
pub mod provider;

pub use client::ApiClient;
pub use error::ApiError;
pub use provider::BuildingProvider;
