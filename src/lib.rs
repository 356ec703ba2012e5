//! Propmap - listing map backend for the property viewer
//!
//! This library serves a static set of property listings and, per selected
//! listing, queries the Overpass API for nearby amenities, reduces the
//! results into a summary, and renders the details panel.

pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, summarize, AmenityReduction};
pub use crate::models::{AmenityElement, AmenityMarker, AmenitySummary, Listing, ListingFilter};
