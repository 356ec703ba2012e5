use serde::{Deserialize, Serialize};

use crate::models::domain::{AmenityMarker, AmenitySummary, Listing};

/// Response for the listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
}

/// Response for the amenities endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenitiesResponse {
    #[serde(rename = "listingId")]
    pub listing_id: usize,
    pub summary: AmenitySummary,
    pub markers: Vec<AmenityMarker>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
