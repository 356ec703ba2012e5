// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AmenityCategory, AmenityElement, AmenityMarker, AmenitySummary, AmenityTags, BuyerType,
    Listing, ListingFilter, OnsiteFacilities, SearchRadii,
};
pub use requests::ListingsQuery;
pub use responses::{AmenitiesResponse, ErrorResponse, HealthResponse, ListingsResponse};
