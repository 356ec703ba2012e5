// Service exports
pub mod listings;
pub mod overpass;

pub use listings::{ListingStore, ListingsError};
pub use overpass::{NearbyAmenities, OverpassClient, OverpassError};
