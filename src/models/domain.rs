use serde::{Deserialize, Serialize};

/// A property listing loaded from the static listings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Position in the listings file, assigned at load time
    #[serde(default)]
    pub id: usize,
    pub name: String,
    pub address: String,
    pub price: u64,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub onsite_facilities: Option<OnsiteFacilities>,
}

impl Listing {
    /// Helper to get the pool flag, defaulting to false
    pub fn has_pool(&self) -> bool {
        self.onsite_facilities.as_ref().map_or(false, |f| f.pool)
    }

    /// Helper to get the gym flag, defaulting to false
    pub fn has_gym(&self) -> bool {
        self.onsite_facilities.as_ref().map_or(false, |f| f.gym)
    }
}

/// Facilities on the listing's own grounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnsiteFacilities {
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub gym: bool,
}

/// One element of an Overpass query result
///
/// Transient: lives for a single fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityElement {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: AmenityTags,
}

/// The subset of OSM tags the reducer looks at
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmenityTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub railway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Amenity category a result element classifies into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityCategory {
    School,
    Transit,
    Hospital,
}

impl AmenityCategory {
    /// Fallback marker label when the element carries no name tag
    pub fn default_label(&self) -> &'static str {
        match self {
            AmenityCategory::School => "School",
            AmenityCategory::Transit => "MRT Station",
            AmenityCategory::Hospital => "Hospital",
        }
    }
}

/// Amenity summary for one listing
///
/// A pure function of the amenity result set and the listing's coordinates,
/// recomputed in full on every request. Distances are kilometers rounded to
/// two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenitySummary {
    pub schools: u32,
    #[serde(rename = "nearestMrtKm")]
    pub nearest_mrt_km: Option<f64>,
    #[serde(rename = "nearestHospitalKm")]
    pub nearest_hospital_km: Option<f64>,
}

/// A map marker for one amenity, ready for the client to plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityMarker {
    pub lat: f64,
    pub lon: f64,
    pub category: AmenityCategory,
    pub label: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Buyer category used by the listing filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyerType {
    Any,
    Single,
    Family,
}

/// Criteria for the listing filter scan
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub max_budget: Option<u64>,
    pub buyer_type: Option<BuyerType>,
}

/// Search radii in meters for the two Overpass queries
#[derive(Debug, Clone, Copy)]
pub struct SearchRadii {
    pub school_m: u32,
    pub transit_m: u32,
    pub hospital_m: u32,
}

impl Default for SearchRadii {
    fn default() -> Self {
        Self {
            school_m: 800,
            transit_m: 1000,
            hospital_m: 5000,
        }
    }
}
