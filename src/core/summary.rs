use crate::core::distance::{haversine_distance, round_km};
use crate::models::{AmenityCategory, AmenityElement, AmenityMarker, AmenitySummary, AmenityTags};

/// Result of reducing one fetch cycle's amenity elements
#[derive(Debug, Clone)]
pub struct AmenityReduction {
    pub summary: AmenitySummary,
    pub markers: Vec<AmenityMarker>,
}

/// Classify a result element by tag membership
///
/// Elements matching none of the recognized tags are skipped by the reducer.
pub fn classify(tags: &AmenityTags) -> Option<AmenityCategory> {
    if tags.amenity.as_deref() == Some("school") {
        return Some(AmenityCategory::School);
    }
    if tags.railway.as_deref() == Some("station")
        || tags.railway.as_deref() == Some("subway_entrance")
        || tags.public_transport.as_deref() == Some("station")
    {
        return Some(AmenityCategory::Transit);
    }
    if tags.amenity.as_deref() == Some("hospital") {
        return Some(AmenityCategory::Hospital);
    }
    None
}

/// Reduce both query passes into a summary and the markers to plot
///
/// The local pass contributes school and transit elements: every school is
/// counted and marked, every transit element is marked and the running
/// minimum distance tracked. The hospital pass contributes only the single
/// nearest hospital. Ties keep the first-seen element (strict `<`).
pub fn summarize(
    listing_lat: f64,
    listing_lng: f64,
    local: &[AmenityElement],
    hospitals: &[AmenityElement],
) -> AmenityReduction {
    let mut schools: u32 = 0;
    let mut nearest_mrt_km: Option<f64> = None;
    let mut markers = Vec::new();

    for el in local {
        let d = haversine_distance(listing_lat, listing_lng, el.lat, el.lon);

        match classify(&el.tags) {
            Some(AmenityCategory::School) => {
                schools += 1;
                markers.push(marker_for(el, AmenityCategory::School, d));
            }
            Some(AmenityCategory::Transit) => {
                if nearest_mrt_km.map_or(true, |min| d < min) {
                    nearest_mrt_km = Some(d);
                }
                markers.push(marker_for(el, AmenityCategory::Transit, d));
            }
            // Hospitals come from the second pass; anything else is skipped
            _ => {}
        }
    }

    // Hospital pass: keep only the closest element
    let mut nearest_hospital: Option<(&AmenityElement, f64)> = None;
    for el in hospitals {
        let d = haversine_distance(listing_lat, listing_lng, el.lat, el.lon);
        if nearest_hospital.map_or(true, |(_, min)| d < min) {
            nearest_hospital = Some((el, d));
        }
    }

    let nearest_hospital_km = nearest_hospital.map(|(el, d)| {
        markers.push(marker_for(el, AmenityCategory::Hospital, d));
        d
    });

    AmenityReduction {
        summary: AmenitySummary {
            schools,
            nearest_mrt_km: nearest_mrt_km.map(round_km),
            nearest_hospital_km: nearest_hospital_km.map(round_km),
        },
        markers,
    }
}

fn marker_for(el: &AmenityElement, category: AmenityCategory, distance_km: f64) -> AmenityMarker {
    let label = el
        .tags
        .name
        .clone()
        .unwrap_or_else(|| category.default_label().to_string());

    AmenityMarker {
        lat: el.lat,
        lon: el.lon,
        category,
        label,
        distance_km: round_km(distance_km),
    }
}
