// Integration tests for Propmap

use propmap::core::{apply_filters, haversine_distance, round_km, summarize};
use propmap::models::{
    AmenityCategory, AmenityElement, AmenityTags, BuyerType, ListingFilter,
};
use propmap::render::render_panel;
use propmap::services::ListingStore;

const LISTINGS_JSON: &str = r#"[
    {
        "name": "Dover Heights",
        "address": "12 Dover Rise",
        "price": 1250000,
        "lat": 1.3041,
        "lng": 103.7763,
        "bedrooms": 3,
        "onsite_facilities": {"pool": true, "gym": true}
    },
    {
        "name": "Clementi Peak",
        "address": "5 Clementi Ave",
        "price": 980000,
        "lat": 1.3151,
        "lng": 103.7652,
        "bedrooms": 1
    },
    {
        "name": "Kent Vale",
        "address": "31 Kent Ridge Cres",
        "price": 1600000,
        "lat": 1.2936,
        "lng": 103.7745
    }
]"#;

fn tagged(lat: f64, lon: f64, key: &str, value: &str, name: Option<&str>) -> AmenityElement {
    let mut tags = AmenityTags {
        name: name.map(|n| n.to_string()),
        ..Default::default()
    };
    match key {
        "amenity" => tags.amenity = Some(value.to_string()),
        "railway" => tags.railway = Some(value.to_string()),
        "public_transport" => tags.public_transport = Some(value.to_string()),
        _ => {}
    }
    AmenityElement { lat, lon, tags }
}

#[test]
fn test_end_to_end_selection_cycle() {
    // Load listings, pick one, reduce a mixed amenity result set, render the panel
    let store = ListingStore::from_json(LISTINGS_JSON).unwrap();
    let listing = store.get(0).unwrap();

    let local = vec![
        tagged(1.3050, 103.7770, "amenity", "school", Some("Dover Primary")),
        tagged(1.3035, 103.7750, "amenity", "school", None),
        tagged(1.3020, 103.7740, "railway", "station", Some("Dover MRT")),
        tagged(1.3060, 103.7790, "railway", "subway_entrance", None),
        tagged(1.3045, 103.7765, "amenity", "cafe", Some("Ignored Cafe")),
    ];
    let hospitals = vec![
        tagged(1.3200, 103.7900, "amenity", "hospital", Some("NUH")),
        tagged(1.3400, 103.8100, "amenity", "hospital", Some("Farther")),
    ];

    let reduction = summarize(listing.lat, listing.lng, &local, &hospitals);

    // Schools counted, cafe ignored
    assert_eq!(reduction.summary.schools, 2);

    // Transit minimum across both station variants
    let station_d = haversine_distance(listing.lat, listing.lng, 1.3020, 103.7740);
    let entrance_d = haversine_distance(listing.lat, listing.lng, 1.3060, 103.7790);
    let expected_mrt = round_km(station_d.min(entrance_d));
    assert_eq!(reduction.summary.nearest_mrt_km, Some(expected_mrt));

    // Only the closest hospital is marked
    let hospital_markers: Vec<_> = reduction
        .markers
        .iter()
        .filter(|m| m.category == AmenityCategory::Hospital)
        .collect();
    assert_eq!(hospital_markers.len(), 1);
    assert_eq!(hospital_markers[0].label, "NUH");

    // 2 schools + 2 transit + 1 hospital
    assert_eq!(reduction.markers.len(), 5);

    // Panel reflects the listing and the computed summary
    let markup = render_panel(listing, &reduction.summary).into_string();
    assert!(markup.contains("Dover Heights"));
    assert!(markup.contains("$1,250,000"));
    assert!(markup.contains("Schools nearby: 2"));
    assert!(markup.contains(&format!("{:.2} km", expected_mrt)));
}

#[test]
fn test_filter_pass_over_loaded_listings() {
    let store = ListingStore::from_json(LISTINGS_JSON).unwrap();

    // Budget ceiling alone
    let budget_only = ListingFilter {
        max_budget: Some(1_300_000),
        buyer_type: None,
    };
    let visible = apply_filters(store.all(), &budget_only);
    assert_eq!(visible.len(), 2);

    // Family buyer drops the one-bedroom, keeps the unknown-bedroom listing
    let family = ListingFilter {
        max_budget: None,
        buyer_type: Some(BuyerType::Family),
    };
    let visible = apply_filters(store.all(), &family);
    let names: Vec<_> = visible.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Dover Heights", "Kent Vale"]);

    // Combined
    let both = ListingFilter {
        max_budget: Some(1_300_000),
        buyer_type: Some(BuyerType::Family),
    };
    let visible = apply_filters(store.all(), &both);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Dover Heights");
}

#[test]
fn test_summary_is_pure_function_of_inputs() {
    let store = ListingStore::from_json(LISTINGS_JSON).unwrap();
    let listing = store.get(1).unwrap();

    let local = vec![tagged(1.3160, 103.7660, "railway", "station", Some("Clementi"))];
    let hospitals = vec![tagged(1.3200, 103.7700, "amenity", "hospital", None)];

    let first = summarize(listing.lat, listing.lng, &local, &hospitals);
    let second = summarize(listing.lat, listing.lng, &local, &hospitals);

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.markers.len(), second.markers.len());
}

#[test]
fn test_unnamed_hospital_marker_uses_default_label() {
    let store = ListingStore::from_json(LISTINGS_JSON).unwrap();
    let listing = store.get(2).unwrap();

    let hospitals = vec![tagged(1.2950, 103.7760, "amenity", "hospital", None)];
    let reduction = summarize(listing.lat, listing.lng, &[], &hospitals);

    assert_eq!(reduction.markers.len(), 1);
    assert_eq!(reduction.markers[0].label, "Hospital");
}
