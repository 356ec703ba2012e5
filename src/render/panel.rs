use maud::{html, Markup};

use crate::models::{AmenitySummary, Listing};

/// Render the details panel for a listing and its amenity summary
///
/// Pure function of its inputs; no state is retained between calls.
pub fn render_panel(listing: &Listing, summary: &AmenitySummary) -> Markup {
    html! {
        div class="info-panel" {
            h2 { (listing.name) }

            p {
                b { "Address:" }
                br;
                (listing.address)
            }

            p {
                b { "Price: " }
                "$" (format_price(listing.price))
            }

            h3 { "On-site Facilities" }
            p {
                "Pool: " (yes_no(listing.has_pool()))
                br;
                "Gym: " (yes_no(listing.has_gym()))
            }

            h3 { "Amenity Summary" }
            p {
                "Schools nearby: " (summary.schools)
                br;
                "Nearest MRT: " (format_km(summary.nearest_mrt_km))
                br;
                "Nearest Hospital: " (format_km(summary.nearest_hospital_km))
            }

            p { em { "Click amenity icons on the map for details" } }
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn format_km(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(d) => format!("{:.2} km", d),
        None => "N/A".to_string(),
    }
}

/// Format a price with thousands separators
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
