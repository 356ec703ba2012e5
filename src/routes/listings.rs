use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{apply_filters, summarize, AmenityReduction};
use crate::models::{
    AmenitiesResponse, ErrorResponse, HealthResponse, Listing, ListingFilter, ListingsQuery,
    ListingsResponse,
};
use crate::render::render_panel;
use crate::services::{ListingStore, OverpassClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub overpass: Arc<OverpassClient>,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(get_listings))
        .route("/listings/{id}/amenities", web::get().to(get_amenities))
        .route("/listings/{id}/panel", web::get().to(get_panel));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Listings endpoint
///
/// GET /api/v1/listings?maxBudget=1000000&buyerType=family
///
/// Returns the listing set after the filter pass: listings priced above the
/// budget ceiling are dropped, and the family buyer category drops listings
/// that report fewer than two bedrooms.
async fn get_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for listings query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filter = ListingFilter {
        max_budget: query.max_budget,
        buyer_type: query.buyer_type,
    };

    let visible: Vec<_> = apply_filters(state.store.all(), &filter)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        "Filter pass kept {} of {} listings",
        visible.len(),
        state.store.len()
    );

    let total_listings = visible.len();

    HttpResponse::Ok().json(ListingsResponse {
        listings: visible,
        total_listings,
    })
}

/// Look up a listing, run both Overpass passes, and reduce the results
///
/// Shared first half of the amenities and panel endpoints. An unknown id
/// maps to 404, an upstream failure to 502.
async fn fetch_reduction(
    state: &web::Data<AppState>,
    id: usize,
) -> Result<(&Listing, AmenityReduction), HttpResponse> {
    let listing = state.store.get(id).ok_or_else(|| {
        HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", id),
            status_code: 404,
        })
    })?;

    tracing::info!("Fetching amenities for listing {} ({})", id, listing.name);

    let nearby = state
        .overpass
        .fetch_nearby(listing.lat, listing.lng)
        .await
        .map_err(|e| {
            tracing::error!("Overpass query failed for listing {}: {}", id, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Amenity query failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        })?;

    let reduction = summarize(listing.lat, listing.lng, &nearby.local, &nearby.hospitals);

    tracing::debug!(
        "Listing {}: {} schools, {} markers",
        id,
        reduction.summary.schools,
        reduction.markers.len()
    );

    Ok((listing, reduction))
}

/// Amenities endpoint
///
/// GET /api/v1/listings/{id}/amenities
///
/// Runs both Overpass passes for the listing's coordinates, reduces the
/// results into the amenity summary, and returns the summary plus markers.
async fn get_amenities(state: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let id = path.into_inner();

    let (_, reduction) = match fetch_reduction(&state, id).await {
        Ok(pair) => pair,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(AmenitiesResponse {
        listing_id: id,
        summary: reduction.summary,
        markers: reduction.markers,
    })
}

/// Panel endpoint
///
/// GET /api/v1/listings/{id}/panel
///
/// Runs the same amenity pipeline, then renders the details panel as HTML.
async fn get_panel(state: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let id = path.into_inner();

    let (listing, reduction) = match fetch_reduction(&state, id).await {
        Ok(pair) => pair,
        Err(response) => return response,
    };

    let markup = render_panel(listing, &reduction.summary);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}
