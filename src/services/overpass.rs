use crate::models::{AmenityElement, SearchRadii};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the Overpass endpoint
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Wire shape of an Overpass interpreter response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<AmenityElement>,
}

/// Both query passes for one listing selection
#[derive(Debug, Clone)]
pub struct NearbyAmenities {
    pub local: Vec<AmenityElement>,
    pub hospitals: Vec<AmenityElement>,
}

/// Overpass API client
///
/// Issues the two fixed-shape Overpass QL queries per listing selection:
/// schools and transit stations within the local radii, then hospitals
/// within the expanded radius. The queries are posted as raw bodies and
/// run sequentially.
pub struct OverpassClient {
    endpoint: String,
    radii: SearchRadii,
    client: Client,
}

impl OverpassClient {
    /// Create a new Overpass client
    pub fn new(endpoint: String, radii: SearchRadii, timeout_secs: u64) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            radii,
            client,
        })
    }

    /// Build the schools + transit query for a listing's coordinates
    fn base_query(&self, lat: f64, lng: f64) -> String {
        format!(
            "[out:json];\n(\n  node[\"amenity\"=\"school\"](around:{school},{lat},{lng});\n  node[\"railway\"=\"station\"](around:{transit},{lat},{lng});\n  node[\"railway\"=\"subway_entrance\"](around:{transit},{lat},{lng});\n  node[\"public_transport\"=\"station\"](around:{transit},{lat},{lng});\n);\nout;",
            school = self.radii.school_m,
            transit = self.radii.transit_m,
            lat = lat,
            lng = lng,
        )
    }

    /// Build the hospital query (expanded radius)
    fn hospital_query(&self, lat: f64, lng: f64) -> String {
        format!(
            "[out:json];\nnode[\"amenity\"=\"hospital\"](around:{hospital},{lat},{lng});\nout;",
            hospital = self.radii.hospital_m,
            lat = lat,
            lng = lng,
        )
    }

    /// POST one Overpass QL query and parse the `{elements}` body
    async fn run_query(&self, query: String) -> Result<Vec<AmenityElement>, OverpassError> {
        tracing::debug!("Posting Overpass query to {}", self.endpoint);

        let response = self.client.post(&self.endpoint).body(query).send().await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "Overpass query failed: {}",
                response.status()
            )));
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| OverpassError::InvalidResponse(format!("Failed to parse elements: {}", e)))?;

        Ok(body.elements)
    }

    /// Fetch schools and transit stations around a listing
    pub async fn fetch_local(&self, lat: f64, lng: f64) -> Result<Vec<AmenityElement>, OverpassError> {
        let elements = self.run_query(self.base_query(lat, lng)).await?;
        tracing::debug!("Local pass returned {} elements", elements.len());
        Ok(elements)
    }

    /// Fetch hospitals around a listing (expanded radius)
    pub async fn fetch_hospitals(&self, lat: f64, lng: f64) -> Result<Vec<AmenityElement>, OverpassError> {
        let elements = self.run_query(self.hospital_query(lat, lng)).await?;
        tracing::debug!("Hospital pass returned {} elements", elements.len());
        Ok(elements)
    }

    /// Run both passes for one listing selection, sequentially
    ///
    /// The hospital query is only issued after the local pass completes.
    pub async fn fetch_nearby(&self, lat: f64, lng: f64) -> Result<NearbyAmenities, OverpassError> {
        let local = self.fetch_local(lat, lng).await?;
        let hospitals = self.fetch_hospitals(lat, lng).await?;

        Ok(NearbyAmenities { local, hospitals })
    }
}
