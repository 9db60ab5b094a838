use crate::shared::api_utils::asset_url;
use contracts::domain::a001_destination::aggregate::parse_destinations;
use contracts::domain::a001_destination::{Destination, DestinationCatalog};
use contracts::shared::error::DestinationError;
use gloo_net::http::Request;

/// Fetch and parse the destination data file
pub async fn fetch_destinations(url: &str) -> Result<Vec<Destination>, DestinationError> {
    let response = Request::get(&asset_url(url))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| DestinationError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(DestinationError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| DestinationError::Network(e.to_string()))?;
    parse_destinations(&body)
}

/// Load the catalog, substituting the built-in record on any failure
pub async fn load_catalog(url: &str) -> DestinationCatalog {
    let result = fetch_destinations(url).await;
    match &result {
        Ok(list) => log::info!("Loaded {} destinations from {}", list.len(), url),
        Err(e) => log::error!("Error loading destinations from {}: {}. Using fallback data", url, e),
    }
    DestinationCatalog::from_load(result)
}
