use crate::config::ProviderParams;
use crate::error::ProviderError;
use crate::geo::GeoPoint;
use crate::route::RouteProvider;
use reqwest::Client;
use serde::Deserialize;

/// Directions-service client with waypoint optimization.
///
/// The request pins the origin and the final stop: the last coordinate is
/// sent as the fixed destination, every interior coordinate as an
/// `optimize:true` waypoint. The service's `waypoint_order` therefore
/// permutes only the interior set, and the final stop is appended last,
/// never reordered.
pub struct HttpDirectionsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    waypoint_order: Vec<usize>,
}

impl HttpDirectionsProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Builds a provider from config, or `None` when no URL is set.
    pub fn from_config(params: &ProviderParams) -> Option<Self> {
        params
            .provider_url
            .as_ref()
            .map(|url| Self::new(url.clone(), params.api_key.clone()))
    }
}

impl RouteProvider for HttpDirectionsProvider {
    async fn optimize_stops(
        &self,
        origin: GeoPoint,
        stops: &[GeoPoint],
    ) -> Result<Vec<usize>, ProviderError> {
        let Some((destination, interior)) = stops.split_last() else {
            return Ok(Vec::new());
        };

        let mut query: Vec<(&str, String)> = vec![
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
        ];
        if !interior.is_empty() {
            let waypoints: Vec<String> = interior.iter().map(|p| p.to_string()).collect();
            query.push(("waypoints", format!("optimize:true|{}", waypoints.join("|"))));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self.client.get(&self.base_url).query(&query).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().to_string()));
        }

        let body: DirectionsResponse = response.json().await?;
        if body.status != "OK" {
            return Err(ProviderError::Status(body.status));
        }

        let route = body
            .routes
            .first()
            .ok_or_else(|| ProviderError::Malformed("response contains no routes".into()))?;
        if route.waypoint_order.len() != interior.len() {
            return Err(ProviderError::Malformed(format!(
                "waypoint_order has {} entries for {} waypoints",
                route.waypoint_order.len(),
                interior.len()
            )));
        }

        let mut order = route.waypoint_order.clone();
        order.push(stops.len() - 1);
        Ok(order)
    }
}
