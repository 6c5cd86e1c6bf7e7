//! Plant Status API Client
//!
//! A reqwest client for `GET {endpoint}/{plant_id}` and for loading captured images.

use crate::api::PlantApi;
use crate::api::error::{FetchError, ImageLoadError};
use crate::consts::cli_consts::polling::request_timeout;
use crate::environment::Environment;
use crate::network::image_probe;
use crate::plant::PlantStatus;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("gardenice-monitor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PlantApiClient {
    client: Client,
    environment: Environment,
}

impl PlantApiClient {
    pub fn new(environment: Environment) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(request_timeout())
            .timeout(request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, plant_id: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_endpoint().trim_end_matches('/'),
            urlencoding::encode(plant_id)
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl PlantApi for PlantApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_plant_status(&self, plant_id: &str) -> Result<PlantStatus, FetchError> {
        let url = self.build_url(plant_id);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn probe_image(&self, url: &str) -> Result<(), ImageLoadError> {
        image_probe::probe(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlantApiClient {
        let environment = format!("{}/dev/plant", server.uri()).parse().unwrap();
        PlantApiClient::new(environment).unwrap()
    }

    #[test]
    fn test_build_url_encodes_plant_id() {
        let client = PlantApiClient::new(Environment::Custom {
            api_endpoint: "http://localhost:3000/plant/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.build_url("plant 001"),
            "http://localhost:3000/plant/plant%20001"
        );
    }

    #[tokio::test]
    async fn test_fetch_plant_status_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dev/plant/plant_001"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "plant_id": "plant_001",
                "metrics": {"ai_evaluation": "Plant is healthy", "soil_moisture": 42, "rain": false, "light": 300},
                "image_url": "https://x/a.jpg",
                "timestamp": 1700000000
            })))
            .mount(&server)
            .await;

        let status = client_for(&server)
            .fetch_plant_status("plant_001")
            .await
            .unwrap();

        assert_eq!(status.ai_evaluation(), Some("Plant is healthy"));
        assert_eq!(status.image_url(), Some("https://x/a.jpg"));
    }

    #[tokio::test]
    async fn test_fetch_plant_status_server_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dev/plant/plant_001"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "sensor offline"})),
            )
            .mount(&server)
            .await;

        let error = client_for(&server)
            .fetch_plant_status("plant_001")
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(500));
        assert_eq!(error.display_message(), "sensor offline");
    }

    #[tokio::test]
    async fn test_fetch_plant_status_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .fetch_plant_status("plant_001")
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::Decode(_)));
        assert_eq!(error.display_message(), "Failed to fetch plant data");
    }

    #[tokio::test]
    async fn test_fetch_plant_status_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"metrics": {}}))
                    .set_delay(request_timeout() + Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let error = client_for(&server)
            .fetch_plant_status("plant_001")
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::Timeout(_)));
        assert_eq!(error.display_message(), "Failed to fetch plant data");
    }

    #[tokio::test]
    async fn test_fetch_plant_status_connection_refused() {
        // Nothing listens on port 9 locally
        let client = PlantApiClient::new(Environment::Custom {
            api_endpoint: "http://127.0.0.1:9/plant".to_string(),
        })
        .unwrap();

        let error = client.fetch_plant_status("plant_001").await.unwrap_err();

        assert!(matches!(error, FetchError::Network(_)));
    }
}
