//! One-shot status report

use crate::api::{PlantApi, PlantApiClient};
use crate::config::Settings;
use crate::print_cmd_error;
use crate::view_state::{ApplyOutcome, ClientViewState, PollUpdate, ViewStatus};
use std::error::Error;

/// Fetch the plant once and print the report, or fail with the displayed error.
pub async fn run_status(settings: Settings) -> Result<(), Box<dyn Error>> {
    let client = PlantApiClient::new(settings.environment.clone())?;
    match status_report(&client, &settings.plant_id).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(message) => {
            print_cmd_error!("Failed to fetch plant status", &message);
            Err(message.into())
        }
    }
}

/// Runs a single fetch (and image probe) through a fresh view state.
pub async fn status_report(api: &dyn PlantApi, plant_id: &str) -> Result<Vec<String>, String> {
    let mut state = ClientViewState::new();
    state.apply(PollUpdate::Started { seq: 1 });
    let result = api.fetch_plant_status(plant_id).await;
    let outcome = state.apply(PollUpdate::Completed { seq: 1, result });

    if state.status() == ViewStatus::Error {
        return Err(state.error_message().unwrap_or_default().to_string());
    }

    if let ApplyOutcome::Applied {
        probe_image: Some(url),
    } = outcome
    {
        let result = api.probe_image(&url).await;
        state.apply(PollUpdate::ImageProbed { url, result });
    }

    Ok(state.report_lines(plant_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPlantApi;
    use crate::api::error::{FetchError, ImageLoadError};
    use crate::plant::{Metrics, PlantStatus};

    #[tokio::test]
    async fn test_report_for_unhealthy_plant_without_image() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status()
            .withf(|plant_id| plant_id == "plant_001")
            .times(1)
            .returning(|_| {
                Ok(PlantStatus {
                    metrics: Some(Metrics {
                        ai_evaluation: Some("Unhealthy - leaf spots detected".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
            });
        mock.expect_probe_image().times(0);

        let lines = status_report(&mock, "plant_001").await.unwrap();

        assert!(lines.contains(&"⚠️ Unhealthy - leaf spots detected [status-unhealthy]".to_string()));
        assert!(lines.contains(&"Soil Moisture: not available".to_string()));
        assert!(lines.contains(&"Rain Sensor: not available".to_string()));
        assert!(lines.contains(&"Light Level: not available".to_string()));
        assert!(lines.contains(&"No image available".to_string()));
    }

    #[tokio::test]
    async fn test_report_probes_image_once() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status().times(1).returning(|_| {
            Ok(PlantStatus {
                image_url: Some("https://img.example.com/p.jpg".to_string()),
                ..Default::default()
            })
        });
        mock.expect_probe_image()
            .withf(|url| url == "https://img.example.com/p.jpg")
            .times(1)
            .returning(|_| Err(ImageLoadError::Status(403)));

        let lines = status_report(&mock, "plant_001").await.unwrap();
        assert!(lines.contains(&"Image not available (placeholder-plant.png)".to_string()));
    }

    #[tokio::test]
    async fn test_report_surfaces_server_error() {
        let mut mock = MockPlantApi::new();
        mock.expect_fetch_plant_status().times(1).returning(|_| {
            Err(FetchError::from_status_and_body(
                500,
                r#"{"error":"sensor offline"}"#.to_string(),
            ))
        });

        let error = status_report(&mock, "plant_001").await.unwrap_err();
        assert_eq!(error, "sensor offline");
    }
}
