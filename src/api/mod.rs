use crate::api::error::{FetchError, ImageLoadError};
use crate::environment::Environment;
use crate::plant::PlantStatus;

pub(crate) mod client;
pub use client::PlantApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PlantApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the latest status of a plant.
    async fn fetch_plant_status(&self, plant_id: &str) -> Result<PlantStatus, FetchError>;

    /// Check that the captured image behind `url` can be loaded.
    async fn probe_image(&self, url: &str) -> Result<(), ImageLoadError>;
}
