//! Client view state
//!
//! Owned by exactly one task (the UI loop or the headless loop) and mutated only
//! through [`ClientViewState::apply`]. Results carry the sequence number of the
//! request that produced them; a result older than the newest applied one is
//! discarded, so the last request sent wins even when responses arrive out of order.

use crate::api::error::{FetchError, ImageLoadError};
use crate::consts::cli_consts::display::{NO_IMAGE, PLACEHOLDER_ALT, PLACEHOLDER_IMAGE};
use crate::plant::PlantStatus;
use crate::plant::display::{captured_text, evaluation_headline, sensor_hint, sensor_rows};
use chrono::{DateTime, Local};

/// Which of the three mutually exclusive views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// No data has ever been fetched and nothing failed yet.
    Loading,
    /// The latest applied request failed.
    Error,
    /// Data is available and the latest applied request succeeded.
    Ready,
}

/// Display state of the captured image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    /// The payload carries no image URL.
    Missing,
    /// The image is being loaded.
    Loading { url: String },
    Loaded { url: String },
    /// Loading failed; the placeholder asset is shown instead.
    Placeholder { url: String },
}

impl ImageState {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Missing => None,
            ImageState::Loading { url }
            | ImageState::Loaded { url }
            | ImageState::Placeholder { url } => Some(url),
        }
    }

    /// One-line description for the image block.
    pub fn describe(&self) -> String {
        match self {
            ImageState::Missing => NO_IMAGE.to_string(),
            ImageState::Loading { url } => format!("Loading image... {}", url),
            ImageState::Loaded { url } => format!("Image: {}", url),
            ImageState::Placeholder { .. } => {
                format!("{} ({})", PLACEHOLDER_ALT, PLACEHOLDER_IMAGE)
            }
        }
    }
}

/// Update delivered by the poller to the state owner.
#[derive(Debug)]
pub enum PollUpdate {
    /// Request `seq` was sent.
    Started { seq: u64 },
    /// Request `seq` resolved.
    Completed {
        seq: u64,
        result: Result<PlantStatus, FetchError>,
    },
    /// The image at `url` finished loading, or failed to.
    ImageProbed {
        url: String,
        result: Result<(), ImageLoadError>,
    },
}

/// What [`ClientViewState::apply`] did with an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The update changed the state. Carries an image URL that needs loading.
    Applied { probe_image: Option<String> },
    /// The update was superseded and ignored.
    Discarded,
}

#[derive(Debug, Default)]
pub struct ClientViewState {
    data: Option<PlantStatus>,
    error_message: Option<String>,
    last_updated_at: Option<DateTime<Local>>,
    image: Option<ImageState>,
    in_flight: usize,
    latest_applied_seq: Option<u64>,
}

impl ClientViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ViewStatus {
        if self.error_message.is_some() {
            ViewStatus::Error
        } else if self.data.is_some() {
            ViewStatus::Ready
        } else {
            ViewStatus::Loading
        }
    }

    /// Last successfully fetched status, kept across failed fetches.
    pub fn data(&self) -> Option<&PlantStatus> {
        self.data.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Local>> {
        self.last_updated_at
    }

    pub fn image(&self) -> &ImageState {
        self.image.as_ref().unwrap_or(&ImageState::Missing)
    }

    /// Whether a request is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight > 0
    }

    /// Whether the retry/refresh key is enabled: always in the error view,
    /// and in the ready view while no request is outstanding.
    pub fn can_refresh(&self) -> bool {
        match self.status() {
            ViewStatus::Error => true,
            ViewStatus::Ready => !self.is_refreshing(),
            ViewStatus::Loading => false,
        }
    }

    pub fn apply(&mut self, update: PollUpdate) -> ApplyOutcome {
        match update {
            PollUpdate::Started { .. } => {
                self.in_flight += 1;
                // A new attempt hides the previous error until it resolves
                self.error_message = None;
                ApplyOutcome::Applied { probe_image: None }
            }
            PollUpdate::Completed { seq, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.latest_applied_seq.is_some_and(|latest| seq <= latest) {
                    return ApplyOutcome::Discarded;
                }
                self.latest_applied_seq = Some(seq);
                match result {
                    Ok(status) => self.apply_success(status),
                    Err(error) => {
                        self.error_message = Some(error.display_message());
                        ApplyOutcome::Applied { probe_image: None }
                    }
                }
            }
            PollUpdate::ImageProbed { url, result } => self.apply_image_result(url, result),
        }
    }

    fn apply_success(&mut self, status: PlantStatus) -> ApplyOutcome {
        let new_url = status.image_url().map(str::to_string);
        self.data = Some(status);
        self.error_message = None;
        self.last_updated_at = Some(Local::now());

        // Same URL as before: keep the loaded or placeholder state as is
        if new_url.as_deref() == self.image().url() {
            return ApplyOutcome::Applied { probe_image: None };
        }
        match new_url {
            Some(url) => {
                self.image = Some(ImageState::Loading { url: url.clone() });
                ApplyOutcome::Applied {
                    probe_image: Some(url),
                }
            }
            None => {
                self.image = Some(ImageState::Missing);
                ApplyOutcome::Applied { probe_image: None }
            }
        }
    }

    fn apply_image_result(
        &mut self,
        url: String,
        result: Result<(), ImageLoadError>,
    ) -> ApplyOutcome {
        match &self.image {
            Some(ImageState::Loading { url: pending }) if *pending == url => {
                self.image = Some(match result {
                    Ok(()) => ImageState::Loaded { url },
                    Err(_) => ImageState::Placeholder { url },
                });
                ApplyOutcome::Applied { probe_image: None }
            }
            _ => ApplyOutcome::Discarded,
        }
    }

    /// Plain-text report of the current view, used outside the TUI.
    pub fn report_lines(&self, plant_id: &str) -> Vec<String> {
        match self.status() {
            ViewStatus::Loading => vec!["Loading plant data...".to_string()],
            ViewStatus::Error => vec![format!(
                "Error: {}",
                self.error_message.as_deref().unwrap_or_default()
            )],
            ViewStatus::Ready => {
                let Some(data) = self.data.as_ref() else {
                    return Vec::new();
                };
                let health = data.health();
                let mut lines = vec![format!("Plant Monitor - {}", plant_id)];
                if let Some(updated) = self.last_updated_at {
                    lines.push(format!("Last updated: {}", updated.format("%H:%M:%S")));
                }
                lines.push(format!(
                    "{} {} [{}]",
                    health.icon(),
                    evaluation_headline(data),
                    health.style_tag()
                ));
                let metrics = data.metrics.as_ref();
                for (_, label, value) in sensor_rows(metrics) {
                    lines.push(format!("{}: {}", label, value));
                }
                if let Some(hint) = sensor_hint(metrics) {
                    lines.extend(hint.iter().map(|text| text.to_string()));
                }
                lines.push(self.image().describe());
                lines.push(captured_text(data.timestamp.as_ref()));
                lines
            }
        }
    }
}
