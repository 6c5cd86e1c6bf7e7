pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed timing, queue and display constants
    //! for the plant monitor, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events and poll updates between the poller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // PLANT DEFAULTS
    // =============================================================================

    /// Plant monitored when nothing else is configured
    pub const DEFAULT_PLANT_ID: &str = "plant_001";

    /// Environment variable overriding the API endpoint
    pub const API_ENDPOINT_ENV: &str = "GARDENICE_API_ENDPOINT";

    /// Environment variable overriding the plant ID
    pub const PLANT_ID_ENV: &str = "GARDENICE_PLANT_ID";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Plant status polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between scheduled fetches (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 30_000;

        /// Per-request timeout, covering connect and body (milliseconds)
        pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

        /// Helper function to get the polling interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        }
    }

    // =============================================================================
    // DISPLAY TEXT
    // =============================================================================

    /// Fixed strings shown by every rendering mode
    pub mod display {
        /// Shown when a fetch fails without a server-provided error field
        pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch plant data";

        /// Shown in place of a missing sensor reading
        pub const NOT_AVAILABLE: &str = "not available";

        /// Shown when the payload carries no image URL
        pub const NO_IMAGE: &str = "No image available";

        /// Local asset used when the remote image cannot be loaded
        pub const PLACEHOLDER_IMAGE: &str = "placeholder-plant.png";

        /// Alt text paired with the placeholder asset
        pub const PLACEHOLDER_ALT: &str = "Image not available";

        /// Shown under the readings when no sensor value arrived at all
        pub const SENSOR_PLACEHOLDER: &str =
            "Sensor data will appear here once your IoT device starts sending readings.";

        /// Follows the sensor placeholder
        pub const EXPECTED_METRICS: &str =
            "Expected metrics: Soil Moisture, Rain Sensor, Light Level";

        /// Subtitle under the health headline
        pub const ASSESSMENT_SUBTITLE: &str = "Based on latest image analysis";
    }
}
