pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! This module contains the fixed configuration of the client,
    //! organized by functional area.

    // =============================================================================
    // BACKEND
    // =============================================================================

    /// Base URL of the parking backend, including the `/api` prefix.
    pub const API_BASE_URL: &str = "http://localhost:5000/api";

    // =============================================================================
    // SESSION STORAGE
    // =============================================================================

    /// Directory under the user's home that holds persisted client state.
    pub const SESSION_DIR: &str = ".parkctl";

    /// File name of the persisted key-value session store.
    pub const SESSION_FILE: &str = "session.json";

    /// Storage key of the raw access token.
    pub const TOKEN_KEY: &str = "token";

    /// Storage key of the JSON-encoded current user.
    pub const USER_KEY: &str = "user";

    // =============================================================================
    // DASHBOARD UI
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the presenter-to-UI event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of the UI-to-controller intent queue.
    pub const INTENT_QUEUE_SIZE: usize = 16;

    /// How often the dashboard polls for key presses (milliseconds).
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}
