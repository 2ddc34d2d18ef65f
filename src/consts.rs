pub mod cli_consts {
    //! Portal Client Configuration Constants
    //!
    //! This module contains all configuration constants for the portal
    //! client, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Maximum number of event buffer size for worker tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DASHBOARD TIMING
    // =============================================================================

    /// Quote notice scheduling windows
    pub mod quote_notice {
        use std::time::Duration;

        /// Delay between dashboard mount and the initial quote reveal (milliseconds)
        pub const REVEAL_DELAY_MS: u64 = 1_500;

        /// Window a revealed quote stays on screen before auto-hiding (milliseconds)
        pub const AUTO_HIDE_MS: u64 = 8_000;

        /// Helper function to get the reveal delay
        pub const fn reveal_delay() -> Duration {
            Duration::from_millis(REVEAL_DELAY_MS)
        }

        /// Helper function to get the auto-hide window
        pub const fn auto_hide() -> Duration {
            Duration::from_millis(AUTO_HIDE_MS)
        }
    }

    /// Theme transition configuration
    pub mod theme {
        use std::time::Duration;

        /// Window the toggle icon shows its transition marker (milliseconds)
        pub const TRANSITION_MS: u64 = 300;

        /// Helper function to get the transition window
        pub const fn transition_window() -> Duration {
            Duration::from_millis(TRANSITION_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Profile fetch backoff configuration
    pub mod profile_fetch {
        use std::time::Duration;

        /// Initial delay before retrying a failed profile fetch (milliseconds)
        pub const INITIAL_BACKOFF_MS: u64 = 1_000;

        /// Maximum number of retry attempts for the profile fetch
        pub const MAX_RETRIES: u32 = 3;

        /// Helper function to get initial backoff duration
        pub const fn initial_backoff() -> Duration {
            Duration::from_millis(INITIAL_BACKOFF_MS)
        }
    }
}
