/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_DURATION_MS: u64 = 3000;

/// Simulated round-trip latency of the mock backend.
pub const MOCK_LATENCY_MS: u64 = 300;

/// Simulated latency of the slower location-update endpoint.
pub const MOCK_LOCATION_LATENCY_MS: u64 = 1000;

/// Default search radius shown in the UI, in kilometres (as user text).
pub const DEFAULT_SEARCH_RADIUS: &str = "2";

/// Location preset for a fresh profile.
pub const DEFAULT_LOCATION: &str = "Bengaluru, Karnataka";

/// Availability text synthesized for the user's own public listings.
pub const SELF_AVAILABILITY_TEXT: &str = "Anytime";

/// Owner name synthesized for the user's own public listings.
pub const SELF_OWNER_NAME: &str = "You";

/// Owner rating synthesized for the user's own public listings.
pub const SELF_OWNER_RATING: f64 = 5.0;
