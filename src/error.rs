//! Error types for the tidewatch description engine

use thiserror::Error;

/// Main error type for the description engine
#[derive(Error, Debug)]
pub enum TidewatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather API communication errors (network, timeout, non-200)
    #[error("Weather fetch error: {message}")]
    Fetch { message: String },

    /// Malformed weather API payloads
    #[error("Weather parse error: {message}")]
    Parse { message: String },

    /// Lookup of a room id that was never registered
    #[error("Unknown room: {room_id}")]
    UnknownRoom { room_id: String },

    /// The room exists but has no dynamic description
    #[error("Room is not weather-aware: {room_id}")]
    NotWeatherAware { room_id: String },

    /// The room has no window with this key
    #[error("Room {room_id} has no window '{window}'")]
    UnknownWindow { room_id: String, window: String },

    /// Lookup of a location id that is not tracked
    #[error("Unknown weather location: {location_id}")]
    UnknownLocation { location_id: String },
}

impl TidewatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn unknown_room<S: Into<String>>(room_id: S) -> Self {
        Self::UnknownRoom {
            room_id: room_id.into(),
        }
    }

    pub fn not_weather_aware<S: Into<String>>(room_id: S) -> Self {
        Self::NotWeatherAware {
            room_id: room_id.into(),
        }
    }

    pub fn unknown_window<S: Into<String>, W: Into<String>>(room_id: S, window: W) -> Self {
        Self::UnknownWindow {
            room_id: room_id.into(),
            window: window.into(),
        }
    }

    pub fn unknown_location<S: Into<String>>(location_id: S) -> Self {
        Self::UnknownLocation {
            location_id: location_id.into(),
        }
    }

    /// Whether a failed fetch should simply fall back to the last known weather
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Parse { .. })
    }

    /// Get a message suitable for an admin or player facing command
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TidewatchError::Config { .. } => {
                "Configuration error. Please check the tidewatch config file.".to_string()
            }
            TidewatchError::Fetch { .. } | TidewatchError::Parse { .. } => {
                "The weather service is unavailable right now.".to_string()
            }
            TidewatchError::UnknownRoom { room_id } => format!("No room named '{room_id}'."),
            TidewatchError::NotWeatherAware { .. } => {
                "This room is not weather-aware.".to_string()
            }
            TidewatchError::UnknownWindow { window, .. } => {
                format!("There is no window called '{window}' here.")
            }
            TidewatchError::UnknownLocation { location_id } => {
                format!("No weather is tracked for '{location_id}'.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TidewatchError::config("missing timezone");
        assert!(matches!(config_err, TidewatchError::Config { .. }));

        let fetch_err = TidewatchError::fetch("connection refused");
        assert!(matches!(fetch_err, TidewatchError::Fetch { .. }));

        let room_err = TidewatchError::unknown_room("cellar");
        assert!(room_err.to_string().contains("cellar"));
    }

    #[test]
    fn test_transient_errors() {
        assert!(TidewatchError::fetch("timeout").is_transient());
        assert!(TidewatchError::parse("bad json").is_transient());
        assert!(!TidewatchError::config("bad").is_transient());
        assert!(!TidewatchError::not_weather_aware("limbo").is_transient());
    }

    #[test]
    fn test_user_messages() {
        let err = TidewatchError::not_weather_aware("limbo");
        assert_eq!(err.user_message(), "This room is not weather-aware.");

        let err = TidewatchError::fetch("HTTP 500");
        assert!(err.user_message().contains("unavailable"));
        assert!(!err.user_message().contains("500"));
    }
}
