use crate::SidecarChannel;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("Unknown connection status {value:?} {location}")]
    UnknownStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Malformed {channel} payload: {message} {location}")]
    MalformedPayload {
        channel: SidecarChannel,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize payload: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SidecarError {
    #[track_caller]
    pub fn malformed<S: Into<String>>(channel: SidecarChannel, message: S) -> Self {
        Self::MalformedPayload {
            channel,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SidecarError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SidecarError>;
