//! Error types for key and door placement

use thiserror::Error;

use super::KeyColor;

/// Why a single placement attempt was discarded.
///
/// These are expected outcomes of randomized placement; the retry loop logs
/// them and tries again with fresh randomness.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptFailure {
    #[error("not enough corridors away from the start room to hang every door")]
    NoDoorCorridor,

    #[error("no room can hold the {0} key without it sitting behind its own door")]
    NoKeyRoom(KeyColor),

    #[error("the exit cannot be reached under any key pickup order")]
    Softlock,
}

/// Errors returned by the retry coordinator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no valid key/door placement found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("room index {index} is out of range for a level with {rooms} rooms")]
    InvalidRoomIndex { index: usize, rooms: usize },
}

/// A color name outside the key palette
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key color '{0}'")]
pub struct ParseColorError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlacementError::Exhausted { attempts: 15 };
        assert!(err.to_string().contains("15 attempts"));

        let failure = AttemptFailure::NoKeyRoom(KeyColor::Green);
        assert!(failure.to_string().contains("green key"));

        let parse = ParseColorError("teal".to_string());
        assert_eq!(parse.to_string(), "unknown key color 'teal'");
    }
}
