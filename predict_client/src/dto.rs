use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audio features of a single track, as accepted by the prediction backend.
///
/// * `danceability`, `energy`, `acousticness`, `instrumentalness` and
///   `valence` are normalized to `[0.0, 1.0]` upstream.
/// * `tempo` is expressed in beats per minute.
///
/// Serialized with the field names unchanged, for example:
///
/// ```json
/// { "danceability": 0.8, "energy": 0.7, "acousticness": 0.1,
///   "instrumentalness": 0.0, "valence": 0.6, "tempo": 120.0 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SongFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub valence: f64,
    pub tempo: f64,
}

/// Reply returned by `POST api/predict` for a [`SongFeatures`] payload.
///
/// `score` is clamped to `[0.0, 1.0]` by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub score: f64,
}

#[derive(Debug, Error)]
/// Errors surfaced by [`crate::PredictionClient::try_call_api`].
///
/// [`crate::PredictionClient::call_api`] logs these and returns `None`.
pub enum PredictionError {
    #[error("network call failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("failed to (de)serialize payload: {0}")]
    Serialization(String),
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}
