//! Async client for the song prediction backend.
//! Consumers should import exported types via the crate root.
//!
//! # Example
//!
//! ```no_run
//! use predict_client::{PredictionClient, SongFeatures};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), predict_client::PredictionError> {
//!     let client = PredictionClient::with_client(
//!         reqwest::Client::new(),
//!         Some("http://localhost:8000/".to_string()),
//!     )?;
//!
//!     let features = SongFeatures {
//!         danceability: 0.8,
//!         energy: 0.7,
//!         acousticness: 0.1,
//!         instrumentalness: 0.0,
//!         valence: 0.6,
//!         tempo: 120.0,
//!     };
//!
//!     match client.predict_score(&features).await {
//!         Some(score) => println!("score: {score:.3}"),
//!         None => println!("prediction unavailable"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod dto;
pub(crate) mod helpers;
pub mod handler;
pub mod implementation {
    include!("impl.rs");
}

pub use dto::*;
pub use handler::{call_api, run_prediction_handler};
pub use implementation::PredictionClient;
