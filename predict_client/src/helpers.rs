use serde::Serialize;
use url::Url;

use crate::PredictionError;

pub(crate) const PREDICT_PATH: &str = "api/predict";

/// Resolve [`PREDICT_PATH`] against `base` the way a browser resolves a
/// relative `fetch` target: `http://host/app/` yields
/// `http://host/app/api/predict`, while `http://host/app` yields
/// `http://host/api/predict`.
pub(crate) fn resolve_endpoint(base: &str) -> Result<Url, PredictionError> {
    let base = Url::parse(base).map_err(|err| PredictionError::InvalidUrl(err.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(PredictionError::InvalidUrl(format!(
            "{base} cannot be used as a base"
        )));
    }

    base.join(PREDICT_PATH)
        .map_err(|err| PredictionError::InvalidUrl(err.to_string()))
}

pub(crate) fn encode_payload<P>(values: &P) -> Result<Vec<u8>, PredictionError>
where
    P: Serialize + ?Sized,
{
    serde_json::to_vec(values).map_err(|err| PredictionError::Serialization(err.to_string()))
}
