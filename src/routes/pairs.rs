//! Handler for the pair-finding endpoint.
//!
//! The body is decoded as JSON whatever the request's Content-Type. Anything
//! that does not decode to a `{"numbers": [...], "target": ...}` object is
//! rejected before the finder runs.

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::AppError;
use crate::finder::{find_pairs, Pair};
use crate::state::AppState;

/// Request body for `POST /find-pairs`
#[derive(Debug, Deserialize)]
pub struct FindPairsRequest {
    pub numbers: Vec<i64>,
    pub target: i64,
}

/// Response body for `POST /find-pairs`
#[derive(Debug, Serialize)]
pub struct FindPairsResponse {
    pub solutions: Vec<Pair>,
}

/// Decode a request body, accepting only a JSON object.
fn decode_request(body: &[u8]) -> Result<FindPairsRequest, AppError> {
    // serde would otherwise accept a positional array for the struct.
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Handler for `POST /find-pairs`
#[instrument(name = "pairs::find", skip_all)]
pub async fn find(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<FindPairsResponse>, AppError> {
    let request = decode_request(&body?)?;

    if let Some(max) = state.config.limits.max_numbers {
        if request.numbers.len() > max {
            return Err(AppError::InvalidInput(format!(
                "{} numbers exceeds limit of {}",
                request.numbers.len(),
                max
            )));
        }
    }

    let solutions = find_pairs(&request.numbers, request.target);

    tracing::debug!(
        numbers = request.numbers.len(),
        target = request.target,
        pairs = solutions.len(),
        "Found pairs"
    );

    Ok(Json(FindPairsResponse { solutions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_request() {
        let request = decode_request(br#"{"numbers": [1, -2, 3], "target": 0}"#).unwrap();
        assert_eq!(request.numbers, vec![1, -2, 3]);
        assert_eq!(request.target, 0);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let request = decode_request(br#"{"numbers": [], "target": 6, "extra": true}"#).unwrap();
        assert!(request.numbers.is_empty());
    }

    #[test]
    fn test_decode_rejects_positional_array() {
        assert!(decode_request(b"[[1, 2], 3]").is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let bodies: [&[u8]; 6] = [
            br#"{"numbers": "invalid", "target": 6}"#,
            br#"{"numbers": [1, 2], "target": "6"}"#,
            br#"{"numbers": [1.5, 2], "target": 6}"#,
            br#"{"numbers": [1, 2], "target": null}"#,
            br#"{"numbers": null, "target": 6}"#,
            br#"{"numbers": [99999999999999999999], "target": 6}"#,
        ];
        for body in bodies {
            assert!(
                matches!(decode_request(body), Err(AppError::InvalidInput(_))),
                "accepted {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_decode_rejects_missing_fields_and_garbage() {
        assert!(decode_request(br#"{"target": 6}"#).is_err());
        assert!(decode_request(br#"{"numbers": [1]}"#).is_err());
        assert!(decode_request(b"").is_err());
        assert!(decode_request(b"not json").is_err());
    }
}
