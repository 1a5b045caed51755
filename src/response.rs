//! Immutable wrapper over a parsed API response.

use std::ops::Index;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::error::Error;
use crate::transport::RawResponse;

/// A successful API response: the original status code plus the decoded JSON
/// body.
///
/// The body is an owned [`Value`] tree (object / array / string / number /
/// bool / null) and the wrapper is read-only after construction. Two
/// equivalent read paths borrow from the same tree:
///
/// ```
/// use chesscom_client_sdk::response::ApiResponse;
/// use chesscom_client_sdk::transport::RawResponse;
/// use reqwest::StatusCode;
///
/// let raw = RawResponse::new(StatusCode::OK, r#"{"player":{"name":"Fabiano Caruana"}}"#);
/// let resp = ApiResponse::from_raw("/player/fabianocaruana", raw).unwrap();
///
/// assert_eq!(resp["player"]["name"], "Fabiano Caruana");
/// assert_eq!(*resp.path("player.name").unwrap(), "Fabiano Caruana");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// Interprets one raw HTTP round trip.
    ///
    /// `path` is the request path, carried into errors for context.
    ///
    /// # Errors
    ///
    /// * [`Kind::Status`](crate::error::Kind::Status) when the status is not
    ///   2xx, with the `message` field of the error body when present.
    /// * [`Kind::Parse`](crate::error::Kind::Parse) when the status is 2xx but
    ///   the body is not valid JSON.
    pub fn from_raw(path: &str, raw: RawResponse) -> Result<Self> {
        if !raw.status.is_success() {
            let message = error_message(&raw.body);

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %raw.status,
                path = %path,
                message = %message,
                "API request failed"
            );

            return Err(Error::status(raw.status, path.to_owned(), message));
        }

        let body = serde_json::from_str(&raw.body).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path, error = %e, "undecodable response body");
            Error::parse(path.to_owned(), e)
        })?;

        Ok(Self {
            status: raw.status,
            body,
        })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The decoded body.
    #[must_use]
    pub fn json(&self) -> &Value {
        &self.body
    }

    /// Consumes the wrapper and returns the owned body.
    #[must_use]
    pub fn into_json(self) -> Value {
        self.body
    }

    /// Traverses the body along a dotted path.
    ///
    /// Each step is an object key; numeric steps index into arrays
    /// (`"games.0.url"`). Returns `None` as soon as a step does not resolve.
    #[must_use]
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.body, |node, step| match node {
            Value::Array(items) => items.get(step.parse::<usize>().ok()?),
            _ => node.get(step),
        })
    }

    /// Deserializes the body into a caller-supplied type.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Parse`](crate::error::Kind::Parse) error when the
    /// body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

/// Key lookup, chaining into the body like [`Value`] indexing.
///
/// Missing keys yield [`Value::Null`] rather than panicking.
impl Index<&str> for ApiResponse {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.body[key]
    }
}

/// Array indexing for top-level array bodies.
impl Index<usize> for ApiResponse {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.body[index]
    }
}

/// The API reports failures as `{"code": .., "message": ..}`. Fall back to
/// the raw body text when that shape is absent.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| body.to_owned(), str::to_owned)
}
