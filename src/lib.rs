#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

use serde::Serialize;

pub use crate::client::{Client, Config};
use crate::error::Error;
pub use crate::response::ApiResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement
/// [`Serialize`]. It uses [`serde_html_form`] to serialize the struct fields
/// into a query string; fields marked `#[serde(skip_serializing)]` (the path
/// parameters of a request) and absent optional fields are omitted.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL-encoded query string, empty when no
    /// parameters are set.
    fn query_params(&self) -> String {
        serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default()
    }
}

impl<T: Serialize> ToQueryParams for T {}
