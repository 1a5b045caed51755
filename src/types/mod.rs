//! Types for the Published-Data API.
//!
//! This module contains the types used by the [`Client`](crate::Client),
//! organized into:
//!
//! - **Common types**: Enums shared across endpoints, such as [`Title`].
//!
//! - **Request types**: Builder-pattern structs carrying the identifiers for
//!   each endpoint (e.g., [`request::PlayerRequest`],
//!   [`request::MonthlyArchivesRequest`]). A single request struct addresses
//!   every sibling endpoint that takes the same identifiers.
//!
//! # Request building
//!
//! All request types use the builder pattern via the
//! [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use chesscom_client_sdk::types::request::{PlayerRequest, TournamentRoundRequest};
//!
//! let player = PlayerRequest::builder().username("fabianocaruana").build();
//!
//! let round = TournamentRoundRequest::builder()
//!     .url_id("-33rd-chesscom-quick-knockouts-1401-1600")
//!     .round(1)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;

/// Abbreviation of a chess title recognized by Chess.com.
///
/// The remote API addresses titled-player lists by these abbreviations
/// (`/titled/GM`, `/titled/WIM`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum Title {
    GM,
    WGM,
    IM,
    WIM,
    FM,
    WFM,
    NM,
    WNM,
    CM,
    WCM,
}
