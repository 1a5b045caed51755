#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{Datelike as _, NaiveDate};
use serde::Serialize;

use crate::Result;
use crate::error::Error;
use crate::types::Title;

/// Identifies a player; addresses every `player/{username}/...` endpoint.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub username: String,
}

/// Identifies one monthly game archive of a player.
///
/// The remote API addresses archives as `games/{YYYY}/{MM}`; `month` is
/// zero-padded on the wire.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MonthlyArchivesRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub username: String,
    #[serde(skip_serializing)]
    pub year: i32,
    #[serde(skip_serializing)]
    pub month: u32,
}

impl MonthlyArchivesRequest {
    /// Builds a request for the archive containing `date`.
    pub fn from_date<S: Into<String>>(username: S, date: NaiveDate) -> Self {
        Self {
            username: username.into(),
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(1000..=9999).contains(&self.year) {
            return Err(Error::validation(
                "parameter `year` must be a four digit year",
            ));
        }
        if !(1..=12).contains(&self.month) {
            return Err(Error::validation(
                "parameter `month` must be between 1 and 12",
            ));
        }
        Ok(())
    }

    pub(crate) fn year_segment(&self) -> String {
        self.year.to_string()
    }

    pub(crate) fn month_segment(&self) -> String {
        format!("{:02}", self.month)
    }
}

/// Identifies a titled-player list by title abbreviation.
#[derive(Debug, Clone, Copy, Builder, Serialize)]
#[non_exhaustive]
pub struct TitledRequest {
    #[serde(skip_serializing)]
    pub title: Title,
}

/// Identifies a club by the URL id from its web page
/// (`https://www.chess.com/club/{url_id}`).
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ClubRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub url_id: String,
}

/// Identifies a daily, live, or arena tournament by its URL id.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TournamentRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub url_id: String,
}

/// Identifies one round of a tournament.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TournamentRoundRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub url_id: String,
    #[serde(skip_serializing)]
    pub round: u32,
}

/// Identifies one group within a tournament round.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TournamentRoundGroupRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub url_id: String,
    #[serde(skip_serializing)]
    pub round: u32,
    #[serde(skip_serializing)]
    pub group: u32,
}

/// Identifies a team match; addresses both the daily and live variants.
#[derive(Debug, Clone, Copy, Builder, Serialize)]
#[non_exhaustive]
pub struct TeamMatchRequest {
    #[serde(skip_serializing)]
    pub id: u64,
}

/// Identifies one board of a team match.
#[derive(Debug, Clone, Copy, Builder, Serialize)]
#[non_exhaustive]
pub struct TeamMatchBoardRequest {
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(skip_serializing)]
    pub board: u32,
}

/// Identifies a country by ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CountryRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub iso: String,
}

impl CountryRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.iso.len() != 2 || !self.iso.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::validation(
                "parameter `iso` must be a two letter country code",
            ));
        }
        Ok(())
    }
}
