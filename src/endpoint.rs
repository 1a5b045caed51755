//! Endpoint descriptors for the Published-Data API.
//!
//! An [`Endpoint`] is the static description of one remote operation: a URL
//! template whose `{placeholder}` segments name the required path parameters
//! in order. Composing a URL from a descriptor is pure string work and happens
//! before any network call, so malformed input fails without touching the
//! wire.

use url::Url;

use crate::Result;
use crate::error::Error;

/// URL template plus the ordered path parameters it requires.
///
/// Templates are relative to the API host and use `{name}` segments for
/// required parameters:
///
/// ```
/// use chesscom_client_sdk::endpoint::Endpoint;
/// use url::Url;
///
/// let endpoint = Endpoint::new("player/{username}/stats");
/// let host = Url::parse("https://api.chess.com/pub").unwrap();
/// let url = endpoint.url(&host, &[("username", "fabianocaruana")], "").unwrap();
/// assert_eq!(url.as_str(), "https://api.chess.com/pub/player/fabianocaruana/stats");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    template: &'static str,
}

impl Endpoint {
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The path parameters this endpoint requires, in template order.
    pub fn params(&self) -> impl Iterator<Item = &'static str> {
        self.template.split('/').filter_map(placeholder)
    }

    /// Composes the full request URL from `host`, the supplied path
    /// parameters, and an already-encoded query string (empty for none).
    ///
    /// Every substituted value is percent-encoded as a path segment, so
    /// identifiers containing reserved characters stay intact on the wire.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Validation`](crate::error::Kind::Validation) error
    /// naming the parameter when a template placeholder is missing from
    /// `values` or its value is empty.
    pub fn url(&self, host: &Url, values: &[(&str, &str)], query: &str) -> Result<Url> {
        let mut url = host.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::validation("host cannot be a base URL"))?;
            segments.pop_if_empty();

            for segment in self.template.split('/') {
                match placeholder(segment) {
                    Some(name) => {
                        let value = values
                            .iter()
                            .find(|(n, _)| *n == name)
                            .map(|(_, v)| *v)
                            .ok_or_else(|| {
                                Error::validation(format!("missing required parameter `{name}`"))
                            })?;
                        if value.is_empty() {
                            return Err(Error::validation(format!(
                                "parameter `{name}` must not be empty"
                            )));
                        }
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !query.is_empty() {
            url.set_query(Some(query));
        }

        Ok(url)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

pub const PLAYER_PROFILE: Endpoint = Endpoint::new("player/{username}");
pub const PLAYER_STATS: Endpoint = Endpoint::new("player/{username}/stats");
pub const PLAYER_IS_ONLINE: Endpoint = Endpoint::new("player/{username}/is-online");
pub const PLAYER_CURRENT_GAMES: Endpoint = Endpoint::new("player/{username}/games");
pub const PLAYER_GAMES_TO_MOVE: Endpoint = Endpoint::new("player/{username}/games/to-move");
pub const PLAYER_GAME_ARCHIVES: Endpoint = Endpoint::new("player/{username}/games/archives");
pub const PLAYER_GAMES_BY_MONTH: Endpoint = Endpoint::new("player/{username}/games/{year}/{month}");
pub const PLAYER_GAMES_BY_MONTH_PGN: Endpoint =
    Endpoint::new("player/{username}/games/{year}/{month}/pgn");
pub const PLAYER_CLUBS: Endpoint = Endpoint::new("player/{username}/clubs");
pub const PLAYER_TEAM_MATCHES: Endpoint = Endpoint::new("player/{username}/matches");
pub const PLAYER_TOURNAMENTS: Endpoint = Endpoint::new("player/{username}/tournaments");
pub const TITLED_PLAYERS: Endpoint = Endpoint::new("titled/{title}");
pub const CLUB_DETAILS: Endpoint = Endpoint::new("club/{url_id}");
pub const CLUB_MEMBERS: Endpoint = Endpoint::new("club/{url_id}/members");
pub const CLUB_MATCHES: Endpoint = Endpoint::new("club/{url_id}/matches");
pub const TOURNAMENT_DETAILS: Endpoint = Endpoint::new("tournament/{url_id}");
pub const TOURNAMENT_ROUND: Endpoint = Endpoint::new("tournament/{url_id}/{round}");
pub const TOURNAMENT_ROUND_GROUP: Endpoint = Endpoint::new("tournament/{url_id}/{round}/{group}");
pub const TEAM_MATCH: Endpoint = Endpoint::new("match/{id}");
pub const TEAM_MATCH_BOARD: Endpoint = Endpoint::new("match/{id}/{board}");
pub const TEAM_MATCH_LIVE: Endpoint = Endpoint::new("match/live/{id}");
pub const TEAM_MATCH_LIVE_BOARD: Endpoint = Endpoint::new("match/live/{id}/{board}");
pub const COUNTRY_DETAILS: Endpoint = Endpoint::new("country/{iso}");
pub const COUNTRY_PLAYERS: Endpoint = Endpoint::new("country/{iso}/players");
pub const COUNTRY_CLUBS: Endpoint = Endpoint::new("country/{iso}/clubs");
pub const DAILY_PUZZLE: Endpoint = Endpoint::new("puzzle");
pub const RANDOM_DAILY_PUZZLE: Endpoint = Endpoint::new("puzzle/random");
pub const STREAMERS: Endpoint = Endpoint::new("streamers");
pub const LEADERBOARDS: Endpoint = Endpoint::new("leaderboards");
