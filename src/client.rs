//! Client for the Chess.com Published-Data API.
//!
//! This module provides an HTTP client for the read-only Published-Data API,
//! which offers endpoints for querying players, clubs, tournaments, team
//! matches, countries, puzzles, streamers, and leaderboards.
//!
//! # Overview
//!
//! Every endpoint is a single GET returning JSON (the monthly PGN archive
//! returns plain text). Responses come back as an [`ApiResponse`] wrapper
//! over the decoded body.
//!
//! ## Available endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/player/{username}` | Player profile |
//! | `/player/{username}/stats` | Ratings and records per game type |
//! | `/player/{username}/is-online` | Whether the player was online recently |
//! | `/player/{username}/games` | Daily games in progress |
//! | `/player/{username}/games/to-move` | Daily games where it is the player's turn |
//! | `/player/{username}/games/archives` | Index of available monthly archives |
//! | `/player/{username}/games/{YYYY}/{MM}` | Finished games for one month |
//! | `/player/{username}/games/{YYYY}/{MM}/pgn` | Same month as a multi-game PGN |
//! | `/player/{username}/clubs` | Clubs the player belongs to |
//! | `/player/{username}/matches` | Team matches the player is registered for |
//! | `/player/{username}/tournaments` | Tournaments the player participates in |
//! | `/titled/{title}` | Usernames holding a title |
//! | `/club/{url_id}` | Club details |
//! | `/club/{url_id}/members` | Club members by activity |
//! | `/club/{url_id}/matches` | Club team matches |
//! | `/tournament/{url_id}` | Tournament details |
//! | `/tournament/{url_id}/{round}` | Tournament round |
//! | `/tournament/{url_id}/{round}/{group}` | Tournament round group |
//! | `/match/{id}` | Daily team match |
//! | `/match/{id}/{board}` | Daily team match board |
//! | `/match/live/{id}` | Live team match |
//! | `/match/live/{id}/{board}` | Live team match board |
//! | `/country/{iso}` | Country details |
//! | `/country/{iso}/players` | Usernames registered in a country |
//! | `/country/{iso}/clubs` | Clubs registered in a country |
//! | `/puzzle` | Daily puzzle |
//! | `/puzzle/random` | Random daily puzzle |
//! | `/streamers` | Chess.com streamers |
//! | `/leaderboards` | Top 50 players per category |
//!
//! # Example
//!
//! ```no_run
//! use chesscom_client_sdk::{Client, Config};
//! use chesscom_client_sdk::types::request::PlayerRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .user_agent("My Rust Application. Contact me at email@example.com")
//!     .build();
//! let client = Client::new("https://api.chess.com/pub", config)?;
//!
//! let request = PlayerRequest::builder().username("fabianocaruana").build();
//! let profile = client.player_profile(&request).await?;
//!
//! println!("{}", profile["name"]);
//! # Ok(())
//! # }
//! ```
//!
//! # API base URL
//!
//! The default API endpoint is `https://api.chess.com/pub`.

use std::fmt;
use std::sync::Arc;

use async_stream::try_stream;
use bon::Builder;
use futures::Stream;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use url::Url;

use crate::endpoint::{self, Endpoint};
use crate::error::Error;
use crate::response::{ApiResponse, error_message};
use crate::transport::{Execute, HttpExecutor};
use crate::types::request::{
    ClubRequest, CountryRequest, MonthlyArchivesRequest, PlayerRequest, TeamMatchBoardRequest,
    TeamMatchRequest, TitledRequest, TournamentRequest, TournamentRoundGroupRequest,
    TournamentRoundRequest,
};
use crate::{Result, ToQueryParams as _};

/// The production Published-Data API host.
pub const DEFAULT_HOST: &str = "https://api.chess.com/pub";

/// Reusable client configuration.
///
/// Built once, shared by every call made through the [`Client`]; nothing in
/// it mutates after construction.
#[derive(Builder)]
pub struct Config {
    /// Contact string sent as the `User-Agent` header. The Chess.com usage
    /// policy asks API consumers to identify themselves with something like
    /// `"My Rust Application. Contact me at email@example.com"`.
    #[builder(into)]
    user_agent: Option<String>,
    /// Override for the request executor. Defaults to the reqwest-backed
    /// [`HttpExecutor`]; tests substitute a stub.
    executor: Option<Arc<dyn Execute>>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the Chess.com Published-Data API.
///
/// Cheap to clone and safe to share across tasks: it holds only the host URL,
/// the default header set, and the request executor.
#[derive(Clone)]
pub struct Client {
    host: Url,
    headers: HeaderMap,
    executor: Arc<dyn Execute>,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client against a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the default HTTP
    /// executor cannot be constructed.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();
        match &config.user_agent {
            Some(contact) => {
                headers.insert(USER_AGENT, HeaderValue::from_str(contact)?);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "api.chess.com asks for a contact User-Agent header; \
                     set one with Config::builder().user_agent(..)"
                );
                headers.insert(USER_AGENT, HeaderValue::from_static("chesscom-client-sdk"));
            }
        }

        let executor = match config.executor {
            Some(executor) => executor,
            None => Arc::new(HttpExecutor::new()?),
        };

        Ok(Self {
            host: Url::parse(host)?,
            headers,
            executor,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(template = endpoint.template()))
    )]
    async fn get<Req: Serialize>(
        &self,
        endpoint: &Endpoint,
        values: &[(&str, &str)],
        request: &Req,
    ) -> Result<ApiResponse> {
        let url = endpoint.url(&self.host, values, &request.query_params())?;
        let path = url.path().to_owned();
        let raw = self.executor.get(url, self.headers.clone()).await?;
        ApiResponse::from_raw(&path, raw)
    }

    /// Same path as [`Self::get`] for the endpoints that serve plain text
    /// instead of JSON.
    async fn get_text(&self, endpoint: &Endpoint, values: &[(&str, &str)]) -> Result<String> {
        let url = endpoint.url(&self.host, values, "")?;
        let path = url.path().to_owned();
        let raw = self.executor.get(url, self.headers.clone()).await?;

        if !raw.status.is_success() {
            return Err(Error::status(raw.status, path, error_message(&raw.body)));
        }

        Ok(raw.body)
    }

    /// Retrieves the profile of a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_profile(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_PROFILE,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves ratings, win/loss records, and puzzle stats per game type.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_stats(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_STATS,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Reports whether the player has been online in the last five minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn is_player_online(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_IS_ONLINE,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the Daily Chess games a player is currently playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_current_games(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_CURRENT_GAMES,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the Daily Chess games where it is the player's turn to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_current_games_to_move(
        &self,
        request: &PlayerRequest,
    ) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_GAMES_TO_MOVE,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the index of monthly archives available for a player.
    ///
    /// Each entry is the full URL of one `games/{YYYY}/{MM}` archive. Use
    /// [`Self::stream_monthly_archives`] to fetch them all lazily.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_game_archives(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_GAME_ARCHIVES,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the finished games of a player for one month.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive coordinates are out of range, the
    /// username is empty, or the request fails.
    pub async fn player_games_by_month(
        &self,
        request: &MonthlyArchivesRequest,
    ) -> Result<ApiResponse> {
        request.validate()?;
        let year = request.year_segment();
        let month = request.month_segment();
        self.get(
            &endpoint::PLAYER_GAMES_BY_MONTH,
            &[
                ("username", &request.username),
                ("year", &year),
                ("month", &month),
            ],
            request,
        )
        .await
    }

    /// Retrieves one monthly archive as a multi-game PGN document.
    ///
    /// This endpoint serves `text/plain`, so the raw PGN text is returned
    /// instead of an [`ApiResponse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the archive coordinates are out of range, the
    /// username is empty, or the request fails.
    pub async fn player_games_by_month_pgn(
        &self,
        request: &MonthlyArchivesRequest,
    ) -> Result<String> {
        request.validate()?;
        let year = request.year_segment();
        let month = request.month_segment();
        self.get_text(
            &endpoint::PLAYER_GAMES_BY_MONTH_PGN,
            &[
                ("username", &request.username),
                ("year", &year),
                ("month", &month),
            ],
        )
        .await
    }

    /// Retrieves the clubs a player belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_clubs(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_CLUBS,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the team matches a player has attended, is participating in,
    /// or is registered for.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_team_matches(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_TEAM_MATCHES,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the tournaments a player is participating in.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty or the request fails.
    pub async fn player_tournaments(&self, request: &PlayerRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::PLAYER_TOURNAMENTS,
            &[("username", &request.username)],
            request,
        )
        .await
    }

    /// Retrieves the usernames holding a given title.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn titled_players(&self, request: &TitledRequest) -> Result<ApiResponse> {
        let title = request.title.to_string();
        self.get(&endpoint::TITLED_PLAYERS, &[("title", &title)], request)
            .await
    }

    /// Retrieves details about a club.
    ///
    /// # Errors
    ///
    /// Returns an error if the club id is empty or the request fails.
    pub async fn club_details(&self, request: &ClubRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::CLUB_DETAILS,
            &[("url_id", &request.url_id)],
            request,
        )
        .await
    }

    /// Retrieves club members grouped by activity level.
    ///
    /// # Errors
    ///
    /// Returns an error if the club id is empty or the request fails.
    pub async fn club_members(&self, request: &ClubRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::CLUB_MEMBERS,
            &[("url_id", &request.url_id)],
            request,
        )
        .await
    }

    /// Retrieves a club's daily and live team matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the club id is empty or the request fails.
    pub async fn club_matches(&self, request: &ClubRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::CLUB_MATCHES,
            &[("url_id", &request.url_id)],
            request,
        )
        .await
    }

    /// Retrieves details about a daily, live, or arena tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament id is empty or the request fails.
    pub async fn tournament_details(&self, request: &TournamentRequest) -> Result<ApiResponse> {
        self.get(
            &endpoint::TOURNAMENT_DETAILS,
            &[("url_id", &request.url_id)],
            request,
        )
        .await
    }

    /// Retrieves details about one round of a tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament id is empty or the request fails.
    pub async fn tournament_round(&self, request: &TournamentRoundRequest) -> Result<ApiResponse> {
        let round = request.round.to_string();
        self.get(
            &endpoint::TOURNAMENT_ROUND,
            &[("url_id", &request.url_id), ("round", &round)],
            request,
        )
        .await
    }

    /// Retrieves details about one group within a tournament round.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament id is empty or the request fails.
    pub async fn tournament_round_group(
        &self,
        request: &TournamentRoundGroupRequest,
    ) -> Result<ApiResponse> {
        let round = request.round.to_string();
        let group = request.group.to_string();
        self.get(
            &endpoint::TOURNAMENT_ROUND_GROUP,
            &[
                ("url_id", &request.url_id),
                ("round", &round),
                ("group", &group),
            ],
            request,
        )
        .await
    }

    /// Retrieves details about a daily team match and its boards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_match(&self, request: &TeamMatchRequest) -> Result<ApiResponse> {
        let id = request.id.to_string();
        self.get(&endpoint::TEAM_MATCH, &[("id", &id)], request)
            .await
    }

    /// Retrieves details about one board of a daily team match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_match_board(&self, request: &TeamMatchBoardRequest) -> Result<ApiResponse> {
        let id = request.id.to_string();
        let board = request.board.to_string();
        self.get(
            &endpoint::TEAM_MATCH_BOARD,
            &[("id", &id), ("board", &board)],
            request,
        )
        .await
    }

    /// Retrieves details about a live team match and its boards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_match_live(&self, request: &TeamMatchRequest) -> Result<ApiResponse> {
        let id = request.id.to_string();
        self.get(&endpoint::TEAM_MATCH_LIVE, &[("id", &id)], request)
            .await
    }

    /// Retrieves details about one board of a live team match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_match_live_board(
        &self,
        request: &TeamMatchBoardRequest,
    ) -> Result<ApiResponse> {
        let id = request.id.to_string();
        let board = request.board.to_string();
        self.get(
            &endpoint::TEAM_MATCH_LIVE_BOARD,
            &[("id", &id), ("board", &board)],
            request,
        )
        .await
    }

    /// Retrieves details about a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the country code is malformed or the request fails.
    pub async fn country_details(&self, request: &CountryRequest) -> Result<ApiResponse> {
        request.validate()?;
        self.get(&endpoint::COUNTRY_DETAILS, &[("iso", &request.iso)], request)
            .await
    }

    /// Retrieves the usernames registered in a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the country code is malformed or the request fails.
    pub async fn country_players(&self, request: &CountryRequest) -> Result<ApiResponse> {
        request.validate()?;
        self.get(&endpoint::COUNTRY_PLAYERS, &[("iso", &request.iso)], request)
            .await
    }

    /// Retrieves the clubs registered in a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the country code is malformed or the request fails.
    pub async fn country_clubs(&self, request: &CountryRequest) -> Result<ApiResponse> {
        request.validate()?;
        self.get(&endpoint::COUNTRY_CLUBS, &[("iso", &request.iso)], request)
            .await
    }

    /// Retrieves the current daily puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn daily_puzzle(&self) -> Result<ApiResponse> {
        self.get(&endpoint::DAILY_PUZZLE, &[], &()).await
    }

    /// Retrieves a randomly picked daily puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn random_daily_puzzle(&self) -> Result<ApiResponse> {
        self.get(&endpoint::RANDOM_DAILY_PUZZLE, &[], &()).await
    }

    /// Retrieves information about Chess.com streamers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn streamers(&self) -> Result<ApiResponse> {
        self.get(&endpoint::STREAMERS, &[], &()).await
    }

    /// Retrieves the top 50 players for daily and live games, tactics, and
    /// lessons.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn leaderboards(&self) -> Result<ApiResponse> {
        self.get(&endpoint::LEADERBOARDS, &[], &()).await
    }

    /// Returns a stream over every monthly archive of a player.
    ///
    /// Fetches the archive index once, then yields one [`ApiResponse`] per
    /// monthly archive URL, oldest first, fetching lazily as the stream is
    /// polled.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt;
    /// use chesscom_client_sdk::Client;
    /// use chesscom_client_sdk::types::request::PlayerRequest;
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = PlayerRequest::builder().username("erik").build();
    ///
    /// let stream = client.stream_monthly_archives(&request);
    /// pin!(stream);
    ///
    /// while let Some(result) = stream.next().await {
    ///     let month = result?;
    ///     println!("{} games", month["games"].as_array().map_or(0, Vec::len));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream_monthly_archives<'client>(
        &'client self,
        request: &'client PlayerRequest,
    ) -> impl Stream<Item = Result<ApiResponse>> + 'client {
        try_stream! {
            let index = self.player_game_archives(request).await?;
            let archives: Vec<String> =
                serde_json::from_value(index.json()["archives"].clone())?;

            for archive in archives {
                let url = Url::parse(&archive)?;
                let path = url.path().to_owned();
                let raw = self.executor.get(url, self.headers.clone()).await?;
                yield ApiResponse::from_raw(&path, raw)?;
            }
        }
    }
}
