//! Endpoint keys for every resource the client knows about.
//!
//! An endpoint key is the path plus query string relative to the API base
//! address. It addresses the remote resource and doubles as the cache key,
//! so these builders never reorder or normalize anything.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::ids::{ClubId, CoachId, GameId, IntoIdList, PlayerId, RefereeId, StadiumId};
use crate::Result;


/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const ATTRIBUTES: &str = "attributes";
pub const PLAYERS_PERFORMANCE: &str = "players/performance";

/// Optional filters for a player's performance data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceQuery {
    /// Season filter, e.g. `2022`. Sent unencoded.
    pub season: Option<String>,
}

impl PerformanceQuery {
    pub fn for_season(season: impl Into<String>) -> Self {
        Self {
            season: Some(season.into()),
        }
    }
}

pub fn player_profile(id: PlayerId) -> String {
    format!("player/{id}")
}

pub fn players_info(ids: impl IntoIdList) -> Result<String> {
    batch("players", ids, "player_ids")
}

pub fn player_gallery(id: PlayerId) -> String {
    format!("player/{id}/gallery")
}

/// `?season=` is appended only for a non-empty season.
pub fn player_performance(id: PlayerId, query: &PerformanceQuery) -> String {
    match query.season.as_deref() {
        Some(season) if !season.is_empty() => format!("player/{id}/performance?season={season}"),
        _ => format!("player/{id}/performance"),
    }
}

pub fn player_injuries(id: PlayerId) -> String {
    format!("player/{id}/injury")
}

pub fn player_market_value_history(id: PlayerId) -> String {
    format!("player/{id}/market-value-history")
}

pub fn player_national_career(id: PlayerId) -> String {
    format!("player/{id}/national-career-history")
}

pub fn player_transfer_history(id: PlayerId) -> String {
    format!("transfer/history/player/{id}")
}

pub fn club_info(id: ClubId) -> String {
    format!("club/{id}")
}

pub fn clubs_info(ids: impl IntoIdList) -> Result<String> {
    batch("clubs", ids, "club_ids")
}

pub fn club_squad(id: ClubId) -> String {
    format!("club/{id}/squad")
}

pub fn club_stadium(id: ClubId) -> String {
    format!("club/{id}/stadium")
}

pub fn club_transfer_history(id: ClubId) -> String {
    format!("transfer/history/club/{id}")
}

pub fn coach_profile(id: CoachId) -> String {
    format!("coach/{id}")
}

pub fn coaches_info(ids: impl IntoIdList) -> Result<String> {
    batch("coaches", ids, "coach_ids")
}

/// Competitions are addressed by code (`GB1`), passed through verbatim.
pub fn competition_info(code: &str) -> String {
    format!("competition/{code}")
}

pub fn competition_table(code: &str) -> String {
    format!("competition/{code}/table")
}

pub fn competitions_info(ids: impl IntoIdList) -> Result<String> {
    batch("competitions", ids, "competition_ids")
}

pub fn game(id: GameId) -> String {
    format!("game/{id}")
}

pub fn game_live_detail(id: GameId) -> String {
    format!("game/{id}/live-detail")
}

pub fn referee_profile(id: RefereeId) -> String {
    format!("referee/{id}")
}

pub fn referees_info(ids: impl IntoIdList) -> Result<String> {
    batch("referees", ids, "referee_ids")
}

pub fn stadium_info(id: StadiumId) -> String {
    format!("stadium/{id}")
}

pub fn quick_search(term: &str) -> String {
    format!("quick-search?term={}", utf8_percent_encode(term, URI_COMPONENT))
}

/// `<resource>?ids[]=<a>&ids[]=<b>`; an empty list leaves the query empty.
fn batch(resource: &str, ids: impl IntoIdList, param: &'static str) -> Result<String> {
    let query = ids
        .into_id_list(param)?
        .iter()
        .map(|id| format!("ids[]={id}"))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!("{resource}?{query}"))
}
