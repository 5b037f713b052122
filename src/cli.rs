//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use crate::config::{ClientConfig, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BASE_URL};
use crate::ids::{ClubId, CoachId, GameId, PlayerId, RefereeId, StadiumId};

/// Query the Transfermarkt API and print the JSON payload.
#[derive(Debug, Parser)]
#[clap(name = "tmapi", version)]
pub struct Tmapi {
    #[clap(flatten)]
    pub client: ClientArgs,

    /// Print compact JSON instead of pretty output.
    #[clap(long, global = true)]
    pub compact: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Connection settings shared by every command.
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// API base address.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[clap(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Cache time-to-live in seconds.
    #[clap(long, default_value_t = 300)]
    pub ttl_secs: u64,

    /// Value of the Accept-Language header.
    #[clap(long, default_value = DEFAULT_ACCEPT_LANGUAGE)]
    pub language: String,
}

impl ClientArgs {
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_cache_ttl(Duration::from_secs(self.ttl_secs))
            .with_accept_language(self.language.clone())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Player data
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Club data
    Club {
        #[clap(subcommand)]
        cmd: ClubCmd,
    },

    /// Coach data
    Coach {
        #[clap(subcommand)]
        cmd: CoachCmd,
    },

    /// Competition data
    Competition {
        #[clap(subcommand)]
        cmd: CompetitionCmd,
    },

    /// Game data
    Game {
        #[clap(subcommand)]
        cmd: GameCmd,
    },

    /// Referee data
    Referee {
        #[clap(subcommand)]
        cmd: RefereeCmd,
    },

    /// Stadium details
    Stadium { id: StadiumId },

    /// Quick search across all entity types
    Search { term: String },

    /// General attributes available in the API
    Attributes,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Player profile
    Profile { id: PlayerId },

    /// Several players in one request: `player info 28003 8198`
    Info { ids: Vec<u64> },

    /// Image gallery
    Gallery { id: PlayerId },

    /// Performance data, optionally for one season
    Performance {
        id: PlayerId,

        /// Season filter (e.g. 2022).
        #[clap(long, short)]
        season: Option<String>,
    },

    /// Injury history
    Injuries { id: PlayerId },

    /// Market value history
    MarketValue { id: PlayerId },

    /// International career history
    NationalCareer { id: PlayerId },

    /// Transfer history
    Transfers { id: PlayerId },

    /// General performance data across players
    AllPerformance,
}

#[derive(Debug, Subcommand)]
pub enum ClubCmd {
    /// Club details
    Info { id: ClubId },

    /// Several clubs in one request
    Batch { ids: Vec<u64> },

    /// Current squad
    Squad { id: ClubId },

    /// Club stadium
    Stadium { id: ClubId },

    /// Transfer history
    Transfers { id: ClubId },
}

#[derive(Debug, Subcommand)]
pub enum CoachCmd {
    /// Coach profile
    Profile { id: CoachId },

    /// Several coaches in one request
    Batch { ids: Vec<u64> },
}

#[derive(Debug, Subcommand)]
pub enum CompetitionCmd {
    /// Competition details by code (e.g. GB1)
    Info { code: String },

    /// Standings table by code
    Table { code: String },

    /// Several competitions by numeric ID
    Batch { ids: Vec<u64> },
}

#[derive(Debug, Subcommand)]
pub enum GameCmd {
    /// Game details
    Info { id: GameId },

    /// Live game details
    Live { id: GameId },
}

#[derive(Debug, Subcommand)]
pub enum RefereeCmd {
    /// Referee profile
    Profile { id: RefereeId },

    /// Several referees in one request
    Batch { ids: Vec<u64> },
}
