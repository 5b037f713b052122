//! Transfermarkt API client library
//!
//! Thin async bindings for the read-only Transfermarkt JSON API: players,
//! clubs, coaches, referees, competitions, stadiums and games.
//!
//! ## Features
//!
//! - **One request primitive**: every endpoint goes through
//!   [`TmClient::resolve`], a cached GET with fixed headers and timeout
//! - **TTL cache**: responses are kept in memory per endpoint key
//!   (default 300 seconds), expired entries are misses
//! - **Absent on failure**: network errors, timeouts and non-2xx statuses
//!   yield `None` instead of an error; [`TmClient::try_resolve`] exposes
//!   the reason as a [`FetchError`]
//! - **Raw payloads**: responses are returned as `serde_json::Value`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tmapi::{PerformanceQuery, PlayerId, TmClient};
//!
//! # async fn example() -> tmapi::Result<()> {
//! let client = TmClient::with_defaults()?;
//!
//! let messi = PlayerId::new(28003);
//! if let Some(profile) = client.player_profile(messi).await {
//!     println!("{profile:#}");
//! }
//!
//! let season = client
//!     .player_performance(messi, PerformanceQuery::for_season("2022"))
//!     .await;
//! let batch = client.players_info([28003u64, 8198]).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod ids;
mod services;

// Re-export commonly used types
pub use client::TmClient;
pub use config::ClientConfig;
pub use endpoints::PerformanceQuery;
pub use error::{FetchError, Result, TmError};
pub use ids::{ClubId, CoachId, GameId, IntoIdList, NumericId, PlayerId, RefereeId, StadiumId};
