//! Endpoint façade: one method on [`TmClient`](crate::TmClient) per remote
//! resource.
//!
//! Every method builds an endpoint key and hands it to
//! [`TmClient::resolve`](crate::TmClient::resolve), so all caching and failure
//! handling lives there. Batch methods validate their IDs first and return
//! [`TmError::InvalidArgument`](crate::TmError::InvalidArgument) without
//! touching the network.
//!
//! ```rust,no_run
//! use tmapi::{ClientConfig, ClubId, PlayerId, TmClient};
//!
//! # async fn example() -> tmapi::Result<()> {
//! let client = TmClient::new(ClientConfig::default())?;
//!
//! let profile = client.player_profile(PlayerId::new(28003)).await;
//! let club = client.club_info(ClubId::new(131)).await;
//! let players = client.players_info([28003u64, 8198]).await?;
//! # Ok(())
//! # }
//! ```

mod club;
mod coach;
mod competition;
mod game;
mod general;
mod player;
mod referee;
mod stadium;
