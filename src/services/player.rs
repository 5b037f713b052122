use serde_json::Value;

use crate::endpoints::{self, PerformanceQuery};
use crate::ids::{IntoIdList, PlayerId};
use crate::{Result, TmClient};

impl TmClient {
    /// Profile of a single player.
    pub async fn player_profile(&self, player_id: impl Into<PlayerId>) -> Option<Value> {
        self.resolve(&endpoints::player_profile(player_id.into()))
            .await
    }

    /// Several players in one request.
    pub async fn players_info(&self, player_ids: impl IntoIdList) -> Result<Option<Value>> {
        let endpoint = endpoints::players_info(player_ids)?;
        Ok(self.resolve(&endpoint).await)
    }

    pub async fn player_gallery(&self, player_id: impl Into<PlayerId>) -> Option<Value> {
        self.resolve(&endpoints::player_gallery(player_id.into()))
            .await
    }

    /// Performance data, optionally narrowed to one season.
    pub async fn player_performance(
        &self,
        player_id: impl Into<PlayerId>,
        query: PerformanceQuery,
    ) -> Option<Value> {
        self.resolve(&endpoints::player_performance(player_id.into(), &query))
            .await
    }

    pub async fn player_injuries(&self, player_id: impl Into<PlayerId>) -> Option<Value> {
        self.resolve(&endpoints::player_injuries(player_id.into()))
            .await
    }

    pub async fn player_market_value_history(
        &self,
        player_id: impl Into<PlayerId>,
    ) -> Option<Value> {
        self.resolve(&endpoints::player_market_value_history(player_id.into()))
            .await
    }

    /// International career (national team appearances).
    pub async fn player_national_career(&self, player_id: impl Into<PlayerId>) -> Option<Value> {
        self.resolve(&endpoints::player_national_career(player_id.into()))
            .await
    }

    pub async fn player_transfer_history(&self, player_id: impl Into<PlayerId>) -> Option<Value> {
        self.resolve(&endpoints::player_transfer_history(player_id.into()))
            .await
    }

    /// General performance data across players.
    pub async fn players_performance(&self) -> Option<Value> {
        self.resolve(endpoints::PLAYERS_PERFORMANCE).await
    }
}
