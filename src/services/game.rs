use serde_json::Value;

use crate::endpoints;
use crate::ids::GameId;
use crate::TmClient;

impl TmClient {
    pub async fn game(&self, game_id: impl Into<GameId>) -> Option<Value> {
        self.resolve(&endpoints::game(game_id.into())).await
    }

    pub async fn game_live_detail(&self, game_id: impl Into<GameId>) -> Option<Value> {
        self.resolve(&endpoints::game_live_detail(game_id.into()))
            .await
    }
}
