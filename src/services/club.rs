use serde_json::Value;

use crate::endpoints;
use crate::ids::{ClubId, IntoIdList};
use crate::{Result, TmClient};

impl TmClient {
    pub async fn club_info(&self, club_id: impl Into<ClubId>) -> Option<Value> {
        self.resolve(&endpoints::club_info(club_id.into())).await
    }

    pub async fn clubs_info(&self, club_ids: impl IntoIdList) -> Result<Option<Value>> {
        let endpoint = endpoints::clubs_info(club_ids)?;
        Ok(self.resolve(&endpoint).await)
    }

    /// Current squad (list of players).
    pub async fn club_squad(&self, club_id: impl Into<ClubId>) -> Option<Value> {
        self.resolve(&endpoints::club_squad(club_id.into())).await
    }

    pub async fn club_stadium(&self, club_id: impl Into<ClubId>) -> Option<Value> {
        self.resolve(&endpoints::club_stadium(club_id.into())).await
    }

    pub async fn club_transfer_history(&self, club_id: impl Into<ClubId>) -> Option<Value> {
        self.resolve(&endpoints::club_transfer_history(club_id.into()))
            .await
    }
}
