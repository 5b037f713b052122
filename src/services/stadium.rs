use serde_json::Value;

use crate::endpoints;
use crate::ids::StadiumId;
use crate::TmClient;

impl TmClient {
    pub async fn stadium_info(&self, stadium_id: impl Into<StadiumId>) -> Option<Value> {
        self.resolve(&endpoints::stadium_info(stadium_id.into()))
            .await
    }
}
