use serde_json::Value;

use crate::endpoints;
use crate::ids::{IntoIdList, RefereeId};
use crate::{Result, TmClient};

impl TmClient {
    pub async fn referee_profile(&self, referee_id: impl Into<RefereeId>) -> Option<Value> {
        self.resolve(&endpoints::referee_profile(referee_id.into()))
            .await
    }

    pub async fn referees_info(&self, referee_ids: impl IntoIdList) -> Result<Option<Value>> {
        let endpoint = endpoints::referees_info(referee_ids)?;
        Ok(self.resolve(&endpoint).await)
    }
}
