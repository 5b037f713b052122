use serde_json::Value;

use crate::endpoints;
use crate::ids::{CoachId, IntoIdList};
use crate::{Result, TmClient};

impl TmClient {
    pub async fn coach_profile(&self, coach_id: impl Into<CoachId>) -> Option<Value> {
        self.resolve(&endpoints::coach_profile(coach_id.into())).await
    }

    pub async fn coaches_info(&self, coach_ids: impl IntoIdList) -> Result<Option<Value>> {
        let endpoint = endpoints::coaches_info(coach_ids)?;
        Ok(self.resolve(&endpoint).await)
    }
}
