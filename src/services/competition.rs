use serde_json::Value;

use crate::endpoints;
use crate::ids::IntoIdList;
use crate::{Result, TmClient};

impl TmClient {
    /// Competition by code, e.g. `GB1` for the Premier League.
    pub async fn competition_info(&self, code: &str) -> Option<Value> {
        self.resolve(&endpoints::competition_info(code)).await
    }

    /// Standings table of a competition.
    pub async fn competition_table(&self, code: &str) -> Option<Value> {
        self.resolve(&endpoints::competition_table(code)).await
    }

    /// Several competitions by numeric ID in one request.
    pub async fn competitions_info(
        &self,
        competition_ids: impl IntoIdList,
    ) -> Result<Option<Value>> {
        let endpoint = endpoints::competitions_info(competition_ids)?;
        Ok(self.resolve(&endpoint).await)
    }
}
