use serde_json::Value;

use crate::endpoints;
use crate::TmClient;

impl TmClient {
    /// Free-text quick search across players, clubs, coaches and more.
    pub async fn search_transfermarkt(&self, query_text: &str) -> Option<Value> {
        self.resolve(&endpoints::quick_search(query_text)).await
    }

    /// General attributes (positions, feet and similar lookups).
    pub async fn attributes(&self) -> Option<Value> {
        self.resolve(endpoints::ATTRIBUTES).await
    }
}
