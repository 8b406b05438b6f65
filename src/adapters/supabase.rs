use crate::config::DataStoreConfig;
use crate::domain::model::ContactRow;
use crate::domain::ports::ContactStore;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Error body PostgREST sends back on a rejected write.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

/// Inserts contact rows through the Supabase REST endpoint.
pub struct SupabaseStore {
    client: Client,
    config: DataStoreConfig,
}

impl SupabaseStore {
    pub fn new(config: DataStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn table_url(&self) -> Option<String> {
        self.config.url.as_deref().map(|base| {
            format!(
                "{}/rest/v1/{}",
                base.trim_end_matches('/'),
                self.config.table
            )
        })
    }
}

#[async_trait]
impl ContactStore for SupabaseStore {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn insert_contact(&self, row: &ContactRow) -> Result<()> {
        let (Some(url), Some(key)) = (self.table_url(), self.config.anon_key.as_deref()) else {
            return Err(PortfolioError::not_configured());
        };
        if !self.is_configured() {
            return Err(PortfolioError::not_configured());
        }

        tracing::debug!("Inserting contact row into: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .map_err(|e| PortfolioError::remote(Some(e.to_string())))?;

        let status = response.status();
        tracing::debug!("Data store response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PostgrestError>(&body)
            .ok()
            .and_then(|e| e.message);
        tracing::warn!("Data store rejected insert ({}): {:?}", status, message);
        Err(PortfolioError::remote(message))
    }
}
