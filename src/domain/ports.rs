use crate::domain::model::{ContactRow, RepositoryRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_repositories(&self, account: &str) -> Result<Vec<RepositoryRecord>>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Whether endpoint and credentials are present.
    fn is_configured(&self) -> bool;

    async fn insert_contact(&self, row: &ContactRow) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
