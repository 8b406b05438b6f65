use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Language shown when GitHub reports none.
pub const DEFAULT_LANGUAGE: &str = "Other";

/// A repository object as returned by `GET /users/{account}/repos`.
/// Only the fields the feed renders are read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "topics_or_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// Anything other than an array of strings counts as "no topics".
fn topics_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub demo_url: String,
    pub star_count: u64,
    pub fork_count: u64,
    pub primary_language: String,
    pub topics: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RawRepository> for RepositoryRecord {
    fn from(raw: RawRepository) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            source_url: raw.html_url,
            demo_url: raw.homepage.unwrap_or_default(),
            star_count: raw.stargazers_count.unwrap_or(0),
            fork_count: raw.forks_count.unwrap_or(0),
            primary_language: raw
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            topics: raw.topics,
            updated_at: raw.updated_at,
        }
    }
}

/// Contact form values as typed by the visitor. `website` is the hidden
/// honeypot input and stays empty for humans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub website: String,
}

impl ContactSubmission {
    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }
}

/// Row written to the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl ContactRow {
    pub fn new(submission: &ContactSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
