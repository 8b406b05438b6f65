use crate::domain::model::RepositoryRecord;
use serde::Serialize;

/// Topics shown on a card before the overflow badge.
pub const VISIBLE_TOPICS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageColor {
    Blue,
    Yellow,
    Green,
    Purple,
    Cyan,
    Gray,
}

impl LanguageColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageColor::Blue => "blue",
            LanguageColor::Yellow => "yellow",
            LanguageColor::Green => "green",
            LanguageColor::Purple => "purple",
            LanguageColor::Cyan => "cyan",
            LanguageColor::Gray => "gray",
        }
    }
}

pub fn language_color(language: &str) -> LanguageColor {
    match language {
        "TypeScript" => LanguageColor::Blue,
        "JavaScript" => LanguageColor::Yellow,
        "Python" => LanguageColor::Green,
        "Solidity" => LanguageColor::Purple,
        "Go" => LanguageColor::Cyan,
        _ => LanguageColor::Gray,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `"my-cool_app"` -> `"My Cool_app"`. Hyphens become spaces and every word
/// character that starts a word is upper-cased.
pub fn humanize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_word = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if is_word_char(c) && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word_char(c);
    }

    out
}

/// First three topics plus how many were left out.
pub fn topic_badges(topics: &[String]) -> (&[String], usize) {
    let shown = topics.len().min(VISIBLE_TOPICS);
    (&topics[..shown], topics.len() - shown)
}

/// Everything a repository card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub topics: Vec<String>,
    pub hidden_topics: usize,
    pub language: String,
    pub language_color: LanguageColor,
    pub stars: u64,
    pub forks: u64,
    pub source_url: String,
    pub demo_url: Option<String>,
}

impl RepositoryCard {
    /// `"+N"` badge text when some topics are hidden.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.hidden_topics > 0).then(|| format!("+{}", self.hidden_topics))
    }
}

impl From<&RepositoryRecord> for RepositoryCard {
    fn from(record: &RepositoryRecord) -> Self {
        let (shown, hidden) = topic_badges(&record.topics);
        Self {
            id: record.id,
            title: humanize_name(&record.name),
            description: record.description.clone(),
            topics: shown.to_vec(),
            hidden_topics: hidden,
            language: record.primary_language.clone(),
            language_color: language_color(&record.primary_language),
            stars: record.star_count,
            forks: record.fork_count,
            source_url: record.source_url.clone(),
            demo_url: (!record.demo_url.is_empty()).then(|| record.demo_url.clone()),
        }
    }
}
