pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{GitHubClient, SupabaseStore};
pub use config::{AppConfig, DataStoreConfig, GitHubConfig};
pub use core::{
    cache::RepositoryCache,
    contact::{ContactForm, ContactService, SubmitOutcome, SubmitStatus},
    feed::{FeedView, RepositoryFeed},
    view::{LoadState, Notice, NoticeKind},
};
pub use domain::display::RepositoryCard;
pub use domain::model::{ContactSubmission, RepositoryRecord};
pub use domain::ports::SystemClock;
pub use domain::validation::Field;
pub use utils::error::{PortfolioError, Result};
