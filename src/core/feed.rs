use crate::core::cache::RepositoryCache;
use crate::core::view::LoadState;
use crate::domain::display::RepositoryCard;
use crate::domain::model::RepositoryRecord;
use crate::domain::ports::{Clock, RepositorySource};
use serde::Serialize;
use std::sync::Arc;

/// Cards shown while collapsed, and skeletons shown while loading.
pub const DEFAULT_PAGE_SIZE: usize = 6;

pub const LOAD_FAILED_MESSAGE: &str = "Unable to load repositories from GitHub right now.";
pub const RETRY_LABEL: &str = "Retry";
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// The repositories a collapsed or expanded grid shows.
pub fn displayed_repos(
    repos: &[RepositoryRecord],
    show_all: bool,
    page_size: usize,
) -> &[RepositoryRecord] {
    if show_all {
        repos
    } else {
        &repos[..repos.len().min(page_size)]
    }
}

/// Label of the expand/collapse control, `None` when everything already fits.
pub fn toggle_label(total: usize, show_all: bool, page_size: usize) -> Option<String> {
    if total <= page_size {
        return None;
    }
    Some(if show_all {
        SHOW_LESS_LABEL.to_string()
    } else {
        format!("View All Projects ({})", total)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedView {
    Loading {
        placeholders: usize,
    },
    Failed {
        message: String,
        retry_label: String,
    },
    Ready {
        cards: Vec<RepositoryCard>,
        total: usize,
        toggle: Option<String>,
    },
}

/// Repository showcase for one account: load state plus the expand toggle.
pub struct RepositoryFeed<S: RepositorySource, C: Clock> {
    source: S,
    clock: C,
    cache: RepositoryCache,
    account: String,
    page_size: usize,
    state: LoadState<Arc<Vec<RepositoryRecord>>>,
    show_all: bool,
}

impl<S: RepositorySource, C: Clock> RepositoryFeed<S, C> {
    pub fn new(source: S, clock: C, cache: RepositoryCache, account: impl Into<String>) -> Self {
        Self {
            source,
            clock,
            cache,
            account: account.into(),
            page_size: DEFAULT_PAGE_SIZE,
            state: LoadState::Loading,
            show_all: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn state(&self) -> &LoadState<Arc<Vec<RepositoryRecord>>> {
        &self.state
    }

    /// Serve from the cache when fresh, fetch otherwise. A failed feed stays
    /// failed until [`retry`](Self::retry).
    pub async fn refresh(&mut self) {
        if self.state.is_failed() {
            tracing::debug!("Feed for {} is in error state, waiting for retry", self.account);
            return;
        }

        if let Some(repos) = self.cache.get_fresh(&self.account, self.clock.now()).await {
            tracing::debug!("Serving {} cached repositories for {}", repos.len(), self.account);
            self.state = LoadState::Ready(repos);
            return;
        }

        self.state = LoadState::Loading;
        let result = self
            .source
            .fetch_repositories(&self.account)
            .await
            .map(Arc::new);

        match &result {
            Ok(repos) => {
                self.cache
                    .insert(&self.account, Arc::clone(repos), self.clock.now())
                    .await;
                tracing::info!("Loaded {} repositories for {}", repos.len(), self.account);
            }
            Err(e) => {
                tracing::warn!("Failed to load repositories for {}: {}", self.account, e);
            }
        }
        self.state = result.into();
    }

    pub async fn render(&mut self) -> FeedView {
        self.refresh().await;
        self.view()
    }

    /// Manual reload after a failure: forget the cached list and fetch again.
    pub async fn retry(&mut self) -> FeedView {
        self.cache.invalidate(&self.account).await;
        self.state = LoadState::Loading;
        self.render().await
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn total(&self) -> usize {
        self.state.ready().map(|repos| repos.len()).unwrap_or(0)
    }

    pub fn displayed(&self) -> &[RepositoryRecord] {
        match self.state.ready() {
            Some(repos) => displayed_repos(repos, self.show_all, self.page_size),
            None => &[],
        }
    }

    pub fn view(&self) -> FeedView {
        match &self.state {
            LoadState::Loading => FeedView::Loading {
                placeholders: self.page_size,
            },
            LoadState::Failed(_) => FeedView::Failed {
                message: LOAD_FAILED_MESSAGE.to_string(),
                retry_label: RETRY_LABEL.to_string(),
            },
            LoadState::Ready(repos) => FeedView::Ready {
                cards: self.displayed().iter().map(RepositoryCard::from).collect(),
                total: repos.len(),
                toggle: toggle_label(repos.len(), self.show_all, self.page_size),
            },
        }
    }
}
