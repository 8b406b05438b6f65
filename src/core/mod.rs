pub mod cache;
pub mod contact;
pub mod feed;
pub mod view;

pub use crate::domain::model::{ContactRow, ContactSubmission, RepositoryRecord};
pub use crate::domain::ports::{Clock, ContactStore, RepositorySource, SystemClock};
pub use crate::utils::error::Result;
