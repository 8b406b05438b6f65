// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod github;
pub mod supabase;

pub use github::GitHubClient;
pub use supabase::SupabaseStore;
