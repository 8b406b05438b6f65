use clap::Parser;
use portfolio_core::config::cli::Command;
use portfolio_core::utils::{logger, validation::Validate};
use portfolio_core::{
    AppConfig, CliConfig, ContactForm, ContactService, Field, FeedView, GitHubClient,
    RepositoryCache, RepositoryFeed, SubmitStatus, SupabaseStore, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logging
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::info!("Starting portfolio-core preview");

    // Load config, then let the environment override it
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env_overrides();
    config.data_store.warn_if_unconfigured();

    // Validate config
    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match cli.command {
        Command::Projects { account, all } => {
            let account = account.unwrap_or_else(|| config.github.account.clone());
            // Build client and feed
            let cache = RepositoryCache::new(config.github.cache_ttl());
            let page_size = config.github.page_size;
            let client = GitHubClient::new(config.github)?;
            let mut feed =
                RepositoryFeed::new(client, SystemClock, cache, account).with_page_size(page_size);
            feed.set_show_all(all);

            match feed.render().await {
                FeedView::Ready {
                    cards,
                    total,
                    toggle,
                } => {
                    println!("📦 {} repositories", total);
                    for card in cards {
                        println!(
                            "- {} [{} · {}] ★{} ⑂{}",
                            card.title,
                            card.language,
                            card.language_color.as_str(),
                            card.stars,
                            card.forks
                        );
                        if !card.description.is_empty() {
                            println!("    {}", card.description);
                        }
                        if !card.topics.is_empty() {
                            let mut badges = card.topics.join(", ");
                            if let Some(more) = card.overflow_badge() {
                                badges.push_str(&format!(" {}", more));
                            }
                            println!("    topics: {}", badges);
                        }
                        println!("    code: {}", card.source_url);
                        if let Some(demo) = &card.demo_url {
                            println!("    live: {}", demo);
                        }
                    }
                    if let Some(label) = toggle {
                        println!("[{}]", label);
                    }
                }
                FeedView::Failed {
                    message,
                    retry_label,
                } => {
                    eprintln!("❌ {} ({})", message, retry_label);
                    std::process::exit(2);
                }
                FeedView::Loading { .. } => {}
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
            website,
        } => {
            // Fill the form and submit
            let store = SupabaseStore::new(config.data_store);
            let mut form = ContactForm::new(ContactService::new(store, SystemClock));
            form.set(Field::Name, name);
            form.set(Field::Email, email);
            form.set(Field::Subject, subject);
            form.set(Field::Message, message);
            form.set(Field::Website, website);

            match form.submit().await {
                SubmitStatus::Invalid => {
                    for error in form.errors().iter() {
                        eprintln!("❌ {}: {}", error.field, error.message);
                    }
                    std::process::exit(1);
                }
                status => {
                    if let Some(notice) = form.take_notice() {
                        println!("{} {}", notice.title, notice.description);
                    }
                    if status == SubmitStatus::Failed {
                        std::process::exit(2);
                    }
                }
            }
        }
    }

    Ok(())
}
