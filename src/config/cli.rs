use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-core")]
#[command(about = "Preview the portfolio repository feed and contact flow")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch and print the repository cards
    Projects {
        #[arg(long, help = "GitHub account, overrides the config")]
        account: Option<String>,

        #[arg(long, help = "Show every repository instead of the first page")]
        all: bool,
    },
    /// Send one contact message
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        #[arg(long, default_value = "", hide = true)]
        website: String,
    },
}
