//! FacebookFacade CLI - run facade operations against the Graph API from the
//! terminal. Useful for scripting and for checking app credentials.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use ff_core::config::AppConfig;
use ff_core::error::FbResult;
use ff_core::logging;

/// FacebookFacade - Graph API convenience calls from the command line.
#[derive(Parser)]
#[command(
    name = "fbfacade",
    version,
    about = "Facebook Graph API facade CLI",
    long_about = "Look up users, friends, profile links and picture URLs through the Graph API.\n\
                  Application credentials come from the config file or the --app-id/--app-secret flags."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Application id (overrides config).
    #[arg(long, global = true)]
    app_id: Option<String>,

    /// Application secret (overrides config).
    #[arg(long, global = true)]
    app_secret: Option<String>,

    /// User access token to act as.
    #[arg(short = 't', long, global = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user record, or the current user when no id is given.
    User {
        /// User id or alias.
        id: Option<String>,
    },
    /// List the current user's friends.
    Friends,
    /// Print the public profile link for a user id.
    ProfileUrl {
        /// User id, used verbatim.
        id: String,
    },
    /// Print a profile picture URL.
    ///
    /// Accepts: nothing, ID, TYPE, W H, ID TYPE, or ID W H.
    Picture {
        /// Positional picture arguments. All-digit values are integers.
        args: Vec<String>,
    },
    /// Print the OAuth login dialog URL.
    LoginUrl {
        /// Comma-separated permissions to request.
        #[arg(long)]
        scope: Option<String>,
        /// Where the dialog sends the user afterwards.
        #[arg(long)]
        redirect_uri: Option<String>,
    },
    /// Invoke any facade or client operation by name.
    Call {
        /// Operation name, e.g. `api` or `get_user`.
        name: String,
        /// Arguments as JSON values. Anything that is not valid JSON is a string.
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> FbResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(std::path::Path::new(path))?,
        None => AppConfig::load_default()?,
    };
    if let Some(app_id) = cli.app_id {
        config.graph.app_id = app_id;
    }
    if let Some(app_secret) = cli.app_secret {
        config.graph.app_secret = app_secret;
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));
    let _guard = logging::init_logging(log_level, &log_dir, config.logging.json_output)?;

    info!("FacebookFacade CLI v{}", ff_core::constants::APP_VERSION);

    // Commands that never reach the Graph API run without credentials.
    if let Commands::ProfileUrl { id } = &cli.command {
        return commands::profile_url::run(id, cli.format);
    }

    let facade = commands::create_facade(&config, cli.access_token.as_deref()).await?;

    match cli.command {
        Commands::User { id } => commands::user::run(&facade, id, cli.format).await,
        Commands::Friends => commands::friends::run(&facade, cli.format).await,
        Commands::ProfileUrl { id } => commands::profile_url::run(&id, cli.format),
        Commands::Picture { args } => commands::picture::run(&facade, &args, cli.format).await,
        Commands::LoginUrl { scope, redirect_uri } => {
            commands::login_url::run(&facade, scope, redirect_uri, cli.format).await
        }
        Commands::Call { name, args } => commands::call::run(&facade, &name, &args, cli.format).await,
    }
}
