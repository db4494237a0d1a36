use anyhow::Result;
use clap::{Parser, Subcommand};
use ghub::{
    commands::*,
    config::{Config, CredentialOverrides},
    constants, logging,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "ghub")]
#[command(about = "A command-line client for the GitHub REST API")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// OAuth token (overrides config and GITHUB_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Username for basic authentication
    #[arg(long, global = true)]
    username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true)]
    password: Option<String>,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a request to any API path
    Api {
        /// Path under the API origin, e.g. /user
        path: String,

        /// HTTP verb; unknown verbs are sent as GET
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,

        /// Print the status line and response headers
        #[arg(short, long)]
        include: bool,
    },

    /// Work with gists
    Gists {
        #[command(subcommand)]
        action: GistsAction,

        /// Print the status line and response headers
        #[arg(short, long)]
        include: bool,
    },

    /// Work with issues
    Issues {
        #[command(subcommand)]
        action: IssuesAction,

        /// Print the status line and response headers
        #[arg(short, long)]
        include: bool,
    },

    /// Work with pull requests
    Pulls {
        #[command(subcommand)]
        action: PullsAction,

        /// Print the status line and response headers
        #[arg(short, long)]
        include: bool,
    },

    /// Create a commented ghub.yaml template
    Init {
        /// Output file name
        #[arg(short, long, default_value = constants::config::DEFAULT_CONFIG_FILE)]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.json_logs);

    if let Commands::Init { output, overwrite } = &cli.command {
        let context = CommandContext::new(Config::new())?;
        return InitCommand {
            output: output.clone(),
            overwrite: *overwrite,
        }
        .execute(&context)
        .await;
    }

    let context = build_context(&cli)?;
    execute_builtin_command(cli.command, &context).await
}

/// Merge file, environment and flag settings and build the client
fn build_context(cli: &Cli) -> Result<CommandContext> {
    let explicit = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| constants::config::DEFAULT_CONFIG_FILE.to_string());

    let overrides = CredentialOverrides {
        username: cli.username.clone(),
        password: cli.password.clone(),
        token: cli.token.clone(),
    };

    let config = Config::load_or_default(&config_path, explicit)?
        .with_env()
        .with_overrides(&overrides);
    config.validate()?;

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let context = CommandContext::new(config)?;
    debug!(
        auth = %context.github.authentication_mode(),
        config = %config_path,
        "client ready"
    );
    Ok(context)
}

async fn execute_builtin_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Api {
            path,
            method,
            data,
            include,
        } => {
            ApiCommand {
                path,
                method,
                data,
                include_headers: include,
            }
            .execute(context)
            .await
        }
        Commands::Gists { action, include } => {
            GistsCommand {
                action,
                include_headers: include,
            }
            .execute(context)
            .await
        }
        Commands::Issues { action, include } => {
            IssuesCommand {
                action,
                include_headers: include,
            }
            .execute(context)
            .await
        }
        Commands::Pulls { action, include } => {
            PullsCommand {
                action,
                include_headers: include,
            }
            .execute(context)
            .await
        }
        Commands::Init { .. } => unreachable!("init is handled before the client is built"),
    }
}
