use anyhow::Result;
use breachbot::{
    batch::{load_invocations, parse_invocations, run_all},
    config::{Config, DEFAULT_TIMEOUT_SECS},
    model::DisplayDocument,
    output::{print_document, OutputFormat},
    router::{commands, CommandRouter, Invocation},
    LookupClient, ResultRenderer,
};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Exit codes for scripting
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const FOUND: u8 = 2;
}

#[derive(Parser)]
#[command(name = "breachbot")]
#[command(author, version, about = "Look up emails and usernames in a breach database")]
struct Cli {
    /// Base URL of the breach-lookup API
    #[arg(long, env = "LEAKCHECK_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "LEAKCHECK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,

    /// Title shown on every reply
    #[arg(long, env = "BREACHBOT_TITLE", global = true)]
    title: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    format: String,

    /// Exit with status 2 if any lookup reports a breach
    #[arg(long, global = true)]
    fail_on_found: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for leaks by email address
    Mail {
        #[arg(long)]
        email: String,
    },

    /// Search for leaks by hashed email (SHA256)
    Hashmail {
        #[arg(long)]
        email: String,
    },

    /// Search for leaks by username
    #[command(name = "usernamev2", alias = "username")]
    UsernameV2 {
        #[arg(long)]
        username: String,
    },

    /// Run one command per line from a file (or stdin) concurrently
    Batch {
        /// File with commands such as `mail someone@example.com`
        file: Option<PathBuf>,
    },

    /// List the chat commands this bot registers
    ListCommands,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("breachbot=warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let format = OutputFormat::from_str(&cli.format).map_err(|e| anyhow::anyhow!(e))?;

    let invocations = match cli.command {
        Commands::ListCommands => {
            list_commands();
            return Ok(exit_codes::SUCCESS);
        }
        Commands::Mail { email } => vec![Invocation::new("mail").with_option("email", email)],
        Commands::Hashmail { email } => {
            vec![Invocation::new("hashmail").with_option("email", email)]
        }
        Commands::UsernameV2 { username } => {
            vec![Invocation::new("usernamev2").with_option("username", username)]
        }
        Commands::Batch { file } => match file {
            Some(path) => load_invocations(&path)?,
            None => parse_invocations(io::stdin().lock())?,
        },
    };

    let api_url = cli.api_url.ok_or_else(|| {
        anyhow::anyhow!("no API URL configured. Pass --api-url or set LEAKCHECK_API_URL")
    })?;

    let mut config = Config::new(&api_url)?.with_timeout(Duration::from_secs(cli.timeout_secs))?;
    if let Some(title) = cli.title {
        config = config.with_title(title);
    }

    let router = CommandRouter::new(
        Arc::new(LookupClient::new(&config)?),
        ResultRenderer::new(config.title()),
    );

    let docs = if invocations.len() == 1 && format == OutputFormat::Table {
        vec![handle_with_spinner(&router, &invocations[0]).await]
    } else {
        run_all(&router, &invocations).await
    };

    for doc in &docs {
        print_document(doc, format)?;
    }

    Ok(determine_exit_code(&docs, cli.fail_on_found))
}

async fn handle_with_spinner(router: &CommandRouter, invocation: &Invocation) -> DisplayDocument {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Checking breach database...");

    let doc = router.handle(invocation).await;
    pb.finish_and_clear();
    doc
}

fn determine_exit_code(docs: &[DisplayDocument], fail_on_found: bool) -> u8 {
    if !docs.is_empty() && docs.iter().all(DisplayDocument::is_error) {
        return exit_codes::ERROR;
    }
    if fail_on_found && docs.iter().any(|d| d.found) {
        return exit_codes::FOUND;
    }
    exit_codes::SUCCESS
}

fn list_commands() {
    println!("Available commands:");
    println!();

    for spec in commands() {
        println!("  /{:<12} {}", spec.name, spec.description);
        println!("  {:<13} {}:<string> (required) - {}", "", spec.option, spec.option_description);
        if !spec.aliases.is_empty() {
            println!("  {:<13} aliases: {}", "", spec.aliases.join(", "));
        }
        println!();
    }
}
