use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plume::config::Config;
use plume::dom::HtmlPage;
use plume::events::{PageEvent, Session};
use plume::fetch::HttpTranslationSource;
use plume::language::{LanguageCode, SystemLocale};
use plume::localizer::ContentLocalizer;
use plume::storage::FileSelectionStore;

#[derive(Parser)]
#[command(
    name = "plume",
    version,
    about = "Static marketing site localizer: swaps page copy between languages from JSON translation files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file (environment variables otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one language to a page file
    Apply {
        /// HTML page to localize
        #[arg(short, long)]
        page: PathBuf,

        /// Language code to apply
        #[arg(short, long)]
        language: String,

        /// Site root serving the translation files (overrides config)
        #[arg(short, long)]
        base_url: Option<String>,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the language an initial page load would resolve to
    Resolve,

    /// Run a page session, reading events from stdin
    ///
    /// One event per line: "load", or "click <element-id>". The localized
    /// page is written out when stdin closes.
    Session {
        /// HTML page to localize
        #[arg(short, long)]
        page: PathBuf,

        /// Site root serving the translation files (overrides config)
        #[arg(short, long)]
        base_url: Option<String>,

        /// Output path for the final page (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Apply {
            page,
            language,
            base_url,
            output,
        } => {
            tracing::info!(
                page = %page.display(),
                language = %language,
                "Starting apply command"
            );
            apply(config, page, language, base_url, output).await?;
        }

        Commands::Resolve => {
            resolve(config)?;
        }

        Commands::Session {
            page,
            base_url,
            output,
        } => {
            tracing::info!(page = %page.display(), "Starting session command");
            session(config, page, base_url, output).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("plume=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("plume=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::from_env(),
    }
}

fn build_localizer(config: &Config, base_url: Option<String>) -> Result<ContentLocalizer> {
    let mut fetch_config = config.fetch.clone();
    if let Some(base_url) = base_url {
        fetch_config.base_url = base_url;
    }

    let source = HttpTranslationSource::from_config(&fetch_config)?;
    let store = FileSelectionStore::new(config.state.path.clone());

    Ok(ContentLocalizer::new(
        Arc::new(source),
        Arc::new(store),
        Arc::new(SystemLocale),
    )
    .with_fallback(config.fallback_language()))
}

async fn apply(
    config: Config,
    page: PathBuf,
    language: String,
    base_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let code = LanguageCode::parse(&language)
        .with_context(|| format!("not a language code: {language}"))?;

    let html = tokio::fs::read_to_string(&page)
        .await
        .with_context(|| format!("Failed to read page: {}", page.display()))?;
    let mut dom = HtmlPage::parse(&html);

    let localizer = build_localizer(&config, base_url)?;
    let stats = localizer.localize_once(&mut dom, &code).await?;

    tracing::info!(
        written = stats.written,
        missing = stats.missing.len(),
        "page localized"
    );

    write_output(&dom.render(), output).await
}

fn resolve(config: Config) -> Result<()> {
    let localizer = build_localizer(&config, None)?;
    println!("{}", localizer.resolve_initial());
    Ok(())
}

async fn session(
    config: Config,
    page: PathBuf,
    base_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let html = tokio::fs::read_to_string(&page)
        .await
        .with_context(|| format!("Failed to read page: {}", page.display()))?;
    let dom = HtmlPage::parse(&html);

    let localizer = build_localizer(&config, base_url)?;
    let mut session = Session::new(localizer, dom);

    session.dispatch(PageEvent::Load).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_event(&line) {
            Some(event) => {
                session.dispatch(event).await;
            }
            None => {
                if !line.trim().is_empty() {
                    tracing::warn!(line = %line, "unrecognized event, expected 'load' or 'click <element-id>'");
                }
            }
        }
    }

    write_output(&session.into_dom().render(), output).await?;
    tracing::info!("session finished");
    Ok(())
}

fn parse_event(line: &str) -> Option<PageEvent> {
    let mut parts = line.trim().split_whitespace();
    match parts.next()? {
        "load" => Some(PageEvent::Load),
        "click" => parts.next().map(|element| PageEvent::Click {
            element: element.to_string(),
        }),
        _ => None,
    }
}

async fn write_output(html: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "localized page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}
