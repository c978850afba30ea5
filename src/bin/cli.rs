//! CLI binary for studyscope.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use studyscope::paths;
use studyscope::render::Tee;
use studyscope::{AppConfig, HtmlPage, SourceKind, TerminalRenderer, Theme, ThemeSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// StudyScope: ask one study question, get an AI answer, videos, articles,
/// study materials and cheat sheets at once.
#[derive(Parser)]
#[command(name = "studyscope", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search every configured source for a question.
    Ask {
        /// The question. Multiple words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,

        /// Also write a standalone HTML page to this path.
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Query only these sources (ai_answer, videos, articles, study_materials, cheat_sheets).
        #[arg(long, value_name = "SOURCE", num_args = 1.., value_parser = parse_source)]
        only: Vec<SourceKind>,

        /// Print the final report as JSON instead of streaming text.
        #[arg(long)]
        json: bool,
    },

    /// Show or change the page theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Manage the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the effective theme.
    Show,
    /// Switch between light and dark and save the choice.
    Toggle,
    /// Save an explicit theme.
    Set {
        /// `light` or `dark`.
        theme: Theme,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file if none exists.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path.
    Path,
}

fn parse_source(name: &str) -> Result<SourceKind, String> {
    SourceKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = SourceKind::all().iter().map(|k| k.name()).collect();
        format!("unknown source '{name}' (expected one of: {})", known.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with results or --json output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("studyscope=info,studyscope_search=info,reqwest=warn,hyper=warn")
        }))
        .init();

    let cli = Cli::parse();
    // Preferences sit next to whichever config file is in use.
    let (config_path, prefs_path) = match cli.config {
        Some(path) => {
            let prefs = path.with_file_name("preferences.toml");
            (path, prefs)
        }
        None => (AppConfig::default_config_path(), paths::preferences_file()),
    };

    match cli.command {
        Command::Ask {
            query,
            html,
            only,
            json,
        } => {
            let mut config = load_config(&config_path)?;
            if !only.is_empty() {
                config.search.sources = dedup_sources(only);
            }
            run_ask(&query.join(" "), &config, html.as_deref(), json, &prefs_path).await
        }
        Command::Theme { action } => run_theme(action, &prefs_path),
        Command::Config { action } => run_config(action, &config_path),
    }
}

fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(config)
}

fn dedup_sources(sources: Vec<SourceKind>) -> Vec<SourceKind> {
    let mut unique = Vec::with_capacity(sources.len());
    for kind in sources {
        if !unique.contains(&kind) {
            unique.push(kind);
        }
    }
    unique
}

async fn run_ask(
    query: &str,
    config: &AppConfig,
    html: Option<&Path>,
    json: bool,
    prefs_path: &Path,
) -> anyhow::Result<()> {
    let mut page = HtmlPage::new(config.page.title.clone());

    let report = if json {
        studyscope::ask(query, config, &mut page).await?
    } else {
        let mut sinks = Tee {
            first: TerminalRenderer::new(std::io::stdout().lock()),
            second: page,
        };
        let report = studyscope::ask(query, config, &mut sinks).await?;
        sinks.first.into_inner().context("writing results")?;
        page = sinks.second;
        report
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(path) = html {
        let theme = ThemeSettings::load(prefs_path, Theme::detect())?.theme();
        page.write_to(path, theme)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), %theme, "HTML page written");
        if !json {
            println!("\nHTML page written to {}", path.display());
        }
    }

    if report.succeeded() == 0 {
        warn!(failed = report.failed(), "no source returned results");
    }
    Ok(())
}

fn run_theme(action: ThemeAction, prefs_path: &Path) -> anyhow::Result<()> {
    let mut settings = ThemeSettings::load(prefs_path, Theme::detect())?;
    match action {
        ThemeAction::Show => {
            let origin = if settings.is_persisted() { "saved" } else { "system" };
            println!("{} ({origin})", settings.theme());
        }
        ThemeAction::Toggle => println!("{}", settings.toggle()?),
        ThemeAction::Set { theme } => println!("{}", settings.set(theme)?),
    }
    Ok(())
}

fn run_config(action: ConfigAction, config_path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigAction::Path => println!("{}", config_path.display()),
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            AppConfig::default().save_to_file(config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}
