use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use studymatch_content::CourseSource;
use studymatch_core::{KnowledgeBase, Matcher};
use tracing::{error, info};

mod config;
mod render;
mod repl;
mod session;
mod state;

use config::Config;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "studymatch",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STUDYMATCH_BUILD_SHA"), ")"),
    about = "Answer study questions from a curated course knowledge base"
)]
struct Cli {
    /// Course data source: "bundled", a JSON file path, or an http(s) URL
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Ask questions interactively, one per line
    Repl,

    /// Show or manage the recent-question log
    History {
        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },

    /// List the loaded course modules
    Modules,

    /// Write a default config.toml if none exists
    InitConfig,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List recent questions, newest first
    Show,

    /// Ask question N (as numbered by `history show`) again
    Rerun { n: usize },

    /// Delete the stored history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cfg = config::load_config()?;
    let source = match &cli.source {
        Some(s) => {
            let Ok(source) = s.parse::<CourseSource>();
            source
        }
        None => cfg.course_source(),
    };

    match cli.command {
        Command::Ask { question } => {
            let mut session = open_session(&cfg, Some(&source)).await?;
            let reply = session.ask(&question.join(" "), chrono::Utc::now())?;
            println!("{}", render::render_reply(&reply, session.knowledge()));
        }

        Command::Repl => {
            let mut session = open_session(&cfg, Some(&source)).await?;
            repl::run_repl(&mut session)?;
        }

        Command::History { command } => match command.unwrap_or(HistoryCommand::Show) {
            HistoryCommand::Show => {
                let session = open_session(&cfg, None).await?;
                println!("{}", render::render_history(session.history()));
            }
            HistoryCommand::Rerun { n } => {
                if n == 0 {
                    bail!("history entries are numbered from 1");
                }
                let mut session = open_session(&cfg, Some(&source)).await?;
                let reply = session.rerun(n - 1, chrono::Utc::now())?;
                println!("{}", render::render_reply(&reply, session.knowledge()));
            }
            HistoryCommand::Clear { yes } => {
                let mut session = open_session(&cfg, None).await?;
                if session.history().is_empty() {
                    println!("{}", render::render_history(session.history()));
                    return Ok(());
                }
                if !yes && !repl::confirm("Are you sure you want to clear your question history?")? {
                    println!("Kept {} entries.", session.history().len());
                    return Ok(());
                }
                session.clear_history()?;
                println!("History cleared.");
            }
        },

        Command::Modules => {
            let kb = source.load().await?;
            println!("{}", render::render_modules(&kb));
        }

        Command::InitConfig => config::init_config()?,
    }

    Ok(())
}

/// Build the session: history from disk, course data from `source`.
///
/// A failed load leaves the session without course data; questions then
/// report that data is still loading instead of aborting.
async fn open_session(cfg: &Config, source: Option<&CourseSource>) -> Result<Session> {
    let matcher = Matcher::new(cfg.match_policy())?;
    let history_file = state::history_path()?;
    let history = state::read_history(&history_file, cfg.history.limit)?;

    let knowledge = match source {
        Some(src) => load_knowledge(src).await,
        None => None,
    };

    Ok(Session::new(knowledge, history, matcher).with_history_file(history_file))
}

async fn load_knowledge(source: &CourseSource) -> Option<KnowledgeBase> {
    match source.load().await {
        Ok(kb) => {
            info!(%source, modules = kb.len(), "course data ready");
            Some(kb)
        }
        Err(e) => {
            error!(%source, error = %format!("{e:#}"), "failed to load course data");
            eprintln!("Failed to load course data from {source}: {e:#}");
            None
        }
    }
}
