//! # CLI Layer
//!
//! One possible presentation layer for sift. It builds a [`VisibilityController`], forwards
//! flags or session events to it and prints whatever it reports back.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_controller()`: Loads config and the catalog source
//! - `handle_*()`: Per-command handlers
//! - `SessionEvent`: One line of `sift session` input

use super::render::{print_messages, render_tab_row, render_view, render_view_json};
use super::setup::{Cli, Commands, ViewArgs};
use clap::Parser;
use directories::ProjectDirs;
use sift::api::{self, CmdMessage, ConfigAction, MessageLevel, VisibilityController};
use sift::config::SiftConfig;
use sift::error::{Result, SiftError};
use sift::model::Tab;
use sift::store::demo::DemoSource;
use sift::store::fs::JsonFileSource;
use sift::store::RecordSource;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let home = sift_home()?;
    debug!(home = %home.display(), "using sift home");

    match cli.command {
        Some(Commands::List { ref view }) => handle_list(&cli, &home, view),
        Some(Commands::Tabs { ref view }) => handle_tabs(&cli, &home, view),
        Some(Commands::Session) => handle_session(&cli, &home),
        Some(Commands::Demo { ref output }) => handle_demo(output.clone()),
        Some(Commands::Config { ref key, ref value }) => {
            handle_config(&home, key.clone(), value.clone())
        }
        None => handle_list(&cli, &home, &ViewArgs::default()),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = std::env::var("RUST_LOG").map_or_else(
        |_| {
            let level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(level)
        },
        EnvFilter::new,
    );

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `$SIFT_HOME`, or the platform data directory.
fn sift_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("SIFT_HOME") {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "sift", "sift")
        .ok_or_else(|| SiftError::Api("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn init_controller(cli: &Cli, home: &Path) -> Result<VisibilityController> {
    let config = SiftConfig::load(home)?;
    let catalog_path = if cli.demo {
        None
    } else {
        cli.catalog.clone().or_else(|| config.catalog.clone())
    };

    let controller = match catalog_path {
        Some(path) => load_from(&JsonFileSource::new(path))?,
        None => load_from(&DemoSource::new())?,
    };
    Ok(controller.with_config(&config))
}

fn load_from<S: RecordSource>(source: &S) -> Result<VisibilityController> {
    info!(source = %source.describe(), "loading catalog");
    VisibilityController::from_source(source)
}

/// Hide, then search, then select: selecting a tab hidden by `--hide` is an error.
/// Returns the warnings raised by hides that had nothing to do.
fn apply_view_args(
    controller: &mut VisibilityController,
    view: &ViewArgs,
) -> Result<Vec<CmdMessage>> {
    let mut warnings = Vec::new();
    for name in &view.hide {
        let tab: Tab = name.parse()?;
        let result = controller.hide_category(tab);
        warnings.extend(
            result
                .messages
                .into_iter()
                .filter(|m| m.level == MessageLevel::Warning),
        );
    }
    if let Some(text) = &view.search {
        controller.set_search_text(text.as_str());
    }
    if let Some(tab) = &view.tab {
        controller.select_category_named(tab)?;
    }
    Ok(warnings)
}

fn handle_list(cli: &Cli, home: &Path, view: &ViewArgs) -> Result<()> {
    let mut controller = init_controller(cli, home)?;
    let warnings = apply_view_args(&mut controller, view)?;
    print_messages(&warnings);

    if view.json {
        println!("{}", render_view_json(&controller, true)?);
    } else {
        print!("{}", render_view(&controller));
    }
    Ok(())
}

fn handle_tabs(cli: &Cli, home: &Path, view: &ViewArgs) -> Result<()> {
    let mut controller = init_controller(cli, home)?;
    let warnings = apply_view_args(&mut controller, view)?;
    print_messages(&warnings);

    if view.json {
        println!("{}", render_view_json(&controller, false)?);
    } else {
        println!("{}", render_tab_row(&controller.tabs()));
    }
    Ok(())
}

fn handle_session(cli: &Cli, home: &Path) -> Result<()> {
    let mut controller = init_controller(cli, home)?;
    print!("{}", render_view(&controller));

    for line in io::stdin().lock().lines() {
        let line = line?;
        let event = match SessionEvent::parse(&line) {
            Ok(Some(SessionEvent::Quit)) => break,
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match event.apply(&mut controller) {
            Ok(result) => {
                print_messages(&result.messages);
                print!("{}", render_view(&controller));
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}

fn handle_demo(output: Option<PathBuf>) -> Result<()> {
    let records = DemoSource::new().records();
    match output {
        Some(path) => {
            JsonFileSource::new(&path).save(&records)?;
            println!("Wrote {} records to {}", records.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

fn handle_config(home: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = api::config(home, action)?;
    print_messages(&result.messages);
    Ok(())
}

/// A user event typed into `sift session`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionEvent {
    Search(String),
    Clear,
    Toggle(String),
    Select(String),
    Settings,
    View,
    Quit,
}

impl SessionEvent {
    /// Blank lines yield `None`. The search text is everything after `search `, untrimmed.
    fn parse(line: &str) -> Result<Option<Self>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let event = match verb {
            "search" => SessionEvent::Search(rest.to_string()),
            "clear" => SessionEvent::Clear,
            "toggle" => SessionEvent::Toggle(rest.trim().to_string()),
            "select" => SessionEvent::Select(rest.trim().to_string()),
            "settings" => SessionEvent::Settings,
            "view" => SessionEvent::View,
            "quit" | "exit" => SessionEvent::Quit,
            other => return Err(SiftError::Api(format!("Unknown event: {}", other))),
        };
        Ok(Some(event))
    }

    fn apply(self, controller: &mut VisibilityController) -> Result<api::CmdResult> {
        match self {
            SessionEvent::Search(text) => Ok(controller.set_search_text(text)),
            SessionEvent::Clear => Ok(controller.clear_search()),
            SessionEvent::Toggle(name) => controller.toggle_category_named(&name),
            SessionEvent::Select(name) => controller.select_category_named(&name),
            SessionEvent::Settings => Ok(controller.toggle_dropdown()),
            SessionEvent::View | SessionEvent::Quit => Ok(api::CmdResult::default()),
        }
    }
}
