use std::ffi::OsString;

use clap::Parser;
use td_core::{Domain, TermDrillError};

mod agent;
mod catalog_cmd;
mod catalog_loader;
mod cli_args;
mod error_map;
mod line_tui;
mod models;
mod session_ops;
mod tui;
mod tui_actions;
mod tui_render;
mod tui_state;
mod update_emitter;

pub(crate) use catalog_loader::{load_catalog_file, read_catalogs_from_dir, resolve_catalog_dir};
pub(crate) use cli_args::{
    AgentArgs, CatalogArgs, CatalogCommand, CheckArgs, Cli, ListArgs, MatcherArg, Mode,
    SessionArgs, TuiArgs,
};
#[cfg(test)]
pub(crate) use cli_args::DomainArg;
pub(crate) use error_map::{
    emit_error, map_cli_catalog_path, map_cli_catalog_read, map_cli_catalog_scan, map_cli_io,
    map_cli_output_encode, map_tui_io,
};
pub(crate) use line_tui::run_tui_line_mode;
pub(crate) use models::{SessionCommand, SessionEvent, SessionUpdate, SESSION_COMMANDS_HELP};
pub(crate) use session_ops::{
    apply_session_command, create_engine_for_session, parse_session_command, progress_line,
    started_update,
};
pub(crate) use update_emitter::emit_update;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, TermDrillError> {
    match cli.command {
        Mode::Agent(args) => agent::run_agent(args),
        Mode::Tui(args) => run_tui(args),
        Mode::Catalog(args) => catalog_cmd::run_catalog(args),
    }
}

fn run_tui(args: TuiArgs) -> Result<i32, TermDrillError> {
    let mut engine = create_engine_for_session(&args.session)?;
    tracing::info!(
        domain = Domain::from(args.session.domain).as_str(),
        matcher = engine.matcher_name(),
        "starting tui"
    );
    tui::run_tui_ratatui_mode(&mut engine)
}

#[cfg(test)]
mod cli_test_support {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::{DomainArg, MatcherArg, SessionArgs};

    pub(crate) const SMALL_CATALOG: &str = r#"{
  "title": "Warmup",
  "scenarios": [
    {
      "title": "List Containers",
      "classification": "Intermediate",
      "description": "Show what is running.",
      "steps": [
        {
          "prompt": "List running containers.",
          "acceptedCommands": ["docker ps"],
          "hint": "Try docker ps",
          "successMessage": "Containers listed.",
          "output": "CONTAINER ID   IMAGE   STATUS"
        }
      ]
    }
  ]
}"#;

    pub(crate) fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("termdrill-{}-{}", name, nanos))
    }

    pub(crate) fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent should be created");
        }
        fs::write(path, content).expect("file should be written");
    }

    pub(crate) fn session_args(domain: DomainArg) -> SessionArgs {
        SessionArgs {
            domain,
            catalog: None,
            matcher: MatcherArg::Substring,
        }
    }
}
