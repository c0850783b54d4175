mod catalog;
mod cli;
mod error;
mod models;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli, Commands, MenuAction, MENU_LINES};
use colored::*;
use error::{AppError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.log_file.as_deref())?;

    info!("Starting course planner...");

    let mut app = App::new(cli.format);
    let command = cli.command.unwrap_or(Commands::Menu);

    if let Some(path) = cli.data_file.as_deref() {
        preload(&mut app, path, &command, &mut io::stdout().lock())?;
    }

    match command {
        Commands::Menu => run_menu(&mut app)?,
        command => {
            if cli.data_file.is_none() {
                return Err(AppError::Cli(
                    "--data-file is required for one-shot commands".to_string(),
                )
                .into());
            }
            app.run(&command, &mut io::stdout().lock())?;
        },
    }

    Ok(())
}

/// Load `--data-file` before dispatching `command`.
///
/// In menu mode a failed load is reported like menu option 1 and the menu
/// still starts with whatever was loaded. One-shot commands fail instead.
fn preload<W: Write>(
    app: &mut App,
    path: &Path,
    command: &Commands,
    out: &mut W,
) -> anyhow::Result<()> {
    if *command == Commands::Menu {
        app.run_menu_action(&MenuAction::Load(path.to_path_buf()), out)?;
        return Ok(());
    }

    let count = app
        .load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    info!(
        "Preloaded {} courses from {} ({} in catalog)",
        count,
        path.display(),
        app.catalog().len()
    );
    Ok(())
}

/// Initialize logging to stderr, and to `log_file` as well when given.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Main interactive loop. Runs until the user picks Exit.
fn run_menu(app: &mut App) -> Result<()> {
    println!("{}", "Welcome to the course planner.".cyan().bold());

    loop {
        for line in MENU_LINES {
            println!("{line}");
        }

        let choice = match cli::prompt_menu_choice()? {
            Ok(choice) => choice,
            Err(invalid) => {
                println!("{}", invalid.to_string().yellow());
                continue;
            },
        };

        let action = match cli::prompt_action(choice) {
            Ok(action) => action,
            Err(e) => {
                println!("{} {}", "Failed to get input:".red(), e);
                continue;
            },
        };

        let flow = match &action {
            MenuAction::Load(path) => {
                let (flow, output) = with_spinner(&format!("Loading {}", path.display()), |out| {
                    app.run_menu_action(&action, out)
                })?;
                io::stdout().write_all(&output)?;
                flow
            },
            _ => app.run_menu_action(&action, &mut io::stdout().lock())?,
        };

        if flow == ControlFlow::Break(()) {
            break;
        }

        println!(); // Spacing before the menu is shown again
    }

    Ok(())
}

/// Run `f` while showing a spinner on stderr.
///
/// `f` writes its user-facing output into a buffer, which is returned once the
/// spinner line has been cleared so the two never share a terminal line.
fn with_spinner<T>(
    message: &str,
    f: impl FnOnce(&mut Vec<u8>) -> Result<T>,
) -> Result<(T, Vec<u8>)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut output = Vec::new();
    let result = f(&mut output);
    spinner.finish_and_clear();

    match result {
        Ok(value) => Ok((value, output)),
        Err(e) => {
            error!("{}", e);
            Err(e)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_spinner_returns_buffered_output() {
        let (value, output) = with_spinner("Loading test", |out| {
            writeln!(out, "Courses loaded successfully from test.")?;
            Ok(3)
        })
        .unwrap();

        assert_eq!(value, 3);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Courses loaded successfully from test.\n"
        );
    }

    #[test]
    fn test_spinner_load_output_is_not_written_through() {
        let file = catalog_file("CSCI101,Intro to Programming\n");
        let mut app = App::new(report::ReportFormat::Text);
        let action = MenuAction::Load(file.path().to_path_buf());

        let (flow, output) =
            with_spinner("Loading", |out| app.run_menu_action(&action, out)).unwrap();

        assert_eq!(flow, ControlFlow::Continue(()));
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("Courses loaded successfully from"));
        assert_eq!(app.catalog().len(), 1);
    }

    #[test]
    fn test_menu_preload_failure_is_reported_not_fatal() {
        let file = catalog_file("CSCI101,Intro\nBROKEN\nCSCI201,Data Structures\n");
        let mut app = App::new(report::ReportFormat::Text);
        let mut out = Vec::new();

        preload(&mut app, file.path(), &Commands::Menu, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("ERROR:"));
        assert!(output.contains("BROKEN"));
        assert_eq!(app.catalog().len(), 1);
    }

    #[test]
    fn test_menu_preload_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(report::ReportFormat::Text);
        let mut out = Vec::new();

        preload(&mut app, &dir.path().join("missing.csv"), &Commands::Menu, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("File does not exist"));
        assert!(app.catalog().is_empty());
    }

    #[test]
    fn test_one_shot_preload_failure_is_fatal() {
        let file = catalog_file("BROKEN\n");
        let mut app = App::new(report::ReportFormat::Text);
        let mut out = Vec::new();

        let err = preload(&mut app, file.path(), &Commands::List, &mut out).unwrap_err();

        assert!(err.to_string().contains("Failed to load"));
        assert!(out.is_empty());
    }
}
