use crate::catalog::{load_courses, Catalog};
use crate::error::{AppError, Result};
use crate::report::{self, ReportFormat};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use std::fmt;
use std::io::Write;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Menu lines shown by the interactive shell, in display order.
pub const MENU_LINES: [&str; 4] = [
    "1. Load Data Structure.",
    "2. Print Course List.",
    "3. Print Course.",
    "9. Exit",
];

/// CLI tool for browsing a course catalog and its prerequisites
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to load before running
    #[arg(short, long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format for course reports
    #[arg(short, long, global = true, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Print every course in course-number order (requires --data-file)
    List,

    /// Print one course and its prerequisites (requires --data-file)
    Show {
        /// Course number to look up, e.g. CSCI201
        course_number: String,
    },
}

/// A choice typed at the interactive menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

/// Returned when the menu input is not one of the listed options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMenuChoice(pub String);

impl fmt::Display for InvalidMenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid option.", self.0)
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidMenuChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(1) => Ok(MenuChoice::Load),
            Ok(2) => Ok(MenuChoice::List),
            Ok(3) => Ok(MenuChoice::Show),
            Ok(9) => Ok(MenuChoice::Exit),
            _ => Err(InvalidMenuChoice(s.trim().to_string())),
        }
    }
}

/// A fully-prompted menu action, ready to run against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Load(PathBuf),
    List,
    Show(String),
    Exit,
}

/// CLI application state. Owns the single catalog for the session.
pub struct App {
    catalog: Catalog,
    format: ReportFormat,
}

impl App {
    /// Create a new CLI application with an empty catalog
    pub fn new(format: ReportFormat) -> Self {
        Self {
            catalog: Catalog::new(),
            format,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load a catalog file into the session catalog, returning the number of courses added.
    ///
    /// A failed load leaves whatever was inserted before the bad line in place.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        load_courses(path, &mut self.catalog).map_err(AppError::from)
    }

    /// Run a non-interactive subcommand. Requires the catalog to be loaded already.
    pub fn run<W: Write>(&self, command: &Commands, out: &mut W) -> Result<()> {
        match command {
            Commands::Menu => Err(AppError::Cli(
                "The interactive menu cannot be run as a one-shot command".to_string(),
            )),
            Commands::List => report::list_all(&self.catalog, self.format, out),
            Commands::Show { course_number } => {
                report::describe(&self.catalog, course_number, self.format, out)?;
                Ok(())
            },
        }
    }

    /// Run one menu action, writing user-facing messages to `out`.
    ///
    /// Load failures are reported to `out` and do not end the session; only
    /// I/O errors on `out` itself are returned.
    pub fn run_menu_action<W: Write>(
        &mut self,
        action: &MenuAction,
        out: &mut W,
    ) -> Result<ControlFlow<()>> {
        match action {
            MenuAction::Load(path) => match self.load(path) {
                Ok(count) => {
                    info!("Loaded {} courses from {}", count, path.display());
                    writeln!(
                        out,
                        "Courses loaded successfully from {}. ({} added, {} total)",
                        path.display(),
                        count,
                        self.catalog.len()
                    )?;
                },
                Err(e) => {
                    warn!("Loading {} failed: {}", path.display(), e);
                    writeln!(out, "ERROR: {e}")?;
                },
            },
            MenuAction::List => {
                if self.catalog.is_empty() {
                    writeln!(out, "Load the data first.")?;
                } else {
                    report::list_all(&self.catalog, self.format, out)?;
                }
            },
            MenuAction::Show(number) => {
                report::describe(&self.catalog, number, self.format, out)?;
            },
            MenuAction::Exit => {
                writeln!(out, "Thank you for using the course planner!")?;
                return Ok(ControlFlow::Break(()));
            },
        }

        Ok(ControlFlow::Continue(()))
    }
}

/// Prompt for the menu selection as free text.
pub fn prompt_menu_choice() -> Result<std::result::Result<MenuChoice, InvalidMenuChoice>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .interact_text()?;
    Ok(input.parse())
}

/// Prompt for the path of a catalog file.
pub fn prompt_file_path() -> Result<PathBuf> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the file name")
        .interact_text()?;
    Ok(PathBuf::from(input.trim()))
}

/// Prompt for a course number to look up.
pub fn prompt_course_number() -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What course do you want to know about?")
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Turn a menu choice into an action, prompting for whatever it needs.
pub fn prompt_action(choice: MenuChoice) -> Result<MenuAction> {
    Ok(match choice {
        MenuChoice::Load => MenuAction::Load(prompt_file_path()?),
        MenuChoice::List => MenuAction::List,
        MenuChoice::Show => MenuAction::Show(prompt_course_number()?),
        MenuChoice::Exit => MenuAction::Exit,
    })
}
