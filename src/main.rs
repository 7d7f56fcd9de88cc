use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{
    Parser, 
    Subcommand
};
use tracing::error;
use tracing_subscriber::EnvFilter;

use leavecal::configuration::Configuration;
use leavecal::easter;
use leavecal::leave::leavesummary::LeaveSummary;
use leavecal::manager::managererror::ManagerError;
use leavecal::time::calendar::holidaycalendar::HolidayCalendar;
use leavecal::time::calendar::holidaycalendarmanager::KENYA_WITH_MAZINGIRA_DAY;
use leavecal::time::calendar::jurisdictioncalendar::KENYA;
use leavecal::time::holidayreport::HolidayReport;

#[derive(Parser)]
#[command(name = "leavecal", version, about = "Public holidays and working-day counts for leave requests")]
struct Cli {
    /// JSON file with additional holiday calendar definitions
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Calendar to use (defaults to Kenya)
    #[arg(long, global = true)]
    calendar: Option<String>,

    /// Include Mazingira Day (Oct 10) when no calendar is named
    #[arg(long, global = true)]
    mazingira: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {
    /// List the public holidays of a year
    Holidays { year: i32 },
    /// Count working days between two dates, both inclusive (YYYY-MM-DD)
    WorkingDays { start: NaiveDate, end: NaiveDate },
    /// Print the date of Easter Sunday
    Easter { year: i32 }
}

fn select_calendar(cli: &Cli) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let mut configuration = Configuration::new();
    if let Some(path) = &cli.config {
        configuration.from_reader(path)?;
    }
    let name = match (&cli.calendar, cli.mazingira) {
        (Some(name), _) => name.as_str(),
        (None, true) => KENYA_WITH_MAZINGIRA_DAY,
        (None, false) => KENYA
    };
    configuration.holiday_calendar(name)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Easter { year } => {
            match easter(*year) {
                Some(date) if cli.json => println!("{}", serde_json::to_string(&date)?),
                Some(date) => println!("{}", date.format("%d %B %Y (%A)")),
                None => return Err(format!("year {year} is out of range").into())
            }
        },
        Command::Holidays { year } => {
            let calendar = select_calendar(cli)?;
            let holiday_set = calendar.holidays_for_year(*year);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&holiday_set)?);
            } else {
                print!("{}", HolidayReport::new(calendar.name(), &holiday_set));
            }
        },
        Command::WorkingDays { start, end } => {
            let calendar = select_calendar(cli)?;
            let summary = LeaveSummary::compute(&*calendar, *start, *end);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.working_days());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
