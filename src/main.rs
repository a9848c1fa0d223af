use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use takelys::config::Config;
use takelys::logger::Logger;
use takelys::sort::{sort_by_field, SortOrder};
use takelys::{display_date, display_date_short, display_pretty_date, format_date, pages, DateLike, DateSpan};

const USAGE: &str = "Usage:
  takelys range <due> [start]       Label a due date or start/due range
  takelys short <date>              Day and month label
  takelys calendar <date>           YYYY-MM-DD calendar day (0 when empty)
  takelys pretty <date>             Relative label such as 'Vandag'
  takelys sort <field> [asc|desc]   Sort a JSON array read from stdin
  takelys new-task                  Print the blank task as JSON
  takelys init-config [path]        Write a default configuration file";

/// Numbers are epoch milliseconds, anything else is date text
fn date_arg(arg: &str) -> DateLike {
    match arg.parse::<i64>() {
        Ok(ms) => DateLike::Millis(ms),
        Err(_) => DateLike::from(arg),
    }
}

/// Bad or missing arguments; reported together with the usage text
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct UsageError(String);

fn usage_error(message: &str) -> Result<()> {
    Err(UsageError(message.to_string()).into())
}

fn run(config: &Config, args: &[String]) -> Result<()> {
    let command = args.first().map(String::as_str);
    let arg = |i: usize| args.get(i).map(String::as_str);

    match command {
        Some("range") => {
            let Some(due) = arg(1) else {
                return usage_error("range needs a due date");
            };
            let span = DateSpan::new(Some(date_arg(due)), arg(2).map(date_arg));
            println!("{}", display_date(&span));
        }
        Some("short") => println!("{}", display_date_short(arg(1).map(date_arg).as_ref())),
        Some("calendar") => println!("{}", format_date(arg(1).map(date_arg).as_ref())),
        Some("pretty") => println!("{}", display_pretty_date(arg(1).map(date_arg).as_ref())),
        Some("sort") => {
            let Some(field) = arg(1) else {
                return usage_error("sort needs a field name");
            };
            let order = match arg(2) {
                Some(order) => order.parse::<SortOrder>()?,
                None => config.sort.order()?,
            };

            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read records from stdin")?;
            let mut records: Vec<serde_json::Value> =
                serde_json::from_str(&input).context("Expected a JSON array of records on stdin")?;

            sort_by_field(&mut records, field, order);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Some("new-task") => println!("{}", serde_json::to_string_pretty(&pages::create::load())?),
        Some("init-config") => {
            let path = match arg(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
            println!("{}", path.display());
        }
        Some(other) => return usage_error(&format!("unknown command '{}'", other)),
        None => return usage_error("no command given"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = Config::load().and_then(|config| {
        Logger::init(&config.logging)?;
        log::debug!("Running with arguments: {:?}", args);
        run(&config, &args)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is::<UsageError>() => {
            eprintln!("❌ Error: {}\n\n{}", e, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
