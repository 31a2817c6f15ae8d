//! Command-line front end for the contact tracker.
//!
//! # Usage
//!
//! ```bash
//! # List contacts by section, with calendar markers
//! cadence_cli list
//!
//! # Add a contact; the name defaults to the next "Contact N"
//! cadence_cli add Bi-Weekly 2024-03-01 --name "Dentist"
//!
//! # Reschedule, dispose, restore or remove by id
//! cadence_cli edit <id> Monthly 2024-04-01
//! cadence_cli dispose <id>
//! cadence_cli undo <id>
//! cadence_cli delete <id>
//! ```

use cadence_core::db::open_db;
use cadence_core::{
    core_version, init_logging, Cadence, Contact, ContactId, ContactService, ContactServiceError,
    ContactSnapshot, CoreConfig, SqliteContactStore, StoreOutcome, ISO_DATE_FORMAT,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cadence_cli")]
#[command(author, version, about = "Track how often you keep in touch")]
struct Cli {
    /// Defaults to `list`.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show contacts grouped by status
    List,
    /// Create an active contact
    Add {
        #[arg(value_enum, ignore_case = true)]
        cadence: CadenceArg,

        /// Start date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        start_date: NaiveDate,

        /// Display name; suggested when omitted
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Replace cadence and start date
    Edit {
        id: String,

        #[arg(value_enum, ignore_case = true)]
        cadence: CadenceArg,

        /// Start date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        start_date: NaiveDate,
    },
    /// Mark a contact as expired
    Dispose { id: String },
    /// Reactivate a disposed contact
    Undo { id: String },
    /// Remove a contact
    Delete { id: String },
    /// Print the core library version
    Version,
}

/// Cadences accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CadenceArg {
    Daily,
    Weekly,
    #[value(name = "Bi-Weekly")]
    BiWeekly,
    Monthly,
}

impl From<CadenceArg> for Cadence {
    fn from(value: CadenceArg) -> Self {
        match value {
            CadenceArg::Daily => Self::Daily,
            CadenceArg::Weekly => Self::Weekly,
            CadenceArg::BiWeekly => Self::BiWeekly,
            CadenceArg::Monthly => Self::Monthly,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command.unwrap_or(Command::List)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    if let Command::Version = command {
        println!("cadence_core version={}", core_version());
        return Ok(());
    }

    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path).map_err(|err| format!("database open failed: {err}"))?;
    let mut service = ContactService::new(SqliteContactStore::new(&conn));

    match command {
        Command::List | Command::Version => {}
        Command::Add {
            cadence,
            start_date,
            name,
        } => report("created", service.create(name, cadence.into(), start_date))?,
        Command::Edit {
            id,
            cadence,
            start_date,
        } => report(
            "edited",
            service.edit(&ContactId::new(id), cadence.into(), start_date),
        )?,
        Command::Dispose { id } => report("disposed", service.dispose(&ContactId::new(id)))?,
        Command::Undo { id } => report("restored", service.undo(&ContactId::new(id)))?,
        Command::Delete { id } => match service.delete(&ContactId::new(id.clone())) {
            Ok(StoreOutcome::Applied(())) => println!("deleted {id}"),
            Ok(StoreOutcome::Unavailable) => println!("store unavailable; nothing deleted"),
            Err(err) => return Err(err.to_string()),
        },
    }

    if service.is_dirty() {
        match service.load() {
            StoreOutcome::Applied(snapshot) => render(&snapshot),
            StoreOutcome::Unavailable => {
                return Err("store unavailable; showing nothing".to_string())
            }
        }
    }
    Ok(())
}

fn report(
    verb: &str,
    result: Result<StoreOutcome<Contact>, ContactServiceError>,
) -> Result<(), String> {
    match result {
        Ok(StoreOutcome::Applied(contact)) => {
            println!("{verb} {}", describe(&contact));
            Ok(())
        }
        Ok(StoreOutcome::Unavailable) => {
            println!("store unavailable; nothing {verb}");
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}

fn render(snapshot: &ContactSnapshot) {
    for section in snapshot.sections() {
        println!("{} ({})", section.title, section.contacts.len());
        for contact in &section.contacts {
            println!("  {}", describe(contact));
        }
    }

    if !snapshot.markers.is_empty() {
        println!("Calendar");
        for (date, marker) in &snapshot.markers {
            let colors = marker
                .colors
                .iter()
                .map(|color| color.hex())
                .collect::<Vec<_>>()
                .join(",");
            println!(
                "  {} {} [{}]",
                date.format(ISO_DATE_FORMAT),
                marker.color.hex(),
                colors
            );
        }
    }

    for warning in &snapshot.warnings {
        println!("warning: {warning}");
    }
}

fn describe(contact: &Contact) -> String {
    format!(
        "{} {} - {} (Expires: {}) [{}]",
        contact.id, contact.name, contact.cadence, contact.expiry_date, contact.status
    )
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}
