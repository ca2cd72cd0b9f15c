use clap::{Parser, Subcommand};
use registry_console::render::{write_field_errors, write_information, write_patient_list};
use registry_console::Console;
use registry_core::config::load_submissions;
use registry_core::{CoreConfig, PatientManagement, SubmitOutcome};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "registry")]
#[command(about = "Patient registration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Say hi
    Hi,
    /// Register patients interactively
    Session {
        /// JSON file of submissions to register before the session starts
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Register every submission in a JSON file and report the results
    Import {
        /// JSON array of {name, age, gender, condition, lastVisit}
        file: PathBuf,
        /// Print all registered patients at the end
        #[arg(long)]
        list: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registry=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Hi) => {
            println!("hi");
        }
        Some(Commands::Session { seed }) => {
            let cfg = CoreConfig::new(seed)?;
            let mut app = PatientManagement::new();
            let seeded = app.register_all(&cfg.load_seed()?);
            tracing::info!("seeded {} submissions", seeded.len());

            let stdin = io::stdin();
            let mut console = Console::new(app, stdin.lock(), io::stdout());
            console.run()?;
        }
        Some(Commands::Import { file, list }) => {
            let submissions = load_submissions(&file)?;
            let mut app = PatientManagement::new();
            let outcomes = app.register_all(&submissions);

            let mut out = io::stdout().lock();
            for (index, outcome) in outcomes.into_iter().enumerate() {
                writeln!(out, "#{}", index + 1)?;
                match outcome {
                    Ok(SubmitOutcome::Registered(record)) => {
                        app.show(record.patient_id().clone());
                        if let Some(display) = app.display() {
                            write_information(&mut out, display)?;
                        }
                    }
                    Ok(SubmitOutcome::Rejected(errors)) => {
                        writeln!(out, "Rejected:")?;
                        write_field_errors(&mut out, &errors)?;
                    }
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }

            if list {
                writeln!(out)?;
                write_patient_list(&mut out, &app.store().list())?;
            }
        }
        None => {
            println!("Use 'registry --help' for commands");
        }
    }

    Ok(())
}
