use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registry_console::Console;
use registry_core::constants::SEED_FILE_ENV;
use registry_core::{CoreConfig, PatientManagement, SubmitOutcome};

/// Main entry point for the patient registry
///
/// Resolves configuration, registers any seed submissions, then runs the
/// interactive registration session on stdin/stdout. Logs go to stderr so
/// they never interleave with the form.
///
/// # Environment Variables
/// - `REGISTRY_SEED_FILE`: optional JSON array of submissions registered at startup
/// - `RUST_LOG`: log filter (default directive: "registry=info")
///
/// # Errors
/// Returns an error if:
/// - the logging configuration cannot be initialised,
/// - the seed file is missing or malformed, or
/// - reading from or writing to the terminal fails.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registry=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = CoreConfig::from_env_value(std::env::var(SEED_FILE_ENV).ok())?;

    let mut app = PatientManagement::new();
    let seed = cfg.load_seed()?;
    if !seed.is_empty() {
        let registered = app
            .register_all(&seed)
            .into_iter()
            .filter(|outcome| matches!(outcome, Ok(SubmitOutcome::Registered(_))))
            .count();
        tracing::info!(
            "++ Seeded {} of {} submissions from {}",
            registered,
            seed.len(),
            cfg.seed_file().map(|p| p.display().to_string()).unwrap_or_default()
        );
    }

    tracing::info!("++ Starting patient registry session");

    let stdin = io::stdin();
    let mut console = Console::new(app, stdin.lock(), io::stdout());
    console.run()?;

    Ok(())
}
