//! SU2Run: drive SU2 CFD calculations from aircraft-design settings.

use su2run_cli::presenter::CLIResultPresenter;
use su2run_lib::{app, config, errors};
use su2run_orchestration::interfaces::ResultPresenter;

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        CLIResultPresenter::new(config.verbose, config.quiet).present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
