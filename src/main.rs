use std::process;

use cltools::cli::commands::{parse, report, report_outcome, run};
use cltools::cli::output;
use cltools::config::Settings;
use cltools::exitcode;
use cltools::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e);
            process::exit(exitcode::CONFIG);
        }
    };

    let container = match ServiceContainer::new(settings) {
        Ok(container) => container,
        Err(e) => {
            output::error(&e);
            process::exit(exitcode::SOFTWARE);
        }
    };

    let invocation = match parse(&container, std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            report(&container, &e);
            process::exit(e.exit_code());
        }
    };

    setup_logging(invocation.verbose(), invocation.debug_log());

    match run(&container, &invocation) {
        Ok(outcome) => {
            report_outcome(&outcome);
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            report(&container, &e);
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbose: bool, debug_log: bool) {
    let filter = match (verbose, debug_log) {
        (false, false) => LevelFilter::WARN,
        (true, false) => LevelFilter::INFO,
        (false, true) => LevelFilter::DEBUG,
        (true, true) => LevelFilter::TRACE,
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug_log)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
