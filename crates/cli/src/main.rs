// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod sink;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context, eyre::eyre};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use travel_portal::{Command, Session, SubmitOutcome};
use travel_portal_advisory::TracingNotifier;
use travel_portal_domain::{FormStep, RateTable};

use crate::config::{load_rates, load_script};
use crate::sink::LoggingSink;

/// Travel Portal - replays request edits and validates the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON array of commands to replay against a new request.
    #[arg(short, long)]
    script: PathBuf,

    /// Path to a JSON object of allowance category label to daily rate.
    /// If not provided, uses the standard rate table.
    #[arg(short, long)]
    rates: Option<PathBuf>,

    /// Submit the request after replaying the script.
    #[arg(long)]
    submit: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let rates: RateTable = load_rates(args.rates.as_deref()).wrap_err("Failed to load rates")?;
    let commands: Vec<Command> = load_script(&args.script).wrap_err("Failed to load script")?;

    info!(
        script = %args.script.display(),
        commands = commands.len(),
        "Replaying script"
    );

    let mut session: Session<TracingNotifier> = Session::new(rates, TracingNotifier);
    let mut rejected: usize = 0;

    for (index, command) in commands.into_iter().enumerate() {
        let name: &'static str = command.name();
        if let Err(err) = session.dispatch(command) {
            rejected += 1;
            error!(index, command = name, "Command rejected: {err}");
        }
    }

    for step in FormStep::ALL {
        info!(
            step = %step,
            complete = session.is_step_complete(step),
            "Step status"
        );
    }

    info!(
        nights = session.request().nights(),
        allowances = session.request().allowances.len(),
        cost_estimate = %session.cost_estimate(),
        rejected,
        "Replay finished"
    );

    let json: String = serde_json::to_string_pretty(session.request())
        .wrap_err("Failed to serialize request")?;
    println!("{json}");

    if !args.submit {
        return Ok(());
    }

    let mut sink: LoggingSink = LoggingSink::default();
    match session.submit(&mut sink)? {
        SubmitOutcome::Submitted => {
            info!(submitted = sink.submitted(), "Submission complete");
            Ok(())
        }
        SubmitOutcome::Rejected => {
            for (path, message) in session.errors().iter() {
                warn!(field = %path, "{message}");
            }
            Err(eyre!(
                "Submission rejected with {} validation error(s)",
                session.errors().len()
            ))
        }
    }
}
