#![warn(rust_2024_compatibility, clippy::all)]
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use catalog::add::run_add;
use catalog::cli::{Args, Command};
use catalog::config::Session;
use catalog::delete::run_delete;
use catalog::init::run_init;
use catalog::list::{run_list, run_show};
use catalog::output::report_error;
use catalog::update::run_update;

fn main() -> ExitCode {
    // Log to stderr only; stdout carries product output (and JSON with --json)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(args: Args) -> Result<()> {
    let (opts, command) = args.split();
    match command {
        Command::Init(init) => run_init(init),
        Command::List => run_list(&Session::resolve(&opts)?),
        Command::Show(show) => run_show(show, &Session::resolve(&opts)?),
        Command::Add(add) => run_add(add, &Session::resolve(&opts)?),
        Command::Update(update) => run_update(update, &Session::resolve(&opts)?),
        Command::Delete(delete) => run_delete(delete, &Session::resolve(&opts)?),
    }
}
