use std::{path::PathBuf, sync::atomic::Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

use stakeholder::{
    Logging, PROJECT_NAME, PROJECT_VERSION, Profile, Rng, Session, SessionArgs, SessionConfig,
    progress::StdoutTerminal,
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Profile to read instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_debug_mode(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

fn main() -> Result<()> {
    let args = UserArgs::parse();

    init_logging(args.verbose)?;
    info!("{PROJECT_NAME} {PROJECT_VERSION} starting");

    let profile = Profile::load(args.config.as_deref())?;
    let config = SessionConfig::resolve(&args.session, profile);

    let mut screen = StdoutTerminal::new();
    screen.clear_screen().context("Unable to clear the screen")?;

    let mut session = Session::new(config, Rng::new(args.seed));

    // Ctrl-C ends the session at the next step so open bars finish cleanly.
    let shutdown = session.shutdown_handle();
    ctrlc::set_handler(move || {
        shutdown.store(true, Ordering::SeqCst);
    })
    .context("Unable to install the Ctrl-C handler")?;

    let ret = session.run();

    screen.clear_screen().context("Unable to clear the screen")?;
    println!("{}", "Session terminated.".green());

    ret
}
