use std::{io, path::PathBuf, process};

use clap::Parser;
use log::{error, info, warn};

use pitwall::{
    AppConfig, OpenF1Provider, PitwallError, RaceSelection, SessionKind, SessionProvider,
    StrategyChart,
    strategy::{parse_selection, prompt_for_race},
    ui::show_strategy_chart,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory used to cache provider responses
    #[arg(short, long)]
    cache_dir: Option<PathBuf>,

    /// Grand Prix to show (1-14), skips the prompt
    #[arg(short, long)]
    race: Option<String>,
}

fn select_race(preselected: Option<&str>) -> Result<RaceSelection, PitwallError> {
    if let Some(input) = preselected {
        match parse_selection(input) {
            Ok(selection) => return Ok(selection),
            Err(PitwallError::InvalidSelection { reason, .. }) => println!("{}", reason),
            Err(e) => return Err(e),
        }
    }
    prompt_for_race(&mut io::stdin().lock(), &mut io::stdout())
}

fn run(args: &Args) -> Result<(), PitwallError> {
    let mut config = match AppConfig::from_local_file() {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            AppConfig::default()
        }
    };
    if let Some(cache_dir) = &args.cache_dir {
        config.cache_dir = cache_dir.clone();
    }

    let selection = select_race(args.race.as_deref())?;
    info!("Selected {} (round {})", selection.name, selection.round);

    let provider = OpenF1Provider::from_config(&config)?;
    let session = provider.fetch_session(selection.season, selection.round, SessionKind::Race)?;

    let chart = StrategyChart::build(&session, selection.name);
    show_strategy_chart(chart, &config)
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
