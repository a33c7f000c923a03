use std::{io, path::PathBuf, process};

use clap::Parser;
use claby::dims::Dims;
use laby::{
    app::{self, Options},
    error::Error,
    logging,
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "laby")]
struct Args {
    #[clap(help = "Number of rows, odd and at least 3")]
    rows: Option<u16>,
    #[clap(help = "Number of columns, odd and at least 3")]
    cols: Option<u16>,
    #[clap(short, long, help = "Seed for the maze generator")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the maze without colors")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Show more log messages, repeat for even more")]
    verbose: u8,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    better_panic::install();

    let mut settings = Settings::load(&settings_path)?;
    if args.no_color {
        settings = settings.set_color(false);
        colored::control::set_override(false);
    }

    let level = settings.get_log_level().raised(args.verbose);
    logging::init(level.into(), settings.get_color())?;
    log::debug!("Using settings from {:?}", settings_path);

    let size = match (args.rows, args.cols) {
        (Some(rows), Some(cols)) => Some(Dims::from((rows, cols))),
        (None, None) => None,
        _ => return Err(Error::Input("both rows and columns are needed".into())),
    };

    app::run(
        &settings,
        Options {
            size,
            seed: args.seed,
        },
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )
}
