use clap::{Args, Command, FromArgMatches};
use log::{error, info};

use tables_logger::{OptionGroup, TablesLoggerArgs};

/// Options of the command itself, outside of the tables logger group.
#[derive(Debug, Args)]
struct FrontEnd {
    /// Enable debug logging.{n}
    /// RUST_LOG takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// Print the resolved configuration as JSON on the standard output.
    #[arg(long)]
    dump_config: bool,
}

fn command() -> Command {
    let cmd = Command::new("tables-logger")
        .about("Check and resolve the options of an MPEG-TS table logger.")
        .author("maleicacid")
        .version(env!("CARGO_PKG_VERSION"));
    TablesLoggerArgs::default().register(FrontEnd::augment_args(cmd))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = command().get_matches();
    let front_end = FrontEnd::from_arg_matches(&matches)?;

    let level = if front_end.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let args = match TablesLoggerArgs::from_matches(&matches) {
        Ok(args) => args,
        Err(e) => {
            for violation in e.violations() {
                error!("{}", violation);
            }
            std::process::exit(1);
        }
    };

    if args.use_stdout() {
        info!("Tables will be displayed on the standard output");
    } else {
        info!("Tables will be sent to {:?} ({:?})", args.destination, args.mode);
    }
    if args.max_tables > 0 {
        info!("Stopping after {} tables", args.max_tables);
    }

    if front_end.dump_config {
        println!("{}", serde_json::to_string_pretty(&args)?);
    }

    Ok(())
}
