use clap::Parser;
use levlog::{registry, Config, Level, LevelFlag, LEVELS};
use std::io::BufRead;
use std::path::PathBuf;

/// Write leveled log records to stdout.
#[derive(Parser, Debug)]
#[command(name = "levlog", version, about, long_about = None)]
struct Cli {
    /// Least severe level that is still shown
    #[arg(short, long)]
    level: Option<LevelFlag>,

    /// Level of the records to write
    #[arg(short, long, default_value = "info")]
    at: LevelFlag,

    /// Separator between the level, time and message
    #[arg(short, long)]
    delimiter: Option<String>,

    /// strftime-style timestamp format, e.g. "%Y-%m-%d %H:%M:%S"
    #[arg(short, long)]
    time_format: Option<String>,

    /// TOML file with defaults for level, delimiter and time_format
    #[arg(short, long, default_value = ".levlog.toml")]
    config: PathBuf,

    /// Log the message at panic level, then exit with a failure status
    #[arg(long)]
    die: bool,

    /// Print all levels, most severe first
    #[arg(long)]
    list_levels: bool,

    /// Message to log; stdin is logged line by line if omitted
    message: Vec<String>,
}

fn main() -> levlog::Result<()> {
    let cli = Cli::parse();

    if cli.list_levels {
        for level in LEVELS {
            println!("{}", level.as_arg());
        }
        return Ok(());
    }

    let conf = Config::load(&cli.config)?;
    let level = cli
        .level
        .map(LevelFlag::level)
        .or(conf.level)
        .unwrap_or(Level::Info);
    let delimiter = match cli.delimiter.or(conf.delimiter) {
        Some(d) if d.is_empty() => return Err("delimiter must have one or more characters".into()),
        Some(d) => d,
        None => " - ".into(),
    };

    let logger = registry::setup(std::io::stdout(), level, &delimiter);
    if let Some(format) = cli.time_format.or(conf.time_format) {
        logger.set_time_format(&format);
    }

    let message = cli.message.join(" ");
    if cli.die {
        logger.die(message);
    }
    if !message.is_empty() {
        logger.emit(cli.at.level(), &[&message])?;
        return Ok(());
    }
    for line in std::io::stdin().lock().lines() {
        logger.emit(cli.at.level(), &[&line?])?;
    }
    Ok(())
}
