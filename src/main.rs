use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use alphanum_cli::Args;
use alphanum_sort::{SortConfig, first_unsorted, lines, sort_lines};
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{Registry, filter, fmt, layer::Layer, prelude::*};

fn init_logging(args: &Args) -> Result<()> {
    let var = args
        .log_level
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::var("ALPHANUM_LOG").unwrap_or_default());
    let log_level = match var.to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    };

    let subscriber = Registry::default().with(
        fmt::layer()
            .compact()
            .without_time()
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
            .with_filter(filter::LevelFilter::from_level(log_level)),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(args: &Args) -> Result<SortConfig> {
    let mut config = match &args.config {
        Some(path) => SortConfig::load(path)?,
        None => SortConfig::load_from_default_location()?,
    };
    config.apply_args(args);
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn run(args: &Args) -> Result<ExitCode> {
    if args.init {
        let path = SortConfig::init(args.config.as_deref(), args.overwrite)?;
        eprintln!("Created default config at: `{}`", path.to_string_lossy());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(args)?;
    let options = config.options();
    let comparator = alphanum_collate::for_locale_with_strength(&config.locale, config.strength)?;
    let mut lines = lines::read_lines(&args.files)?;

    if args.check {
        return Ok(match first_unsorted(&lines, &comparator, &options) {
            Some(index) => {
                eprintln!("alphanum: disorder at line {}: {}", index + 1, lines[index]);
                ExitCode::FAILURE
            }
            None => ExitCode::SUCCESS,
        });
    }

    sort_lines(&mut lines, &comparator, &options);

    match lines::write_lines(io::stdout().lock(), &lines) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
        }
        result => result?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = alphanum_cli::parse();
    init_logging(&args)?;

    match run(&args) {
        Ok(code) => Ok(code),
        Err(err) => {
            tracing::error!("{err:#}");
            Err(err)
        }
    }
}
