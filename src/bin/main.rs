use anyhow::{Context, Result};
use clap::Parser;
use memquery::{
    native_query,
    options::{args::Args, get_config, get_config_path, init_run_options},
    output, query_with_sink, StderrSink,
};

fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = &args.source_args.log_file {
            memquery::utils::logging::init_logger(log::LevelFilter::Debug, log_file)
                .context("Unable to set up the log file.")?;
        }
    }

    let config_path = get_config_path(args.source_args.config_location.as_deref());
    let config = get_config(config_path.as_deref())
        .context("Unable to properly parse the config file.")?;
    let options = init_run_options(&args, &config)?;

    let query = native_query(options.meminfo_path.as_deref());

    #[cfg(feature = "logging")]
    let sink = (StderrSink, memquery::LogSink);
    #[cfg(not(feature = "logging"))]
    let sink = StderrSink;

    let snapshot = match query_with_sink(&query, &sink) {
        Ok(snapshot) => snapshot,
        // The sink already wrote the one-line reason.
        Err(_) => std::process::exit(1),
    };

    let rendered = output::render(&snapshot, options.unit, options.json)
        .context("Unable to format the memory snapshot.")?;
    println!("{rendered}");

    Ok(())
}
