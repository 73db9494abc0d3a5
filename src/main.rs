use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;

use sagmal::cli::commands::translate::{self, TranslateOptions, TranslateOutcome};
use sagmal::cli::{Args, describe_error, split_positionals};
use sagmal::output::{self, OutputConfig};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    log::debug!("sagmal v{}", env!("CARGO_PKG_VERSION"));

    let code = match run(args).await {
        Ok(()) => exitcode::OK,
        Err(err) => {
            let (message, code) = describe_error(&err);
            eprintln!("{message}");
            code
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> Result<()> {
    let positionals = split_positionals(&args.text)?;

    if args.text.is_empty() {
        return print_help();
    }

    let options = TranslateOptions {
        positionals,
        copy: args.copy,
    };

    match translate::run_translate(options).await? {
        TranslateOutcome::NothingToTranslate => print_help(),
        TranslateOutcome::Translated => Ok(()),
    }
}

fn print_help() -> Result<()> {
    Args::command().print_help()?;
    Ok(())
}
