use clap::Parser;
use log::{error, info};
use ngram_langid::cli::Cli;
use ngram_langid::{export, repl, CorpusLoader, DetectorError, LanguageModel};
use std::fs;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DetectorError> {
    let config = cli.detector_config();
    config.validate()?;

    let corpus = CorpusLoader::new().load_directory(&cli.corpus)?;
    let model = LanguageModel::build(&corpus, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.batch {
        Some(path) => {
            let queries = fs::read_to_string(path).map_err(|source| DetectorError::Read {
                path: path.clone(),
                source,
            })?;
            let results = repl::run_batch(&model, cli.top_k, &queries, &mut out)?;
            info!("Ranked {} queries from {}", results.len(), path.display());

            if let Some(export_path) = &cli.export {
                export::export_to_path(export_path, &results)?;
            }
        }
        None => {
            let stdin = io::stdin();
            repl::run(&model, cli.top_k, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
