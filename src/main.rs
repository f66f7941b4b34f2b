mod cli;

use autorec::catalog;
use autorec::config;
use autorec::engine::RecommendationEngine;
use autorec::error::AutorecError;
use autorec::report;
use autorec::telemetry;
use autorec::types::config::EngineConfig;
use autorec::types::preferences::Preferences;
use autorec::types::report::RankingReport;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RESULTS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_inputs(
    args: &cli::PreferenceArgs,
) -> Result<(EngineConfig, Preferences), AutorecError> {
    let engine_config = config::load_engine_config(&args.root)?;
    let preferences = catalog::load_preferences(args.preferences.as_deref())?;
    Ok((engine_config, preferences))
}

fn run() -> Result<i32, AutorecError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = catalog::load_catalog(&cmd.catalog)?;
            let (mut engine_config, mut preferences) = load_inputs(&cmd.prefs)?;
            if cmd.top.is_some() {
                engine_config.output.top_n = cmd.top;
            }
            if cmd.no_dedupe {
                engine_config.output.dedupe = false;
            }
            if let Some(profile) = cmd.profile {
                preferences.user_profile = Some(profile.into());
            }

            let engine = RecommendationEngine::new(engine_config);
            let ranking = engine.rank(&loaded.records, &preferences);
            let ranking_report = RankingReport::new(ranking, loaded.digest);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&ranking_report, output_format)?;
            println!("{rendered}");

            if ranking_report.results.is_empty() {
                eprintln!("warning: no vehicles matched the preferences");
                Ok(exit_code::NO_RESULTS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Classify(cmd) => {
            let (engine_config, preferences) = load_inputs(&cmd.prefs)?;
            let engine = RecommendationEngine::new(engine_config);
            println!("{}", engine.classify(&preferences));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Filter(cmd) => {
            let loaded = catalog::load_catalog(&cmd.catalog)?;
            let (engine_config, preferences) = load_inputs(&cmd.prefs)?;
            let engine = RecommendationEngine::new(engine_config);
            let survivors = engine.filter(&loaded.records, &preferences);
            println!("{}", serde_json::to_string_pretty(&survivors)?);

            if survivors.is_empty() {
                Ok(exit_code::NO_RESULTS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
