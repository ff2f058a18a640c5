use clap::Parser;
use income_predictor::app::session::{run_session, write_options};
use income_predictor::utils::error::IncomeError;
use income_predictor::utils::{logger, validation::Validate};
use income_predictor::{bootstrap, CliConfig, FormInput, LocalStorage, TomlConfig};
use income_predictor::config::Command;

async fn run(cli: CliConfig) -> Result<(), IncomeError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let storage = LocalStorage::default();
    let engine = bootstrap(&storage, &config).await?;

    match cli.command {
        Command::Predict(args) => {
            let estimate = engine.evaluate(&FormInput::from(args))?;
            println!("{}", estimate);
        }
        Command::Options => {
            write_options(engine.schema(), &mut std::io::stdout().lock())?;
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            run_session(&engine, &mut stdin.lock(), &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // The logging section of the config file is read before anything else so
    // the subscriber is set up once; a broken file is reported after init.
    let file_config = cli
        .config
        .as_deref()
        .and_then(|path| TomlConfig::from_file(path).ok())
        .unwrap_or_default();
    let level = file_config.logging.level.as_deref();

    if file_config.json_logging() {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting income-predictor");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ income-predictor failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
