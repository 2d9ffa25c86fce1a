use small_calc::utils::{logger, validation::Validate};
use small_calc::{Calculator, CliConfig, Driver};

fn main() -> anyhow::Result<()> {
    let (config, parse_error) = CliConfig::parse_lenient_from(std::env::args_os());

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc");
    if let Some(e) = parse_error {
        tracing::warn!("Ignoring command line: {:?}", e.kind());
    }
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", config.ignored);
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let scenario = match config.validate().and_then(|_| config.load_scenario()) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!("❌ Scenario could not be loaded: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let driver = Driver::new(Calculator::new(), scenario);
    let stdout = std::io::stdout();
    let reports = driver.run(&mut stdout.lock())?;

    tracing::info!(
        "✅ Completed {} steps ({} reported an error)",
        reports.len(),
        reports.iter().filter(|r| r.is_error()).count()
    );

    Ok(())
}
