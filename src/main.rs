use clap::Parser;
use order_tracking::utils::{logger, validation::Validate};
use order_tracking::{CliConfig, DeliveryError, DeliveryTracker, JourneyConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting order-tracking CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Tracking failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), DeliveryError> {
    config.validate()?;
    let stage_filter = config.stage_filter()?;

    // 載入旅程，未指定時使用內建示範
    let journey = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading journey from: {}", path);
            JourneyConfig::from_file(path)?
        }
        None => {
            tracing::info!("📁 No journey file given, using the built-in demo");
            JourneyConfig::demo()
        }
    };
    journey.validate()?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be rendered");
        display_journey_summary(&journey);
        return Ok(());
    }

    let tracker = DeliveryTracker::new(journey)
        .with_stage_filter(stage_filter)
        .with_format(config.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tracker.run(&mut out)?;

    Ok(())
}

fn display_journey_summary(journey: &JourneyConfig) {
    println!("📋 Journey: {}", journey.journey.name);
    if let Some(description) = &journey.journey.description {
        println!("   {}", description);
    }
    println!(
        "   {} orders, {} delivery states",
        journey.orders.len(),
        journey.state_count()
    );
    for order in &journey.orders {
        let stages: Vec<&str> = order.states.iter().map(|s| s.stage().name()).collect();
        println!("   - {}: {}", order.order.item(), stages.join(" -> "));
    }
}
