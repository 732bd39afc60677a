use clap::Parser;
use liga_table::core::render::render_text;
use liga_table::core::ConfigProvider;
use liga_table::utils::error::ErrorSeverity;
use liga_table::utils::{logger, validation::Validate};
use liga_table::{LeaguePipeline, LocalRoundSource, LocalStorage, TableEngine, TableRequest, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-table")]
#[command(about = "League table tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "liga-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the round cutoff from config
    #[arg(long)]
    until_round: Option<usize>,

    /// Show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(args.verbose || config.verbose(), config.json_logs());
    tracing::info!("Loaded configuration from: {}", args.config);

    if let Some(until_round) = args.until_round {
        config.source.until_round = Some(until_round);
        tracing::info!("Round cutoff overridden to: {}", until_round);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let league = match config.league() {
        Ok(league) => league.to_string(),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    display_config_summary(&config, &league, &args);

    if args.dry_run {
        tracing::info!("Dry run, nothing will be computed or written");
        return Ok(());
    }

    let request = TableRequest::new(league, config.round_selection());
    let source = LocalRoundSource::new(config.results_root());
    let storage = LocalStorage::new(config.output_path().unwrap_or("."));
    let engine = TableEngine::new(LeaguePipeline::new(source, storage, config));

    match engine.run(&request).await {
        Ok(summary) => {
            println!("{}", render_text(&summary.table));
            for output in &summary.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, league: &str, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Results root: {}", config.results_root());
    println!("  League: {}", league);
    match config.round_selection().cutoff() {
        Some(k) => println!("  Rounds: 1 to {}", k),
        None => println!("  Rounds: all"),
    }
    match config.output_path() {
        Some(path) => println!("  Output: {}", path),
        None => println!("  Output: none (console only)"),
    }
    let formats: Vec<&str> = config
        .output_formats()
        .iter()
        .map(|format| format.extension())
        .collect();
    println!("  Formats: {}", formats.join(", "));
    if let Some(archive) = config.archive_name() {
        println!("  Archive: {}", archive);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
