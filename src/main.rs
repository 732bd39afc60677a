use clap::Parser;
use liga_table::app::interactive::{prompt_league, prompt_round_selection};
use liga_table::core::render::render_text;
use liga_table::core::selection::select_league;
use liga_table::core::RoundSource;
use liga_table::utils::error::ErrorSeverity;
use liga_table::utils::{logger, validation::Validate};
use liga_table::{
    CliConfig, LeaguePipeline, LigaError, LocalRoundSource, LocalStorage, TableEngine,
    TableRequest,
};

type Engine = TableEngine<LeaguePipeline<LocalRoundSource, LocalStorage, CliConfig>>;

fn exit_code(e: &LigaError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &LigaError) {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

async fn run_once(engine: &Engine, request: &TableRequest) -> Result<(), LigaError> {
    let summary = engine.run(request).await?;
    println!("{}", render_text(&summary.table));
    for output in &summary.outputs {
        println!("📁 Output saved to: {}", output);
    }
    Ok(())
}

async fn resolve_league(engine: &Engine, input: &str) -> Result<String, LigaError> {
    let leagues = engine.pipeline().source().list_leagues().await?;
    select_league(&leagues, input).map(str::to_string)
}

async fn run_interactive(engine: &Engine) -> Result<(), LigaError> {
    let source = engine.pipeline().source();
    let leagues = source.list_leagues().await?;
    if leagues.is_empty() {
        println!("No leagues found under {}", source.root().display());
        return Ok(());
    }

    loop {
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout();

        let Some(league) = prompt_league(&leagues, &mut stdin, &mut stdout)? else {
            return Ok(());
        };
        // one broken league should not end the session
        let total = match source.list_rounds(&league).await {
            Ok(rounds) => rounds.len(),
            Err(e) => {
                report(&e);
                println!();
                continue;
            }
        };
        let Some(selection) = prompt_round_selection(total, &mut stdin, &mut stdout)? else {
            return Ok(());
        };
        drop(stdin);

        if let Err(e) = run_once(engine, &TableRequest::new(league, selection)).await {
            report(&e);
        }
        println!();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);
    tracing::info!("Starting liga-table");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = LocalRoundSource::new(&config.results_root);
    let storage = LocalStorage::new(config.output_path.clone().unwrap_or_else(|| ".".to_string()));
    let league = config.league.clone();
    let selection = config.round_selection();
    let engine = TableEngine::new(LeaguePipeline::new(source, storage, config));

    let result = match league {
        Some(input) => match resolve_league(&engine, &input).await {
            Ok(league) => run_once(&engine, &TableRequest::new(league, selection)).await,
            Err(e) => Err(e),
        },
        None => run_interactive(&engine).await,
    };

    if let Err(e) = result {
        report(&e);
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
