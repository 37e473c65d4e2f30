use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secret_friend::app::run_session;
use secret_friend::utils::{error::ErrorSeverity, logger};
use secret_friend::{
    render_assignment, CliConfig, ConfigProvider, DrawError, DrawOrchestrator, DrawSettings,
    ResultSink, TerminalPresenter, TomlConfig, TracingPresenter,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let mut layers: Vec<&dyn ConfigProvider> = Vec::new();
    if let Some(file_config) = &file_config {
        layers.push(file_config);
    }
    layers.push(&cli);

    let settings = match DrawSettings::resolve(&layers) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting secret-friend CLI");
    tracing::debug!("Effective settings: {:?}", settings);

    let rng = match settings.seed {
        Some(seed) => {
            tracing::info!("🎲 Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if cli.interactive || settings.participants.is_empty() {
        run_interactive(&settings, rng)
    } else {
        run_batch(&settings, rng)
    }
}

fn run_interactive(settings: &DrawSettings, rng: StdRng) -> anyhow::Result<()> {
    let mut orchestrator = DrawOrchestrator::with_min_participants(
        TerminalPresenter::stdio(),
        rng,
        settings.min_participants,
    );
    orchestrator.add_participants(&settings.participants);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match run_session(
        &mut orchestrator,
        stdin.lock(),
        &mut stdout,
        settings.output_format,
    ) {
        Ok(summary) => {
            tracing::info!(
                "✅ Session finished: {} added, {} rejected, {} draws",
                summary.added,
                summary.rejected,
                summary.draws
            );
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn run_batch(settings: &DrawSettings, rng: StdRng) -> anyhow::Result<()> {
    let mut orchestrator = DrawOrchestrator::with_min_participants(
        TracingPresenter::new(),
        rng,
        settings.min_participants,
    );

    let rejected = orchestrator.add_participants(&settings.participants);
    if !rejected.is_empty() {
        tracing::warn!("{} participant name(s) were skipped", rejected.len());
    }

    let assignment = match orchestrator.run_draw() {
        Ok(assignment) => assignment,
        Err(e) => exit_with(&e),
    };

    let rendered = render_assignment(assignment, settings.output_format, Utc::now())
        .context("failed to render draw result")?;
    let sink = ResultSink::from_path(settings.output_path.as_deref());
    if let Err(e) = sink.write(&rendered) {
        exit_with(&e);
    }

    tracing::info!("✅ Draw completed for {} participants", assignment.len());
    Ok(())
}

fn exit_with(e: &DrawError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
