use anyhow::Context;
use clap::Parser;
use kata_log::config::{CliConfig, Command};
use kata_log::utils::{logger, validation::Validate};
use kata_log::{DrillSheet, KataEngine, KataError, KataKind};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kata-log");
    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::Run {
            sheet,
            kata,
            dry_run,
        } => run_sheet(&sheet, kata, dry_run),
        Command::Solve { kata, input } => solve(kata, &input),
    }
}

fn run_sheet(path: &str, kata: Option<KataKind>, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("📁 Loading drill sheet from: {}", path);

    let sheet = match DrillSheet::from_file(path).and_then(|sheet| sheet.validate().map(|_| sheet)) {
        Ok(sheet) => sheet,
        Err(e) => exit_with(e),
    };

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - drills are listed, not run");
        for line in sheet.listing(kata) {
            println!("{}", line);
        }
        return Ok(());
    }

    let report = KataEngine::with_filter(kata).run_sheet(&sheet);
    println!("{}", report);

    let exit_code = report.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn solve(kata: KataKind, input: &str) -> anyhow::Result<()> {
    let input: serde_json::Value =
        serde_json::from_str(input).with_context(|| format!("--input for {} is not valid JSON", kata))?;

    match KataEngine::new().solve(kata, input) {
        Ok(answer) => {
            println!("{}", serde_json::to_string_pretty(&answer)?);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: KataError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
