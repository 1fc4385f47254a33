use butterfly_site::adapters::{assets::PassthroughAssets, submission};
use butterfly_site::app::JourneyExplorer;
use butterfly_site::config::cli::Command;
use butterfly_site::domain::model::{ContactPayload, SubmissionOutcome};
use butterfly_site::domain::ports::AssetResolver;
use butterfly_site::navigation::Route;
use butterfly_site::render::ViewState;
use butterfly_site::utils::error::ErrorSeverity;
use butterfly_site::utils::logger;
use butterfly_site::{
    CliConfig, ContactForm, LocalStorage, SiteBuilder, SiteConfig, SiteContent, SiteError,
    StaticAssets,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🦋 Starting butterfly-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    match run(&cli, config).await {
        Ok(()) => Ok(()),
        Err(e) => exit_with(e),
    }
}

async fn run(cli: &CliConfig, config: SiteConfig) -> butterfly_site::Result<()> {
    // Build the submission backend before the config is consumed.
    let service = submission::from_config(&config)?;
    let assets = asset_resolver(&config);

    let mut output_path = config.output_path().to_string();
    let mut archive = config.archive_enabled();
    let content = config.into_content()?;
    tracing::info!("✅ Content loaded and validated");

    match &cli.command {
        Command::Build {
            output,
            archive: archive_flag,
            stage,
        } => {
            if let Some(path) = output {
                output_path = path.clone();
            }
            archive |= archive_flag;

            let mut state = ViewState::initial(&content);
            let index = usize::try_from(stage - 1).unwrap_or(usize::MAX);
            state.stage.jump_to(index)?;

            let storage = LocalStorage::new(&output_path);
            let builder = SiteBuilder::new(storage, assets).with_archive(archive);
            let report = builder.build(&content, &state).await?;

            tracing::info!("✅ Site rendered: {} pages", report.pages.len());
            println!("✅ Rendered {} pages into {}", report.pages.len(), output_path);
            for page in &report.pages {
                println!("   {}", page);
            }
            if let Some(name) = report.archive {
                println!("📦 Archive: {}/{}", output_path, name);
            }
        }
        Command::Explore => {
            explore(&content)?;
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::with_payload(ContactPayload::new(
                name.as_str(),
                email.as_str(),
                message.as_str(),
            ));
            println!("Sending...");
            let receipt = form.submit(service.as_ref()).await?;
            match receipt.outcome {
                SubmissionOutcome::Accepted => println!(
                    "✅ {}",
                    form.status().message().unwrap_or_default()
                ),
                SubmissionOutcome::Rejected => println!(
                    "❌ {}",
                    form.status().message().unwrap_or_default()
                ),
            }
            tracing::info!("Submission recorded at {}", receipt.submitted_at.to_rfc3339());
        }
        Command::Routes => {
            for route in Route::ALL {
                println!("{:<20} {:<18} {}", route.path(), route.label(), route.output_file());
            }
        }
    }

    Ok(())
}

fn explore(content: &SiteContent) -> butterfly_site::Result<()> {
    let mut explorer = JourneyExplorer::new(content.stage_cursor());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let last = explorer.run(stdin.lock(), stdout.lock())?;
    tracing::debug!("Explorer closed at stage {}", last + 1);
    Ok(())
}

fn asset_resolver(config: &SiteConfig) -> Box<dyn AssetResolver> {
    match &config.assets {
        Some(assets) => Box::new(StaticAssets::new(&assets.public_dir, assets.fallback.as_str())),
        None => Box::new(PassthroughAssets),
    }
}

fn exit_with(e: SiteError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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

