use anyhow::Context;
use clap::Parser;
use email_summary::client::{SummarizerClient, SummaryService};
use email_summary::config::Config;
use email_summary::headless::summarize_once;
use email_summary::logging;
use email_summary::ui;
use email_summary::ui::editor::EXAMPLE_TEXT;
use email_summary::ui::summary::plain_text;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "email-summary",
    version,
    about = "Paste email or notes text and get a summary with the top action items"
)]
struct Cli {
    /// Path to the config file (default: ~/.config/email-summary/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the summarization service URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Preload the input from a file ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Submit once without the UI and print the result
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.print {
        logging::init_stderr_tracing();
    } else {
        logging::init_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    config.apply_overrides(Config::env_base_url(), cli.base_url.clone());
    config.validate()?;

    let initial_text = match &cli.input {
        Some(path) => read_input(path)?,
        None => EXAMPLE_TEXT.to_string(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = SummarizerClient::new(&config.service).context("failed to build HTTP client")?;
    let endpoint = client.endpoint().to_string();
    tracing::info!(endpoint = %endpoint, "Summarization service configured");
    let service: Arc<dyn SummaryService> = Arc::new(client);

    if cli.print {
        let state = runtime.block_on(summarize_once(service, &initial_text));
        println!("{}", plain_text(&state));
        return Ok(if state.result().is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    ui::runtime::run(
        &config,
        service,
        endpoint,
        initial_text,
        runtime.handle().clone(),
    )
    .context("terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read input from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))
}
