use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rawda_core::{tool_groups, AgeLevel, Assistant, BilingualResult, SettingsManager, ToolRequest};

#[derive(Parser, Debug)]
#[command(name = "rawda")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rawda - bilingual content assistant for preschool teachers")]
struct Args {
    /// Tool identifier (see --list-tools)
    #[arg(long)]
    tool: Option<String>,

    /// Age level: "4 years" or "5 years"
    #[arg(long, default_value = "4 years")]
    age: String,

    /// Free-text input for the selected tool
    input: Vec<String>,

    /// Load settings from a specific file instead of ~/.rawda/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Print the result as JSON (includes full audio data URIs)
    #[arg(long)]
    json: bool,

    /// List the available tools and exit
    #[arg(long)]
    list_tools: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    if args.list_tools {
        print_catalog();
        return Ok(());
    }

    let tool = args.tool.context("--tool is required (see --list-tools)")?;
    let age = AgeLevel::parse(&args.age)
        .with_context(|| format!("Unsupported age level: {:?} (use \"4 years\" or \"5 years\")", args.age))?;
    let input = args.input.join(" ");

    let manager = match args.settings {
        Some(path) => SettingsManager::from_path(path)?,
        None => SettingsManager::new()?,
    };
    let assistant = Assistant::from_settings(&manager.settings())?;

    info!(tool = %tool, age = %age.token(), "Dispatching request");
    let result = assistant
        .dispatch(&ToolRequest::new(tool, input, age))
        .await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_catalog() {
    for group in tool_groups() {
        println!("{}", group.name);
        for tool in group.tools {
            println!("  {} {:<14} {}", tool.icon, tool.id, tool.desc);
            println!("     {}", tool.placeholder);
        }
        println!();
    }
}

fn print_result(result: &BilingualResult) {
    if let Some(error) = &result.error {
        eprintln!("! {error}");
    }
    if let Some(arabic) = &result.arabic_text {
        println!("--- العربية ---");
        println!("{arabic}");
        println!();
    }
    if let Some(french) = &result.french_text {
        println!("--- Français ---");
        println!("{french}");
        println!();
    }
    for (label, audio) in [
        ("العربية", &result.arabic_audio),
        ("Français", &result.french_audio),
    ] {
        if let Some(uri) = audio {
            println!("[{} audio: {} KiB data URI, use --json to capture it]", label, uri.len() / 1024);
        }
    }
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Create trace directory in user's home
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".rawda").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("rawda.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    // Setup tracing subscriber with file output
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
