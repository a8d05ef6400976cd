//! CLI binary for docsift.
//!
//! A thin shim over the library: each subcommand calls one library function
//! and prints the result as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docsift::llm::{first_message_content, ChatClient};
use docsift::{collect_docx_paths, extract_all_text, extract_highlighted_text, Config};
use docsift::OutputFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "docsift", version, about = "Extract text and highlights from .docx files")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List .docx files under a folder, skipping ~$ lock files
    List { folder: PathBuf },

    /// Print the cleaned full text of a document
    Text { file: PathBuf },

    /// Print the highlighted runs of a document
    Highlights { file: PathBuf },

    /// Send a document's text to the chat completion API
    Ask {
        file: PathBuf,

        /// System prompt sent ahead of the document text
        #[arg(short, long)]
        system: String,

        /// Model name (defaults to the configured model)
        #[arg(short, long)]
        model: Option<String>,

        /// API key for the chat completion endpoint
        #[arg(long, env = "XAI_API_KEY", hide_env_values = true)]
        api_key: String,
    },

    /// Show or initialise the config file
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::List { folder } => {
            let paths = collect_docx_paths(&folder)
                .with_context(|| format!("Failed to scan {}", folder.display()))?;
            let lines: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            print_lines(&lines, cli.format)?;
        }
        Command::Text { file } => {
            let text = extract_all_text(&file)
                .with_context(|| format!("Failed to extract text from {}", file.display()))?;
            print_text(&text, cli.format)?;
        }
        Command::Highlights { file } => {
            let spans = extract_highlighted_text(&file)
                .with_context(|| format!("Failed to extract highlights from {}", file.display()))?;
            print_lines(&spans, cli.format)?;
        }
        Command::Ask {
            file,
            system,
            model,
            api_key,
        } => {
            let text = extract_all_text(&file)
                .with_context(|| format!("Failed to extract text from {}", file.display()))?;
            let config = Config::load().context("Failed to load config")?;
            let client = ChatClient::new(config.api)?;
            let reply = client
                .complete(&api_key, &system, &text, model.as_deref())
                .with_context(|| format!("Request to {} failed", client.config().endpoint))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reply)?),
                OutputFormat::Text => {
                    let content = first_message_content(&reply)
                        .context("Reply carried no message content")?;
                    println!("{content}");
                }
            }
        }
        Command::Config { init } => {
            if init {
                match Config::default().save()? {
                    Some(path) => println!("Wrote {}", path.display()),
                    None => anyhow::bail!("No config directory available on this platform"),
                }
            } else {
                let config = Config::load().context("Failed to load config")?;
                if let Some(path) = Config::get_config_path() {
                    eprintln!("# {}", path.display());
                }
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn print_lines(lines: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(lines)?),
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn print_text(text: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(text)?),
        OutputFormat::Text => println!("{text}"),
    }
    Ok(())
}
