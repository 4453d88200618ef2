//! Command-line interface parsing and startup wiring.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::chat_stream::{ChatStreamService, HttpBackend};
use crate::core::config::Config;
use crate::core::learning::UserRole;
use crate::core::persona::Persona;
use crate::ui::chat_loop::{run_chat, ChatOptions};
use crate::ui::theme::Theme;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Parser)]
#[command(name = "fhevm-tutor")]
#[command(about = "A terminal tutor for the Zama FHEVM confidential-computing platform")]
#[command(
    long_about = "fhevm-tutor is a full-screen terminal chat interface that teaches fully \
homomorphic encryption on the EVM through a streaming AI tutor. Replies render with code \
highlighting, lists, links, and pressable suggestion buttons.\n\n\
Environment Variables:\n\
  OPENAI_API_KEY    API key for the chat endpoint (required)\n\
  OPENAI_BASE_URL   Custom API base URL (optional, defaults to https://api.openai.com/v1)\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  1-9               Press a suggestion button from the latest reply\n\
  Esc               Cancel a streaming reply\n\
  Up/Down/PgUp/PgDn Scroll through chat history\n\
  Ctrl+T            Cycle color themes\n\
  Ctrl+P            Switch persona (FHEVM Tutor / Code Wizard)\n\
  Ctrl+R            Switch learning role (developer / non-technical)\n\
  Ctrl+G            Restart into the interactive deployment guide\n\
  Ctrl+K            Generate a mock fhevmjs key pair\n\
  Ctrl+C            Quit"
)]
pub struct Args {
    /// Model to request from the chat endpoint
    #[arg(short, long)]
    pub model: Option<String>,

    /// Override the API base URL (also read from OPENAI_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Color theme for this run; persisted choices live in the config file
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Persona for this run (tutor or code-wizard)
    #[arg(short, long, value_enum)]
    pub persona: Option<Persona>,

    /// Learning role for this run (developer or non-technical)
    #[arg(short, long, value_enum)]
    pub role: Option<UserRole>,

    /// Disable syntect highlighting of fenced code blocks
    #[arg(long)]
    pub no_syntax: bool,

    /// Print the config file location and exit
    #[arg(long)]
    pub where_config: bool,
}

/// Parse arguments, initialize logging, and run the chat interface.
pub async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // RUST_LOG controls verbosity; logs go to stderr behind the alternate
    // screen, so they surface when the terminal is restored.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if args.where_config {
        match Config::default_path() {
            Some(path) => println!("{}", path.display()),
            None => return Err("could not determine a config directory".into()),
        }
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(theme) = &args.theme {
        if Theme::find(theme).is_none() {
            let known = Theme::all()
                .iter()
                .map(|t| t.id)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(format!("unknown theme '{theme}' (available: {known})").into());
        }
        config.theme = Some(theme.clone());
    }
    if let Some(persona) = args.persona {
        config.persona = Some(persona);
    }
    if let Some(role) = args.role {
        config.role = Some(role);
    }

    let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
        "OPENAI_API_KEY is not set.\n\n\
         Export an API key for an OpenAI-compatible chat endpoint:\n\
         export OPENAI_API_KEY=\"your-api-key-here\"\n\n\
         Optionally point at a different endpoint:\n\
         export OPENAI_BASE_URL=\"https://api.openai.com/v1\""
    })?;
    let base_url = args
        .base_url
        .or_else(|| std::env::var("OPENAI_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model = args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let (stream, events) =
        ChatStreamService::new(Arc::new(HttpBackend::new(reqwest::Client::new())));
    let opts = ChatOptions {
        base_url,
        api_key,
        model,
        syntax_enabled: !args.no_syntax,
    };
    run_chat(stream, events, config, opts).await
}
