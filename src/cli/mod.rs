//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments and dispatches to the chat
//! loop, the one-shot `ask` command, or the config editors.

pub mod ask;
pub mod settings;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::HttpBackend;
use crate::cli::ask::run_ask;
use crate::cli::settings::{apply_set, apply_unset};
use crate::core::config::Config;
use crate::core::constants::ENDPOINT_ENV_VAR;
use crate::ui::chat_loop::{run_chat, ChatOptions};
use crate::ui::theme::Theme;
use crate::utils::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "intellicourse", version)]
#[command(about = "A terminal chat interface for questions about your courses")]
#[command(
    long_about = "IntelliCourse is a full-screen terminal chat interface. Each question is \
sent to a course-answering service as a JSON POST and the answer is shown in the \
transcript.\n\n\
Environment Variables:\n\
  INTELLICOURSE_ENDPOINT  Endpoint URL (overrides the config file)\n\
  RUST_LOG                Log filter for --log output (default intellicourse=info)\n\n\
Controls:\n\
  Type              Enter your question in the input field\n\
  Enter             Send the question\n\
  Shift+Enter       Insert a new line (Alt+Enter also works)\n\
  Click Send        Send the question (disabled while waiting)\n\
  PgUp/PgDn/Mouse   Scroll through the transcript\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Endpoint that receives the questions
    #[arg(short = 'e', long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Render the interface without colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        question: Vec<String>,
    },
    /// Set a configuration value (endpoint, greeting, sidebar)
    Set {
        key: String,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset a configuration value
    Unset { key: String },
    /// Show the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let target = args.log.map_or(LogTarget::Disabled, LogTarget::File);
            init_tracing(target)?;

            let config = Config::load()?;
            let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
            let endpoint = config.resolve_endpoint(args.endpoint.as_deref(), env_endpoint.as_deref())?;
            let theme = if args.no_color {
                Theme::monochrome()
            } else {
                Theme::default()
            };

            run_chat(ChatOptions {
                endpoint,
                greeting: config.greeting().to_string(),
                sidebar: config.sidebar_enabled(),
                theme,
            })
            .await
        }
        Commands::Ask { question } => {
            let target = args.log.map_or(LogTarget::Stderr, LogTarget::File);
            init_tracing(target)?;

            let config = Config::load()?;
            let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
            let endpoint = config.resolve_endpoint(args.endpoint.as_deref(), env_endpoint.as_deref())?;

            let backend = HttpBackend::new(endpoint);
            let succeeded = run_ask(&question, &backend, &mut io::stdout()).await?;
            if !succeeded {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let message = apply_set(&mut config, &key, &value)?;
            config.save()?;
            println!("{message}");
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            let message = apply_unset(&mut config, &key)?;
            config.save()?;
            println!("{message}");
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            if let Ok(path) = Config::get_config_path() {
                println!("  file: {}", crate::core::config::data::path_display(path));
            }
            Ok(())
        }
    }
}
