//! Chatdesk console
//!
//! Terminal front end over the client library. The session is kept in a file
//! so it survives between invocations.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use chatdesk::client::{AppState, AppView, Config, FileSessionStore, GuardState};
use chatdesk::shared::ClientError;

#[derive(Parser)]
#[command(name = "chatdesk-console")]
#[command(about = "Admin console for the support chatbot backend", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "CHATDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Where the signed-in session is kept
    #[arg(long, global = true, env = "CHATDESK_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in; prompts for the password when it is not given
    Login {
        /// Email or username
        identifier: String,
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami {
        /// Also fetch the profile from the backend
        #[arg(long)]
        remote: bool,
    },
    /// Resource counts
    Dashboard,
    /// List documents
    Documents,
    /// List conversations
    Conversations,
    /// List widgets with their embed URLs
    Widgets,
    /// Show a conversation's messages
    Messages { conversation: Uuid },
    /// Send a message, starting a conversation unless one is given
    Chat {
        #[arg(short, long)]
        conversation: Option<Uuid>,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Widget embed URL and snippet
    Embed { widget: Uuid },
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error ({}): {}", e.status_code(), e.message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = Config::load(cli.config.as_deref())?;

    let session_path = match cli.session_file {
        Some(path) => path,
        None => FileSessionStore::default_path()?,
    };
    tracing::debug!("[CONSOLE] Session file {}", session_path.display());

    let mut state = AppState::new(config, Arc::new(FileSessionStore::new(session_path)));
    state.start();

    match cli.command {
        Commands::Login {
            identifier,
            password,
        } => login(&mut state, identifier, password).await,
        Commands::Logout => {
            state.logout().await?;
            println!("Signed out");
            Ok(())
        }
        Commands::Whoami { remote } => whoami(&state, remote).await,
        Commands::Dashboard => dashboard(&mut state).await,
        Commands::Documents => {
            require_session(&mut state, AppView::Dashboard)?;
            for document in state.http.documents().list().await? {
                println!(
                    "{}  {:<40}  {:?}",
                    document.id,
                    document.title,
                    document.processing_state()
                );
            }
            Ok(())
        }
        Commands::Conversations => {
            require_session(&mut state, AppView::Chat)?;
            state.refresh().await?;
            for conversation in &state.chat.conversations {
                println!("{}  {}", conversation.id, conversation.display_title());
            }
            Ok(())
        }
        Commands::Widgets => {
            require_session(&mut state, AppView::Dashboard)?;
            for widget in state.http.widgets().list().await? {
                println!(
                    "{}  {:<30}  {}",
                    widget.id,
                    widget.name,
                    widget.embed_url(state.config.widget_base_url())
                );
            }
            Ok(())
        }
        Commands::Messages { conversation } => {
            require_session(&mut state, AppView::Chat)?;
            state.chat.select(&state.http, conversation).await?;
            print_messages(&state);
            Ok(())
        }
        Commands::Chat { conversation, text } => chat(&mut state, conversation, text).await,
        Commands::Embed { widget } => {
            if state.open_widget(widget).await != AppView::WidgetPreview {
                return Err(not_signed_in());
            }
            if let Some(preview) = &state.widget_preview {
                if let Some(error) = preview.widget.as_ref().and_then(|w| w.error()) {
                    eprintln!("warning: widget not loaded: {}", error);
                }
                println!("{}", preview.embed_url());
                println!("{}", preview.embed_snippet());
            }
            Ok(())
        }
    }
}

async fn login(
    state: &mut AppState,
    identifier: String,
    password: Option<String>,
) -> Result<(), ClientError> {
    let password = match password {
        Some(password) => password,
        None => prompt("Password: ")?,
    };

    state.login_form.set_identifier(identifier);
    state.login_form.set_password(password);
    if state.handle_login().await {
        if let GuardState::Authenticated(session) = state.guard.state() {
            println!("Signed in as {}", session.display_name());
        }
        return Ok(());
    }
    Err(state
        .login_form
        .failure()
        .cloned()
        .unwrap_or_else(|| ClientError::unauthorized("Login failed")))
}

async fn whoami(state: &AppState, remote: bool) -> Result<(), ClientError> {
    let Some(session) = state.guard.session() else {
        return Err(not_signed_in());
    };
    println!("{} <{}>", session.display_name(), session.email);
    if remote {
        let profile = state.guard.bridge().profile().await?;
        println!(
            "backend: {} {} ({})",
            profile.first_name.unwrap_or_default(),
            profile.last_name.unwrap_or_default(),
            profile.username.unwrap_or_default()
        );
    }
    Ok(())
}

async fn dashboard(state: &mut AppState) -> Result<(), ClientError> {
    require_session(state, AppView::Dashboard)?;
    state.refresh().await?;

    let summary = state.dashboard.summary();
    println!(
        "Documents:     {} ({} ready)",
        summary.documents, summary.ready_documents
    );
    println!("Conversations: {}", summary.conversations);
    println!("Widgets:       {}", summary.widgets);
    for error in state.dashboard.errors() {
        eprintln!("warning: {}", error);
    }
    Ok(())
}

async fn chat(
    state: &mut AppState,
    conversation: Option<Uuid>,
    text: Vec<String>,
) -> Result<(), ClientError> {
    require_session(state, AppView::Chat)?;

    if let Some(id) = conversation {
        state.chat.select(&state.http, id).await?;
    }

    state.chat.set_input(text.join(" "));
    if state.chat.send(&state.http).await?.is_none() {
        return Err(ClientError::validation("message", "Message is empty"));
    }
    print_messages(state);
    Ok(())
}

fn require_session(state: &mut AppState, view: AppView) -> Result<(), ClientError> {
    if state.navigate(view) == view {
        Ok(())
    } else {
        Err(not_signed_in())
    }
}

fn not_signed_in() -> ClientError {
    ClientError::unauthorized("Not signed in. Run `chatdesk-console login <email>` first.")
}

fn print_messages(state: &AppState) {
    if let Some(conversation) = state.chat.selected_conversation() {
        println!("== {} ==", conversation.display_title());
    }
    for message in &state.chat.messages {
        println!(
            "[{}] {:?}: {}",
            message.created_at.format("%Y-%m-%d %H:%M"),
            message.role,
            message.content
        );
    }
}

fn prompt(label: &str) -> Result<String, ClientError> {
    eprint!("{}", label);
    std::io::stderr()
        .flush()
        .map_err(|e| ClientError::transport(format!("stderr: {}", e)))?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| ClientError::transport(format!("stdin: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
