use std::path::PathBuf;
use std::process::ExitCode;

use authslice::config::DEFAULT_STORAGE_PATH;
use authslice::form::{HEADING, PASSWORD_LABEL, SUBMIT_LABEL, USERNAME_LABEL};
use authslice::{AuthConfig, AuthStore, FileStore, LoginForm, MockAuthService, SubmitOutcome};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "authslice", about = "Mock login/logout against a local session store")]
struct Cli {
    /// Session store file.
    #[arg(long, env = "AUTH_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    storage: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = SUBMIT_LABEL)]
    Login {
        #[arg(long, default_value = "", value_name = USERNAME_LABEL)]
        username: String,
        #[arg(long, default_value = "", value_name = PASSWORD_LABEL)]
        password: String,
    },
    /// Sign out and clear the session.
    Logout,
    /// Show the restored session.
    Whoami,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let config = AuthConfig { storage_path: cli.storage, ..AuthConfig::from_env() };

    let service = MockAuthService::new(FileStore::new(&config.storage_path), &config);
    let store = AuthStore::new(service);

    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let state = changes.borrow_and_update().clone();
            debug!(
                authenticated = state.is_authenticated,
                loading = state.is_loading,
                error = state.error.as_deref().unwrap_or(""),
                "auth state changed"
            );
        }
    });

    let restored = store.settled().await;

    match cli.command {
        Command::Whoami => {
            match restored.user {
                Some(user) => println!("signed in as {} (id {})", user.username, user.id),
                None => println!("not signed in"),
            }
            ExitCode::SUCCESS
        }
        Command::Login { username, password } => {
            let mut form = LoginForm::new();
            form.set_username(username);
            form.set_password(password);
            let outcome = form
                .submit(&store, |user| println!("signed in as {}", user.username))
                .await;
            match outcome {
                SubmitOutcome::LoggedIn(_) => ExitCode::SUCCESS,
                SubmitOutcome::Invalid(errors) => {
                    for message in errors.messages() {
                        eprintln!("{HEADING}: {message}");
                    }
                    ExitCode::from(2)
                }
                SubmitOutcome::Rejected(message) => {
                    eprintln!("{HEADING}: {message}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Logout => {
            store.logout().await;
            match store.state().error {
                Some(message) => {
                    eprintln!("{message}");
                    ExitCode::FAILURE
                }
                None => {
                    println!("signed out");
                    ExitCode::SUCCESS
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
