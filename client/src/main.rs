use clap::Parser;
use lobby_client::command::{Command, HELP};
use lobby_client::config::ClientConfig;
use lobby_client::memory::FileUsername;
use lobby_client::view::format_refresh;
use lobby_client::{HttpLobbyApi, SessionClient, TerminalView};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!(url = config.url, interval = ?config.poll_interval(), "Starting client");

    let api = Arc::new(HttpLobbyApi::new(&config.url)?);
    let view = Arc::new(TerminalView::new());
    let memory = FileUsername::new(&config.user_file);
    let mut session = SessionClient::new(api, view.clone(), memory, config.poll_interval());

    if let Some(username) = session.remembered_username() {
        println!("Welcome back, {}. `login <password>` to continue.", username);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let remembered = session.remembered_username();
        let command = match Command::parse(&line, remembered.as_deref()) {
            Ok(command) => command,
            Err(usage) => {
                println!("{}", usage);
                continue;
            }
        };

        // Failures are already shown by the session's error banner
        match command {
            Command::ShowRegister => session.show_register(),
            Command::Register {
                username,
                password,
                confirm_password,
            } => {
                let _ = session.register(&username, &password, &confirm_password).await;
            }
            Command::ShowLogin => session.show_login(),
            Command::Login { username, password } => {
                let _ = session.login(&username, &password).await;
            }
            Command::Logout => {
                let _ = session.logout().await;
            }
            Command::Create { name } => {
                let _ = session.create_game(&name).await;
            }
            Command::Delete { id } => {
                let _ = session.delete_game(&id).await;
            }
            Command::Play => session.enter_game(),
            Command::Lobby => session.back_to_lobby(),
            Command::Status => match session.current_user() {
                Some(username) if session.polling().is_running() => {
                    println!("{} | {}", username, format_refresh(view.countdown()));
                }
                Some(username) => println!("{} | not in the lobby", username),
                None => println!("not logged in"),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    session.shutdown().await;
    Ok(())
}
