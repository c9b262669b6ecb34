use std::env;
use std::path::PathBuf;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use bhujal_client::api::GatewayClient;
use bhujal_client::session::{DEFAULT_HISTORY_CAPACITY, SessionStore};
use bhujal_client::transcript;
use bhujal_core::models::message::ChatRole;

const VIEWPORT_LINES: usize = 20;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_url =
        env::var("BHUJAL_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let capacity = env::var("BHUJAL_HISTORY_CAPACITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HISTORY_CAPACITY);

    let client = GatewayClient::new(api_url);
    let mut store = SessionStore::new(capacity);
    let mut editor = DefaultEditor::new()?;

    println!("Bhujal groundwater assistant.");
    println!("Type a question, or: /new  /list  /load N  /upload PATH  /quit");

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        editor.add_history_entry(input)?;

        // Each arm awaits its gateway call before the next readline, so a
        // send can never overlap another send or a new-chat.
        let (command, arg) = input
            .split_once(' ')
            .map(|(c, rest)| (c, rest.trim()))
            .unwrap_or((input, ""));

        match (command, arg) {
            ("/quit", _) => break,
            ("/new", _) => {
                store.start_new();
                println!("started a new chat");
            }
            ("/list", _) => {
                let sessions = store.list();
                if sessions.is_empty() {
                    println!("no archived chats");
                }
                for (index, label) in sessions {
                    println!("  [{index}] {label}");
                }
            }
            ("/load", arg) => match arg.parse::<usize>() {
                Ok(index) if index < store.history_len() => {
                    store.load(index)?;
                    print_viewport(&store);
                }
                _ => println!("usage: /load N (see /list)"),
            },
            ("/upload", arg) if !arg.is_empty() => {
                let path = PathBuf::from(arg);
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(arg)
                    .to_string();
                store.append(ChatRole::User, format!("Uploaded PDF: {name}"));
                let reply = client.upload(&path).await;
                if reply.is_fallback() {
                    tracing::warn!("upload turn fell back");
                }
                store.append(ChatRole::Assistant, reply.into_text());
                print_viewport(&store);
            }
            ("/upload", _) => println!("usage: /upload PATH"),
            _ => {
                store.append(ChatRole::User, input);
                let reply = client.send(input).await;
                if reply.is_fallback() {
                    tracing::warn!("chat turn fell back");
                }
                store.append(ChatRole::Assistant, reply.into_text());
                print_viewport(&store);
            }
        }
    }

    Ok(())
}

fn print_viewport(store: &SessionStore) {
    for line in transcript::viewport(store.active(), VIEWPORT_LINES) {
        println!("{line}");
    }
}
