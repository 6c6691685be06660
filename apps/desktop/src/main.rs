use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use client_core::{flow, DialogState, ElectionClient, JoinFlow, Pane, ViewModel};
use shared::domain::InvitationToken;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the election service.
    #[arg(long)]
    server_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = url;
    }
    if let Some(secs) = args.request_timeout_secs {
        settings.request_timeout_secs = secs;
    }

    let client = ElectionClient::with_timeout(
        &settings.server_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    let mut view = ViewModel::new();
    let mut join_flow = JoinFlow::new();

    // Startup half of the protocol; a failure shows an error dialog but the
    // landing pane still comes up so the user can try joining.
    let _ = flow::display_public_key(&client, &mut view).await;
    render(&view);

    let stdin = io::stdin();
    loop {
        print!("invitation token (or 'quit')> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if token == "quit" {
            break;
        }

        // Entering a new token doubles as the error dialog's dismiss action.
        view.close_dialog();

        match join_flow
            .join(&client, &mut view, &InvitationToken::new(token))
            .await
        {
            Ok(()) => {
                render(&view);
                break;
            }
            Err(err) => {
                tracing::warn!(error = %err, "join attempt failed");
                render(&view);
            }
        }
    }

    Ok(())
}

fn render(view: &ViewModel) {
    match view.pane() {
        Pane::Landing => {
            println!("== Landing ==");
            match view.public_key() {
                Some(key) => println!("Service public key:\n{key}"),
                None => println!("Service public key: (unavailable)"),
            }
        }
        Pane::Election => {
            println!("== {} ==", view.election_title());
            println!("{}", view.election_description());
        }
    }
    if let DialogState::Visible {
        message,
        has_action_button,
    } = view.dialog()
    {
        if *has_action_button {
            println!("[dialog] {message} (enter a token to dismiss and retry)");
        } else {
            println!("[dialog] {message}");
        }
    }
}
