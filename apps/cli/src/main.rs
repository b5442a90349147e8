use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    Diagnostics, HttpDispatcher, Indicator, NotificationEvent, NotificationPhase, Notifier, Page,
    PageController, TargetId,
};
use futures::StreamExt;
use shared::domain::Severity;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{parse_command, ConsoleCommand, HELP};

#[derive(Parser, Debug)]
#[command(version, about = "Console page for the greeting, weather and quote endpoints")]
struct Args {
    /// Config file; `client.toml` in the working directory is read when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<String>,
    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Name sent when the name input is blank.
    #[arg(long)]
    default_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(v) = args.base_url {
        settings.base_url = v;
    }
    if let Some(v) = args.timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = args.default_name {
        settings.default_name = v;
    }
    let client_settings = settings
        .client_settings()
        .context("invalid client settings")?;

    let (diagnostics, mut reports) = Diagnostics::new();
    diagnostics.install_panic_hook();
    let (notifier, mut notifications) = Notifier::new();
    let default_name = client_settings.default_name.clone();
    let mut controller = PageController::new(
        Arc::new(HttpDispatcher::new(client_settings)),
        Page::new(),
        default_name,
        diagnostics,
    );

    info!(server = %settings.base_url, timeout_secs = settings.request_timeout_secs, "page loaded");
    println!("{HELP}\n");

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    loop {
        tokio::select! {
            line = lines.next() => {
                let Some(line) = line else { break };
                let line = line.context("failed to read stdin")?;
                match parse_command(&line) {
                    Ok(Some(ConsoleCommand::Quit)) => break,
                    Ok(Some(command)) => run_command(&mut controller, &notifier, command),
                    Ok(None) => {}
                    Err(err) => {
                        notifier.show(err.to_string(), Severity::Error);
                    }
                }
            }
            Some(event) = controller.next_event() => {
                match controller.apply(event) {
                    Ok(target) => print_target(controller.page(), target),
                    Err(err) => warn!(error = %err, "completion dropped"),
                }
            }
            Some(event) = notifications.recv() => print_notification(&event),
            Some(report) = reports.recv() => {
                eprintln!("[{}] {:?}: {}", report.at, report.kind, report.message);
            }
        }
    }

    info!("page closed");
    Ok(())
}

fn run_command(controller: &mut PageController, notifier: &Notifier, command: ConsoleCommand) {
    let action = command.action();
    match command {
        ConsoleCommand::Greet { method, name } => {
            controller.page_mut().set_name_input(method, name);
        }
        ConsoleCommand::Show => {
            for id in TargetId::ALL {
                print_target(controller.page(), id);
            }
        }
        ConsoleCommand::Notify { message, severity } => {
            notifier.show(message, severity);
        }
        ConsoleCommand::Help => println!("{HELP}\n"),
        ConsoleCommand::Fetch(_) | ConsoleCommand::Quit => {}
    }

    let Some(action) = action else { return };
    match controller.trigger(action) {
        Ok(_) => print_target(controller.page(), action.target()),
        Err(err) => {
            notifier.show(err.to_string(), Severity::Error);
        }
    }
}

fn print_target(page: &Page, id: TargetId) {
    let Ok(target) = page.target(id) else {
        return;
    };
    let tag = match target.indicator() {
        None => "idle",
        Some(Indicator::Loading) => "loading",
        Some(Indicator::Success) => "success",
        Some(Indicator::Error) => "error",
    };
    println!("[{}] ({tag})\n{}\n", id.element_id(), target.content());
}

fn print_notification(event: &NotificationEvent) {
    match event.phase {
        NotificationPhase::Entering => {
            println!("🔔 {} [{}]", event.message, event.severity.colour());
        }
        NotificationPhase::Removed => {
            tracing::debug!(id = %event.id.0, "notification dismissed");
        }
        NotificationPhase::Mounted | NotificationPhase::Exiting => {}
    }
}
