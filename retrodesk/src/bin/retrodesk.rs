use anyhow::{Context, Result};
use clap::{arg, command};
use retrodesk_core::{CommandPipe, HeadlessSurface, Manager};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = command!("retrodesk")
        .about("Runs the desktop shell headless: commands on stdin, state as JSON lines on stdout")
        .help_template(retrodesk::utils::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Use this config file instead of the one in the XDG config dir"),
        ])
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => retrodesk::load_from_path(&PathBuf::from(path))
            .with_context(|| format!("Couldn't load config from {path}"))?,
        None => retrodesk::load(),
    };
    retrodesk::utils::log::setup_logging(&config.log_level);
    for problem in config.problems() {
        tracing::warn!("Config: {}", problem);
    }
    tracing::info!("retrodesk booting with {} windows", config.windows.len());

    let manager = Manager::<retrodesk::Config, HeadlessSurface>::new(config);
    let command_pipe = CommandPipe::new(tokio::io::stdin());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(state) = rx.recv().await {
            let mut line = serde_json::to_string(&state)?;
            line.push('\n');
            stdout.write_all(line.as_bytes()).await?;
            stdout.flush().await?;
        }
        Ok::<(), anyhow::Error>(())
    });

    let manager = manager.event_loop(command_pipe, tx).await;
    printer.await.context("State printer panicked")??;

    tracing::info!(
        "Completed, {} windows left open",
        manager.state.registry.all().filter(|(_, w)| w.is_open).count()
    );
    Ok(())
}
