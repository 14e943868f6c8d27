// Main entry point - Dependency injection and the view event loop
use std::sync::Arc;

use anyhow::Context;
use thermasense_client::application::identity::bootstrap_identity;
use thermasense_client::application::poll_timer::PollTimer;
use thermasense_client::application::view_controller::ViewController;
use thermasense_client::infrastructure::config::load_client_config;
use thermasense_client::infrastructure::file_store::FileStore;
use thermasense_client::infrastructure::http_api::HttpThermaApi;
use thermasense_client::infrastructure::interval_timer::IntervalTimer;
use thermasense_client::presentation::commands::{resolve_zone, Command, HELP};
use thermasense_client::presentation::screen::Screen;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("thermasense_client=info,thermasense=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_client_config().context("Failed to load configuration")?;

    // Identity is read once and never written again this session
    let store = FileStore::new(&config.identity.path);
    let user_id = bootstrap_identity(&store)
        .with_context(|| format!("Failed to bootstrap identity at {}", store.path().display()))?;

    let api = Arc::new(HttpThermaApi::new(
        &config.api.base_url,
        config.api.request_timeout(),
    )?);
    tracing::info!("Using ThermaSense API at {}", config.api.base_url);

    let mut view = ViewController::new(
        user_id,
        api,
        IntervalTimer::new(),
        config.polling.interval(),
    );
    let mut screen = Screen::new();

    view.mount().await;
    redraw(&mut screen, &view);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(None) => continue,
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => {
                        println!("{}", HELP);
                        continue;
                    }
                    Ok(Some(Command::Zones)) => {}
                    Ok(Some(Command::SelectZone(selector))) => {
                        match resolve_zone(view.zones(), &selector) {
                            Ok(zone) => {
                                let zone_id = zone.zone_id.clone();
                                view.select_zone(&zone_id);
                            }
                            Err(err) => {
                                println!("{}", err);
                                continue;
                            }
                        }
                    }
                    Ok(Some(Command::Vote(value))) => view.submit_vote(value).await,
                    Ok(Some(Command::Back)) => view.return_to_voting(),
                    Err(err) => {
                        println!("{}. {}", err, HELP);
                        continue;
                    }
                }
                redraw(&mut screen, &view);
            }
            progress = view.poll() => {
                tracing::debug!(?progress, "View progressed");
                redraw(&mut screen, &view);
            }
        }
    }

    view.teardown();
    tracing::info!("Bye");
    Ok(())
}

fn redraw<T: PollTimer>(screen: &mut Screen, view: &ViewController<T>) {
    print!("\x1b[2J\x1b[H");
    println!("{}", screen.render(&view.snapshot()));
}
