use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::info;

use tidewatch::description::ProfileRegistry;
use tidewatch::scheduler::{self, Schedule};
use tidewatch::{
    GameCalendar, Looker, OpenMeteoClient, SystemClock, TableComposer, TidewatchConfig,
    WeatherEngine, WeatherStore, logging, web, world,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Weather-aware room description engine")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the refresh loops and the admin API (default)
    Serve,
    /// Print one room as a player would see it
    Look {
        room: String,
        /// Short description only
        #[arg(long)]
        brief: bool,
    },
    /// Print the current weather for every tracked location
    Weather,
}

fn build_engine(config: &TidewatchConfig) -> Result<Arc<WeatherEngine>> {
    let clock = Arc::new(SystemClock);
    let locations = config.weather.tracked_locations();
    let home = locations
        .first()
        .map(|l| l.id.clone())
        .context("No weather locations configured")?;

    let source = Arc::new(OpenMeteoClient::new(&config.weather)?);
    let store = Arc::new(WeatherStore::new(locations, source, clock.clone()));
    let composer = Arc::new(TableComposer::new(
        ProfileRegistry::standard(),
        config.text.wrap_width,
    ));
    let engine = WeatherEngine::new(
        store,
        composer,
        GameCalendar::from_name(&config.weather.timezone),
        clock,
        config.text.wrap_width,
    );

    let ttl = Duration::seconds(i64::try_from(config.cache.ttl_seconds).unwrap_or(i64::MAX));
    engine.register_all(world::seed_world(&home, ttl));
    Ok(Arc::new(engine))
}

async fn serve(engine: Arc<WeatherEngine>, config: &TidewatchConfig) -> Result<()> {
    let report = engine.init().await;
    info!(
        "Startup weather fetched for {} location(s), {} room(s) rendered",
        report.changed_locations.len(),
        report.regenerated_rooms.len()
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, shutting down gracefully...");
                shutdown_tx.send(()).ok();
            }
        }
    });

    let mut loops = scheduler::spawn(
        Arc::clone(&engine),
        Schedule::from_config(config),
        shutdown_rx.clone(),
    );

    // Stands in for the game framework's per-room broadcast
    let mut notices = engine.subscribe();
    let mut notice_shutdown = shutdown_rx.clone();
    loops.push(tokio::spawn(async move {
        loop {
            tokio::select! {
                notice = notices.recv() => match notice {
                    Ok(notice) => info!(room = %notice.room_id, "{}", notice.message),
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("Dropped {} room notice(s)", n);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                },
                _ = notice_shutdown.changed() => break,
            }
        }
    }));

    web::run(Arc::clone(&engine), &config.server, shutdown_rx).await?;

    for handle in loops {
        handle.await.ok();
    }
    engine.shutdown();
    drop(shutdown_tx);
    info!("tidewatch stopped.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TidewatchConfig::load_from_path(cli.config)?;
    logging::init(&config.logging)?;

    let engine = build_engine(&config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(engine, &config).await,
        Command::Look { room, brief } => {
            engine.init().await;
            let looker = Looker::new("console").brief(brief);
            println!("{}", engine.render_room_description(&room, &looker)?);
            Ok(())
        }
        Command::Weather => {
            engine.init().await;
            println!("Time period: {}", engine.get_time_period());
            for location in engine.store().locations() {
                println!(
                    "{}: {}",
                    location.id,
                    engine.get_weather_data(&location.id).describe()
                );
            }
            Ok(())
        }
    }
}
