use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dailyboard_api::WeatherClient;
use dailyboard_cache::SqliteStore;
use dailyboard_core::board::{BoardAssembler, BoardContent, DailyBoard};
use dailyboard_core::clock::{day_index, Clock, FixedClock, SystemClock};
use dailyboard_core::models::ArtworkRecord;
use dailyboard_core::providers::MetArtworkSource;
use dailyboard_core::resolver::{ArtworkResolver, Resolution, ResolverOptions, CACHE_KEY};
use dailyboard_core::source::ArtworkSource;
use dailyboard_core::store::{DailyStore, MemoryStore};
use dailyboard_core::{wmo, Config};

#[derive(Parser)]
#[command(name = "dailyboard")]
#[command(version, about = "Daily board engine - artwork of the day and friends", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render today's full board (the default)
    Board,
    /// Resolve and show today's artwork
    Artwork,
    /// Show today's weather tile
    Weather,
    /// Replay artwork selection for upcoming days against the live API
    Simulate {
        /// How many days ahead to check
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Drop the cached daily artwork
    ClearCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dailyboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    match cli.command.unwrap_or(Commands::Board) {
        Commands::Board => show_board(&config).await,
        Commands::Artwork => show_artwork(&config).await,
        Commands::Weather => show_weather(&config).await,
        Commands::Simulate { days } => simulate(&config, days).await,
        Commands::ClearCache => clear_cache(&config),
    }
}

/// Build the resolver stack from config. A broken cache file downgrades
/// to an in-memory store rather than taking the board down.
fn build_resolver(config: &Config, clock: Arc<dyn Clock>) -> anyhow::Result<ArtworkResolver> {
    let source = Arc::new(MetArtworkSource::new(&config.museum));
    let store = open_store(config)?;

    let options = ResolverOptions {
        max_retries: config.museum.max_retries,
        retry_stride: config.museum.retry_stride,
        min_image_dimension: config.museum.min_image_dimension,
        placeholder_markers: config.museum.placeholder_markers.clone(),
    };

    Ok(ArtworkResolver::with_options(source, store, clock, options))
}

fn open_store(config: &Config) -> anyhow::Result<Arc<dyn DailyStore>> {
    let db_path = config.cache.db_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match SqliteStore::open(&db_path) {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => {
            warn!("cache at {} unavailable ({}), running without", db_path.display(), e);
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn show_board(config: &Config) -> anyhow::Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let resolver = build_resolver(config, Arc::clone(&clock))?;
    let assembler = BoardAssembler::new(
        resolver,
        WeatherClient::new(),
        config.weather.clone(),
        BoardContent::load(&config.content),
        clock,
    );

    render_board(&assembler.assemble().await);
    Ok(())
}

fn render_board(board: &DailyBoard) {
    println!("{}", board.date_heading);
    println!();

    match &board.artwork {
        Resolution::Found(record) => render_artwork(record),
        Resolution::NotFound => println!("no artwork today"),
    }

    println!();
    match &board.weather {
        Some(report) => {
            println!(
                "weather   {}°  H:{} L:{}  {}",
                report.temperature,
                report.high,
                report.low,
                wmo::label(report.code)
            );
            println!("          {}", wmo::letter_spaced(wmo::board_message(report.code)));
        }
        None => println!("weather   unavailable"),
    }

    if let Some(note) = &board.note {
        println!();
        println!("love note  {}", note.note);
    }

    if let Some(photo) = &board.photo {
        println!();
        println!("pic of us  {}  ({})", photo.caption, photo.image);
    }

    if let Some(game) = &board.game {
        println!();
        println!("game       {}  ({})", game.title, game.url);
    }
}

fn render_artwork(record: &ArtworkRecord) {
    if let Some(title) = &record.title {
        println!("{}", title);
    }
    match (&record.artist, &record.artist_bio) {
        (Some(artist), Some(bio)) => println!("{} ({})", artist, bio),
        (Some(artist), None) => println!("{}", artist),
        _ => {}
    }

    let line: Vec<&str> = [record.object_date.as_deref(), record.medium.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !line.is_empty() {
        println!("{}", line.join(", "));
    }

    if let Some(department) = &record.department {
        println!("{}", department);
    }
    if let Some(credit_line) = &record.credit_line {
        println!("{}", credit_line);
    }
    if let Some(year) = &record.accession_year {
        println!("accessioned {}", year);
    }
    if let Some(url) = &record.primary_image {
        println!("{}", url);
    }
}

async fn show_artwork(config: &Config) -> anyhow::Result<()> {
    let resolver = build_resolver(config, Arc::new(SystemClock))?;

    match resolver.resolve().await {
        Resolution::Found(record) => render_artwork(&record),
        Resolution::NotFound => println!("no artwork today"),
    }
    Ok(())
}

async fn show_weather(config: &Config) -> anyhow::Result<()> {
    let forecast = WeatherClient::new()
        .forecast(
            config.weather.latitude,
            config.weather.longitude,
            &config.weather.timezone,
        )
        .await
        .context("fetching forecast")?;

    let code = forecast.current.weather_code;
    println!(
        "{}  {}°",
        wmo::label(code),
        forecast.current.temperature_2m.round()
    );
    if let (Some(high), Some(low)) = (
        forecast.daily.temperature_2m_max.first(),
        forecast.daily.temperature_2m_min.first(),
    ) {
        println!("H:{} L:{}", high.round(), low.round());
    }
    println!("{}", wmo::letter_spaced(wmo::board_message(code)));
    Ok(())
}

/// Replay the selection loop for the next `days` days, the way the
/// original pre-launch check did: every day should land on a valid,
/// non-placeholder artwork. Exits nonzero if any day comes up empty.
async fn simulate(config: &Config, days: u32) -> anyhow::Result<()> {
    let source: Arc<dyn ArtworkSource> = Arc::new(MetArtworkSource::new(&config.museum));
    let today = SystemClock.today();
    let mut failed = 0u32;

    println!("replaying artwork selection for the next {} days\n", days);

    for offset in 0..days {
        let date = today + chrono::Duration::days(i64::from(offset));

        // Fresh in-memory store per day: the replay must exercise the
        // network path, not yesterday's cache.
        let resolver = ArtworkResolver::with_options(
            Arc::clone(&source),
            Arc::new(MemoryStore::new()),
            Arc::new(FixedClock(date)),
            ResolverOptions {
                max_retries: config.museum.max_retries,
                retry_stride: config.museum.retry_stride,
                min_image_dimension: config.museum.min_image_dimension,
                placeholder_markers: config.museum.placeholder_markers.clone(),
            },
        );

        match resolver.resolve().await {
            Resolution::Found(record) => {
                let title = record.title.as_deref().unwrap_or("(untitled)");
                println!("  PASS  {}  (day {})  \"{}\"", date, day_index(date), title);
            }
            Resolution::NotFound => {
                println!("  FAIL  {}  (day {})  no valid artwork", date, day_index(date));
                failed += 1;
            }
        }
    }

    println!();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} days found no artwork - consider raising max_retries",
            failed,
            days
        );
    }
    println!("all {} days resolve to a valid artwork", days);
    Ok(())
}

fn clear_cache(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.remove(CACHE_KEY);
    println!("cache cleared");
    Ok(())
}
