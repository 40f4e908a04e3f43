// Board assembly - everything the dashboard renders for one day
use std::sync::Arc;

use chrono::NaiveDate;
use dailyboard_api::{ForecastResponse, WeatherClient};
use tracing::warn;

use crate::{
    clock::{day_index, Clock},
    config::{ContentConfig, WeatherConfig},
    models::{GameEntry, LoveNote, PhotoCaption, WeatherReport},
    resolver::{ArtworkResolver, Resolution},
    rotation::{daily_pick, load_list},
};

/// The rotation lists the board draws from.
#[derive(Default)]
pub struct BoardContent {
    pub notes: Vec<LoveNote>,
    pub photos: Vec<PhotoCaption>,
    pub games: Vec<GameEntry>,
}

impl BoardContent {
    pub fn load(config: &ContentConfig) -> Self {
        Self {
            notes: load_list(config.notes_path.as_deref()),
            photos: load_list(config.captions_path.as_deref()),
            games: load_list(config.games_path.as_deref()),
        }
    }
}

/// One day's board, ready to render. Every widget is optional; the board
/// shows whatever resolved and leaves the rest blank.
#[derive(Debug)]
pub struct DailyBoard {
    pub date_heading: String,
    pub artwork: Resolution,
    pub weather: Option<WeatherReport>,
    pub note: Option<LoveNote>,
    pub photo: Option<PhotoCaption>,
    pub game: Option<GameEntry>,
}

/// Assembles the daily board: artwork and weather fetched concurrently,
/// rotation picks computed locally.
pub struct BoardAssembler {
    resolver: ArtworkResolver,
    weather_client: WeatherClient,
    weather_config: WeatherConfig,
    content: BoardContent,
    clock: Arc<dyn Clock>,
}

impl BoardAssembler {
    pub fn new(
        resolver: ArtworkResolver,
        weather_client: WeatherClient,
        weather_config: WeatherConfig,
        content: BoardContent,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            weather_client,
            weather_config,
            content,
            clock,
        }
    }

    pub async fn assemble(&self) -> DailyBoard {
        let today = self.clock.today();
        let index = day_index(today);

        let (artwork, weather) = futures::join!(self.resolver.resolve(), self.fetch_weather());

        DailyBoard {
            date_heading: format_heading(today),
            artwork,
            weather,
            note: daily_pick(&self.content.notes, index).cloned(),
            photo: daily_pick(&self.content.photos, index).cloned(),
            game: daily_pick(&self.content.games, index).cloned(),
        }
    }

    async fn fetch_weather(&self) -> Option<WeatherReport> {
        let forecast = self
            .weather_client
            .forecast(
                self.weather_config.latitude,
                self.weather_config.longitude,
                &self.weather_config.timezone,
            )
            .await;

        match forecast {
            Ok(forecast) => report_from(&forecast),
            Err(e) => {
                warn!("weather unavailable: {}", e);
                None
            }
        }
    }
}

/// Date heading in the board's style: `Fri Aug 7`.
pub fn format_heading(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// Round the forecast into display form. Missing daily aggregates mean
/// no report rather than a partial one.
fn report_from(forecast: &ForecastResponse) -> Option<WeatherReport> {
    Some(WeatherReport {
        temperature: forecast.current.temperature_2m.round() as i32,
        code: forecast.current.weather_code,
        high: forecast.daily.temperature_2m_max.first()?.round() as i32,
        low: forecast.daily.temperature_2m_min.first()?.round() as i32,
    })
}
