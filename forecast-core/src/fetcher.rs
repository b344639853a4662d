use chrono::{DateTime, Local};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::{config::Config, model::ForecastEntry};

/// Public OpenWeather endpoint used when the config carries no override.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Number of forecast samples exposed to the frontend.
const MAX_ENTRIES: usize = 6;

/// Construction-time configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing API key. Set OPENWEATHER_API_KEY or run `forecast configure`.")]
    MissingApiKey,
}

/// The single error surfaced by [`ForecastFetcher::fetch_forecast`].
///
/// The underlying cause is logged and kept as `source()` for diagnostics, but
/// callers are not expected to branch on it.
#[derive(Debug, Error)]
#[error("Failed to fetch weather data")]
pub struct FetchError {
    #[source]
    cause: FetchCause,
}

#[derive(Debug, Error)]
enum FetchCause {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Provider { status: StatusCode, body: String },

    #[error("failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed forecast response: {0}")]
    Shape(String),
}

/// Fetches the upcoming forecast for a city and normalizes it for display.
///
/// Each call is a stateless request/response round trip: one outbound HTTP
/// request, no caching, no retries, no internal timeout.
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    base_url: String,
    api_key: String,
    http: Client,
}

impl ForecastFetcher {
    /// Build a fetcher from configuration.
    ///
    /// Fails when no API key is configured (missing, empty, or
    /// whitespace-only). Nothing touches the network here.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url,
            api_key,
            http: Client::new(),
        })
    }

    /// Fetch up to six forecast entries for `city`, in provider order.
    ///
    /// On success the sequence has `min(6, samples)` entries. Any failure —
    /// transport, provider status, malformed body — collapses into
    /// [`FetchError`], with the cause logged.
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        match self.fetch_inner(city).await {
            Ok(entries) => {
                debug!(city, ?entries, "transformed forecast payload");
                Ok(entries)
            }
            Err(cause) => {
                error!(city, %cause, "forecast fetch failed");
                Err(FetchError { cause })
            }
        }
    }

    async fn fetch_inner(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchCause> {
        let url = format!("{}/forecast", self.base_url);

        debug!(city, %url, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchCause::Provider {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: RawForecast = serde_json::from_str(&body)?;

        transform(&parsed)
    }
}

#[derive(Debug, Deserialize)]
struct RawCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    icon: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    dt: i64,
    main: RawMain,
    wind: RawWind,
    #[serde(default)]
    weather: Vec<RawDescriptor>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    city: RawCity,
    list: Vec<RawSample>,
}

/// Map the first six samples into frontend-ready entries, preserving order.
///
/// The city name is taken once from the top-level response and applied to
/// every entry. A missing weather descriptor defaults to empty strings.
fn transform(raw: &RawForecast) -> Result<Vec<ForecastEntry>, FetchCause> {
    raw.list
        .iter()
        .take(MAX_ENTRIES)
        .map(|sample| {
            Ok(ForecastEntry {
                city: raw.city.name.clone(),
                date: format_date(sample.dt)?,
                icon: sample
                    .weather
                    .first()
                    .map(|w| w.icon.clone())
                    .unwrap_or_default(),
                icon_description: sample
                    .weather
                    .first()
                    .map(|w| w.description.clone())
                    .unwrap_or_default(),
                temp_f: sample.main.temp.round() as i32,
                wind_speed: sample.wind.speed.round() as i32,
                humidity: sample.main.humidity,
            })
        })
        .collect()
}

/// Calendar date for a Unix timestamp in the local time zone, `M/D/YYYY`.
fn format_date(dt: i64) -> Result<String, FetchCause> {
    let ts = DateTime::from_timestamp(dt, 0)
        .ok_or_else(|| FetchCause::Shape(format!("timestamp {dt} out of range")))?;

    Ok(ts.with_timezone(&Local).format("%-m/%-d/%Y").to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // The body is untrusted; cut on a char boundary, not a raw byte offset.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
