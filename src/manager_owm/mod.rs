pub mod errors;
pub mod models;

use std::time::Duration;
use chrono::{FixedOffset, Offset, Utc};
use reqwest::Client;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{ForecastDocument, ForecastSample, FullForecast};

/// Struct for managing weather queries forwarded to OpenWeatherMap
#[derive(Clone)]
pub struct OWM {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Status code and body of a provider response, relayed to the caller untouched
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl OWM {
    /// Returns an OWM struct ready for forwarding weather queries to OpenWeatherMap
    ///
    /// # Arguments
    ///
    /// * 'base_url' - base url of the OpenWeatherMap API
    /// * 'timeout' - request timeout in seconds
    /// * 'api_key' - server held credential, appended to every upstream call
    pub fn new(base_url: &str, timeout: u64, api_key: Option<String>) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Forwards a current conditions query and returns whatever the provider answered
    ///
    /// # Arguments
    ///
    /// * 'location' - free text location query, e.g. a city name
    /// * 'units' - unit system token, e.g. "metric"
    pub async fn current(&self, location: &str, units: &str) -> Result<UpstreamResponse, OWMError> {
        self.forward("weather", location, units).await
    }

    /// Forwards a 5-day/3-hour forecast query and returns whatever the provider answered
    ///
    /// # Arguments
    ///
    /// * 'location' - free text location query, e.g. a city name
    /// * 'units' - unit system token, e.g. "metric"
    pub async fn forecast(&self, location: &str, units: &str) -> Result<UpstreamResponse, OWMError> {
        self.forward("forecast", location, units).await
    }

    /// Runs the current conditions and forecast queries concurrently as one lookup.
    /// A network failure on either side fails the whole lookup.
    ///
    /// # Arguments
    ///
    /// * 'location' - free text location query, e.g. a city name
    /// * 'units' - unit system token, e.g. "metric"
    pub async fn lookup(
        &self,
        location: &str,
        units: &str,
    ) -> Result<(UpstreamResponse, UpstreamResponse), OWMError> {
        tokio::try_join!(self.current(location, units), self.forecast(location, units))
    }

    async fn forward(
        &self,
        resource: &str,
        location: &str,
        units: &str,
    ) -> Result<UpstreamResponse, OWMError> {
        let url = format!("{}/{}", self.base_url, resource);

        let req = self.client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_deref().unwrap_or_default()),
                ("units", units),
            ])
            .send().await?;

        let status = req.status().as_u16();
        let body = req.text().await?;

        Ok(UpstreamResponse { status, body })
    }
}

/// Parses a provider forecast body into the flat sample sequence used for grouping.
///
/// Samples keep the provider's order. The grouping offset is the location's own
/// UTC offset as reported by the provider, falling back to UTC when out of range.
///
/// # Arguments
///
/// * 'body' - JSON body of a forecast response
pub fn parse_forecast(body: &str) -> Result<ForecastDocument, OWMError> {
    let full: FullForecast = serde_json::from_str(body)?;

    let utc_offset = FixedOffset::east_opt(full.city.timezone).unwrap_or_else(|| Utc.fix());

    let samples = full.list
        .into_iter()
        .map(|entry| {
            let (condition, description) = entry.weather
                .into_iter()
                .next()
                .map(|w| (w.main, w.description))
                .unwrap_or_default();

            ForecastSample {
                valid_time: entry.dt,
                temp: entry.main.temp,
                condition,
                description,
            }
        })
        .collect();

    Ok(ForecastDocument {
        city: full.city.name,
        utc_offset,
        samples,
    })
}
