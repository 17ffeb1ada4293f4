use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, Utc};

#[derive(Deserialize)]
pub struct Data {
    pub temp: f64,
}

#[derive(Deserialize)]
pub struct Weather {
    pub main: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct FullTimeSlot {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: Data,
    pub weather: Vec<Weather>,
}

#[derive(Deserialize)]
pub struct FullCity {
    pub name: String,
    // seconds east of UTC
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullTimeSlot>,
    pub city: FullCity,
}

/// One 3-hour forecast data point as handed to the aggregation layer
#[derive(Debug, Clone, Serialize)]
pub struct ForecastSample {
    pub valid_time: DateTime<Utc>,
    pub temp: f64,
    pub condition: String,
    pub description: String,
}

/// A parsed forecast response: the location, its UTC offset and the flat sample sequence
#[derive(Debug, Clone)]
pub struct ForecastDocument {
    pub city: String,
    pub utc_offset: FixedOffset,
    pub samples: Vec<ForecastSample>,
}
