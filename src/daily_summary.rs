use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use crate::condition::Condition;
use crate::manager_owm::models::ForecastSample;

/// At most this many daily summaries are produced per forecast
const MAX_DAYS: usize = 5;

/// Aggregated high/low/dominant-condition for one calendar date
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub high: i64,
    pub low: i64,
    pub condition: String,
    pub description: String,
    pub icon: &'static str,
}

struct DayBucket {
    date: NaiveDate,
    temps: Vec<f64>,
    conditions: Vec<(String, usize)>,
    description: String,
}

impl DayBucket {
    fn new(date: NaiveDate, description: &str) -> Self {
        Self {
            date,
            temps: Vec::new(),
            conditions: Vec::new(),
            description: description.to_string(),
        }
    }

    fn add(&mut self, sample: &ForecastSample) {
        self.temps.push(sample.temp);

        match self.conditions.iter_mut().find(|(c, _)| c == &sample.condition) {
            Some((_, count)) => *count += 1,
            None => self.conditions.push((sample.condition.clone(), 1)),
        }
    }

    fn into_summary(self) -> DailySummary {
        let high = self.temps.iter().copied().fold(f64::MIN, f64::max).round() as i64;
        let low = self.temps.iter().copied().fold(f64::MAX, f64::min).round() as i64;

        // first condition to reach the maximum count wins a tie
        let mut dominant: (&str, usize) = ("", 0);
        for (condition, count) in &self.conditions {
            if *count > dominant.1 {
                dominant = (condition, *count);
            }
        }

        let condition = dominant.0.to_string();
        let icon = Condition::parse(&condition).icon();

        DailySummary {
            date: self.date,
            high,
            low,
            condition,
            description: self.description,
            icon,
        }
    }
}

/// Groups 3-hour forecast samples into at most five daily summaries.
///
/// Each sample is keyed by its calendar date in the given time zone. Dates are
/// emitted in the order they are first seen in the input, high and low are the
/// rounded extremes of the date's temperatures, and the dominant condition is
/// the one occurring most often among the date's samples.
///
/// # Arguments
///
/// * 'samples' - forecast samples in provider order
/// * 'zone' - time zone the calendar dates are derived in
pub fn summarize_by_day<Tz: TimeZone>(samples: &[ForecastSample], zone: &Tz) -> Vec<DailySummary> {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let date = sample.valid_time.with_timezone(zone).date_naive();

        let idx = match buckets.iter().position(|b| b.date == date) {
            Some(idx) => idx,
            None => {
                buckets.push(DayBucket::new(date, &sample.description));
                buckets.len() - 1
            }
        };

        buckets[idx].add(sample);
    }

    buckets
        .into_iter()
        .take(MAX_DAYS)
        .map(DayBucket::into_summary)
        .collect()
}

/// Filters the full sample sequence down to one calendar date, preserving order.
/// A pure re-filter of the input, not derived from the aggregated summaries.
///
/// # Arguments
///
/// * 'samples' - forecast samples in provider order
/// * 'date' - calendar date to keep
/// * 'zone' - time zone the calendar dates are derived in
pub fn hourly_for_date<Tz: TimeZone>(
    samples: &[ForecastSample],
    date: NaiveDate,
    zone: &Tz,
) -> Vec<ForecastSample> {
    samples
        .iter()
        .filter(|s| s.valid_time.with_timezone(zone).date_naive() == date)
        .cloned()
        .collect()
}
