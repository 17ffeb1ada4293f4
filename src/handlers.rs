use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use chrono::NaiveDate;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use crate::daily_summary::{hourly_for_date, summarize_by_day};
use crate::manager_owm::{parse_forecast, UpstreamResponse};
use crate::AppState;

#[derive(Deserialize, Debug)]
pub struct WeatherQuery {
    q: Option<String>,
    #[serde(default = "default_units")]
    units: String,
}

#[derive(Deserialize, Debug)]
pub struct HourlyQuery {
    q: Option<String>,
    #[serde(default = "default_units")]
    units: String,
    date: Option<NaiveDate>,
}

fn default_units() -> String {
    "metric".to_string()
}

fn location(q: &Option<String>) -> Option<&str> {
    q.as_deref().filter(|q| !q.is_empty())
}

fn missing_param(name: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": format!("Missing query param {}", name) }))
}

fn proxy_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "Proxy error" }))
}

fn relay(upstream: UpstreamResponse) -> HttpResponse {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);

    HttpResponse::build(status)
        .content_type("application/json")
        .body(upstream.body)
}

#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

#[get("/api/weather")]
pub async fn current_weather(params: web::Query<WeatherQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let q = if let Some(q) = location(&params.q) {
        q
    } else {
        return missing_param("q");
    };

    match data.owm.current(q, &params.units).await {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            error!("failed to reach provider: {}", e);
            proxy_error()
        }
    }
}

#[get("/api/forecast")]
pub async fn forecast(params: web::Query<WeatherQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let q = if let Some(q) = location(&params.q) {
        q
    } else {
        return missing_param("q");
    };

    match data.owm.forecast(q, &params.units).await {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            error!("failed to reach provider: {}", e);
            proxy_error()
        }
    }
}

#[get("/api/forecast/daily")]
pub async fn daily_forecast(params: web::Query<WeatherQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let q = if let Some(q) = location(&params.q) {
        q
    } else {
        return missing_param("q");
    };

    let upstream = match data.owm.forecast(q, &params.units).await {
        Ok(upstream) => upstream,
        Err(e) => {
            error!("failed to reach provider: {}", e);
            return proxy_error();
        }
    };

    if !upstream.is_success() {
        return relay(upstream);
    }

    match parse_forecast(&upstream.body) {
        Ok(doc) => {
            let days = summarize_by_day(&doc.samples, &doc.utc_offset);
            HttpResponse::Ok().json(json!({ "city": doc.city, "days": days }))
        }
        Err(e) => {
            error!("failed to parse provider forecast: {}", e);
            proxy_error()
        }
    }
}

#[get("/api/forecast/hourly")]
pub async fn hourly_forecast(params: web::Query<HourlyQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let q = if let Some(q) = location(&params.q) {
        q
    } else {
        return missing_param("q");
    };
    let date = if let Some(date) = params.date {
        date
    } else {
        return missing_param("date");
    };

    let upstream = match data.owm.forecast(q, &params.units).await {
        Ok(upstream) => upstream,
        Err(e) => {
            error!("failed to reach provider: {}", e);
            return proxy_error();
        }
    };

    if !upstream.is_success() {
        return relay(upstream);
    }

    match parse_forecast(&upstream.body) {
        Ok(doc) => {
            let hours = hourly_for_date(&doc.samples, date, &doc.utc_offset);
            HttpResponse::Ok().json(json!({ "city": doc.city, "date": date, "hours": hours }))
        }
        Err(e) => {
            error!("failed to parse provider forecast: {}", e);
            proxy_error()
        }
    }
}

#[get("/api/lookup")]
pub async fn lookup(params: web::Query<WeatherQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let q = if let Some(q) = location(&params.q) {
        q
    } else {
        return missing_param("q");
    };

    let (current, forecast_resp) = match data.owm.lookup(q, &params.units).await {
        Ok(pair) => pair,
        Err(e) => {
            error!("failed to reach provider: {}", e);
            return proxy_error();
        }
    };

    // no partial result: the first failing side decides the whole response
    if !current.is_success() {
        return relay(current);
    }
    if !forecast_resp.is_success() {
        return relay(forecast_resp);
    }

    let current_body: serde_json::Value = match serde_json::from_str(&current.body) {
        Ok(v) => v,
        Err(e) => {
            error!("failed to parse provider response: {}", e);
            return proxy_error();
        }
    };
    let forecast_body: serde_json::Value = match serde_json::from_str(&forecast_resp.body) {
        Ok(v) => v,
        Err(e) => {
            error!("failed to parse provider response: {}", e);
            return proxy_error();
        }
    };

    HttpResponse::Ok().json(json!({ "current": current_body, "forecast": forecast_body }))
}
