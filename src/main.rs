use actix_web::{web, App, HttpServer};
use log::{error, info};
use weatherproxy::errors::UnrecoverableError;
use weatherproxy::handlers;
use weatherproxy::initialization::{api_key, config};
use weatherproxy::logging::init_logging;
use weatherproxy::manager_owm::OWM;
use weatherproxy::AppState;

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    init_logging()?;

    let api_key = api_key();
    if api_key.is_none() {
        error!("missing OPENWEATHER_API_KEY in environment, upstream calls will fail");
    }

    let owm = OWM::new(&config.open_weather.base_url, config.open_weather.timeout, api_key)?;

    info!("starting server on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { owm: owm.clone() }))
            .service(handlers::health)
            .service(handlers::current_weather)
            .service(handlers::daily_forecast)
            .service(handlers::hourly_forecast)
            .service(handlers::forecast)
            .service(handlers::lookup)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
