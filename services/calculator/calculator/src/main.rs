#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;

#[rocket::main]
async fn main() {
    env_logger::init();

    let figment = config::figment();
    let config: config::Config = figment.extract().unwrap();

    let result = rocket::custom(figment)
        .manage(config.api)
        .mount("/", api::routes())
        .launch()
        .await;

    assert!(result.is_ok());
}
