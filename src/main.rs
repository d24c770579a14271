mod api;
mod config;
mod database;
mod error;
mod model;
mod resolver;
mod seed;

use api::Api;
use config::Config;
use error::{Error, Result};
use log::{debug, info};
use resolver::FavoriteMovies;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

#[derive(Deserialize)]
struct Request {
    operation: String,
    #[serde(default)]
    arguments: Value,
}

fn handle<D>(api: &mut Api<D>, line: &str) -> Result<Value>
where
    D: database::UserDb + database::MovieDb,
    <D as database::UserDb>::Error: std::fmt::Debug,
    <D as database::MovieDb>::Error: std::fmt::Debug,
{
    let request: Request = serde_json::from_str(line)?;
    api.dispatch(&request.operation, request.arguments)
}

fn respond(result: Result<Value>) -> Value {
    match result {
        Ok(data) => json!({ "data": data }),
        Err(err) => {
            debug!("{:?}", err);
            json!({ "error": err.to_string() })
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let mut api = Api::new(seed::seed_db(), FavoriteMovies::new(config.favorite_years));
    info!("reading requests from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = respond(handle(&mut api, &line));
        writeln!(out, "{}", response)?;
        out.flush()?;
    }
    Ok(())
}
