use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("SHINY_TESTER_PORT", 8000),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("{key} not set, using default");
    })
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    var(key)
        .and_then(|value| {
            value.parse().map_err(|e| {
                warn!("Invalid {key} value: {e}, using default: {default}");
            })
        })
        .unwrap_or(default)
}
