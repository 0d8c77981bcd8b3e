use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::{format::format_query_params, survey::AnswerSet, theme::Theme};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub theme: Theme,
}

impl Config {
    pub fn load() -> Self {
        Self::new(
            try_load("SHINY_API_URL", DEFAULT_API_URL.to_string()),
            try_load("SHINY_THEME", Theme::Light),
        )
    }

    pub fn new(api_url: impl Into<String>, theme: Theme) -> Self {
        let api_url: String = api_url.into();

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            theme,
        }
    }

    pub fn survey_locator(&self) -> String {
        format!("{}/survey", self.api_url)
    }

    pub fn results_locator(&self, answers: &AnswerSet) -> String {
        format!("{}/results?{}", self.api_url, format_query_params(answers))
    }

    pub fn freelances_locator(&self) -> String {
        format!("{}/freelances", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Theme::Light)
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
