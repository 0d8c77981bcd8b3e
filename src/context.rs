//! # Context
//!
//! Owns everything the views share: configuration, the theme, the collected answers and the
//! fetcher. Built once at start-up and passed down by reference.
use tracing::info;

use crate::{
    config::Config,
    models::{FreelancersResponse, ResultsResponse, SurveyResponse},
    remote::HttpFetcher,
    resource::{Fetcher, RemoteResource},
    survey::AnswerStore,
    theme::{Theme, ThemeStore},
};

pub struct Context<F = HttpFetcher> {
    pub config: Config,
    pub theme: ThemeStore,
    pub answers: AnswerStore,
    fetcher: F,
}

impl Context<HttpFetcher> {
    pub fn with_config(config: Config) -> Self {
        Self::new(config, HttpFetcher::new())
    }
}

impl<F: Fetcher> Context<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        let theme = ThemeStore::new();
        if config.theme != theme.theme() {
            theme.toggle_theme();
        }

        info!("Using API at {}", config.api_url);

        Self {
            config,
            theme,
            answers: AnswerStore::new(),
            fetcher,
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn survey(&self) -> RemoteResource<SurveyResponse, F> {
        RemoteResource::with_locator(self.fetcher.clone(), self.config.survey_locator())
    }

    /// Skills matching the answers saved so far.
    pub fn results(&self) -> RemoteResource<ResultsResponse, F> {
        let locator = self.config.results_locator(&self.answers.answers());

        RemoteResource::with_locator(self.fetcher.clone(), locator)
    }

    pub fn freelances(&self) -> RemoteResource<FreelancersResponse, F> {
        RemoteResource::with_locator(self.fetcher.clone(), self.config.freelances_locator())
    }
}
