//! # Shiny
//!
//! Survey client for the Shiny freelance agency.
//!
//! ## Flow
//!
//! - Fetch the questions from `/survey`
//! - Walk through them one by one, each answer is yes or no
//! - Answers merge into the [`survey::AnswerStore`], one key per question
//! - Build `/results?a1=true&a2=false...` from the answers and fetch the matching skills
//! - Freelancer profiles come from `/freelances`
//!
//! ## Payloads
//!
//! From backend
//! - `/survey`: `{"surveyData": {"1": "question", ...}}`
//! - `/results`: `{"resultsData": [{"title": ..., "description": ...}]}`
//! - `/freelances`: `{"freelancersList": [{"name": ..., "job": ..., "picture": ...}]}`
//!
//! Anything that does not decode is treated like a network error: the resource goes to
//! [`resource::Status::Failed`] and the view shows a generic message.
//!
//! ## State
//!
//! - [`theme::ThemeStore`]: light or dark, toggled by the user
//! - [`survey::AnswerStore`]: question number to answer
//! - [`resource::RemoteResource`]: status and payload of one fetch, newest locator wins
//!
//! All of it is owned by [`context::Context`] and passed down explicitly. Subscribers are
//! `tokio::sync::watch` receivers.
//!
//! ## Notes
//!
//! - Answers are never reset, a second survey run in the same session starts from the first one
//! - No timeout on fetches, a read that never completes leaves the resource Pending

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod models;
pub mod remote;
pub mod resource;
pub mod store;
pub mod survey;
pub mod theme;
