//! # Survey
//!
//! Answers collected while the user walks through the questions.
//!
//! - Questions are numbered from 1, as served by `/survey`
//! - Each answer is a plain yes/no
//! - Writes merge into what is already there; nothing is ever removed
//! - Answers survive for the whole session, there is no reset between runs
use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::debug;

use crate::store::Store;

pub type QuestionNumber = u32;

/// Sorted by question number, which is also the order query parameters are emitted in.
pub type AnswerSet = BTreeMap<QuestionNumber, bool>;

#[derive(Debug, Default)]
pub struct AnswerStore {
    store: Store<AnswerSet>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> AnswerSet {
        self.store.get()
    }

    pub fn answer(&self, question: QuestionNumber) -> Option<bool> {
        self.answers().get(&question).copied()
    }

    pub fn save_answer(&self, question: QuestionNumber, value: bool) {
        self.store.update(|answers| {
            answers.insert(question, value);
        });

        debug!("Saved answer {question}={value}");
    }

    pub fn save_answers(&self, new_answers: AnswerSet) {
        if new_answers.is_empty() {
            return;
        }

        self.store.update(|answers| answers.extend(new_answers));
    }

    pub fn subscribe(&self) -> watch::Receiver<AnswerSet> {
        self.store.subscribe()
    }
}

pub fn previous_question(current: QuestionNumber) -> QuestionNumber {
    if current <= 1 { 1 } else { current - 1 }
}

pub fn next_question(current: QuestionNumber) -> QuestionNumber {
    current + 1
}
