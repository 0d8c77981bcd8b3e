//! Payloads served by the Shiny API.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::survey::QuestionNumber;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    #[serde(default)]
    pub survey_data: BTreeMap<QuestionNumber, String>,
}

impl SurveyResponse {
    pub fn question(&self, number: QuestionNumber) -> Option<&str> {
        self.survey_data.get(&number).map(String::as_str)
    }

    pub fn has_question(&self, number: QuestionNumber) -> bool {
        self.survey_data.contains_key(&number)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    #[serde(default)]
    pub results_data: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancersResponse {
    #[serde(default)]
    pub freelancers_list: Vec<Freelancer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Freelancer {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub job: String,
    #[serde(default)]
    pub picture: String,
}
