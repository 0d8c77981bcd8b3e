mod common;

use std::time::Duration;

use shiny::{
    cli::skill_titles,
    survey::{AnswerSet, next_question},
    theme::Theme,
};
use tokio::time::timeout;

const SETTLE: Duration = Duration::from_secs(10);

#[tokio::test]
async fn test_survey_then_results() {
    let context = common::context(Theme::Light).await;

    let survey = timeout(SETTLE, context.survey().settled()).await.unwrap();
    let questions = survey.payload.unwrap();

    let mut current = 1;
    while questions.has_question(current) {
        context.answers.save_answer(current, current % 2 == 1);
        current = next_question(current);
    }
    assert_eq!(context.answers.answers().len(), 6);

    let results = timeout(SETTLE, context.results().settled()).await.unwrap();
    let skills = results.payload.unwrap().results_data;

    assert_eq!(skill_titles(&skills), "seo, backend, devops");
    assert!(
        results
            .locator
            .unwrap()
            .ends_with("/results?a1=true&a2=false&a3=true&a4=false&a5=true&a6=false")
    );
}

#[tokio::test]
async fn test_results_without_yes_answers_are_empty() {
    let context = common::context(Theme::Light).await;
    context
        .answers
        .save_answers(AnswerSet::from([(1, false), (2, false)]));

    let results = timeout(SETTLE, context.results().settled()).await.unwrap();

    assert!(!results.has_error());
    assert!(results.payload.unwrap().results_data.is_empty());
}

#[tokio::test]
async fn test_answers_persist_across_runs() {
    let context = common::context(Theme::Light).await;
    context.answers.save_answer(1, true);

    let first = timeout(SETTLE, context.results().settled()).await.unwrap();
    context.answers.save_answer(4, true);
    let second = timeout(SETTLE, context.results().settled()).await.unwrap();

    assert_eq!(first.payload.unwrap().results_data.len(), 1);
    assert_eq!(skill_titles(&second.payload.unwrap().results_data), "seo, designer");
}

#[tokio::test]
async fn test_freelances_and_theme() {
    let context = common::context(Theme::Dark).await;
    assert_eq!(context.current_theme(), Theme::Dark);

    context.theme.toggle_theme();
    assert_eq!(context.current_theme(), Theme::Light);

    let freelances = timeout(SETTLE, context.freelances().settled()).await.unwrap();
    assert_eq!(freelances.payload.unwrap().freelancers_list.len(), 3);
}
