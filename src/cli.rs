use std::io::{Write, stdout};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, stdin};
use tracing::info;

use crate::{
    config::Config,
    context::Context,
    format::format_job_list,
    models::Skill,
    resource::Fetcher,
    survey::{QuestionNumber, next_question, previous_question},
    theme::Theme,
};

pub const FALLBACK_MESSAGE: &str = "Something went wrong, please try again later.";
pub const EMPTY_RESULTS_MESSAGE: &str =
    "Too bad... It looks like you don't need any particular skill.";

#[derive(Parser, Debug)]
#[command(name = "shiny", version, about = "Shiny agency survey client")]
pub struct Cli {
    /// Base URL of the Shiny API, overrides SHINY_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Initial theme (light or dark), overrides SHINY_THEME
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the questions one by one, then see the matching skills
    Survey,
    /// Show the skills for answers given as QUESTION=yes|no
    Results {
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(QuestionNumber, bool)>,
    },
    /// List freelancer profiles
    Freelances,
}

pub fn parse_answer(raw: &str) -> Result<(QuestionNumber, bool), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=yes|no, got `{raw}`"))?;

    let question = question
        .trim()
        .parse::<QuestionNumber>()
        .map_err(|e| format!("invalid question number `{question}`: {e}"))?;

    let value = parse_reply(value).ok_or_else(|| format!("invalid answer `{value}`"))?;

    Ok((question, value))
}

fn parse_reply(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "oui" => Some(true),
        "n" | "no" | "false" | "non" => Some(false),
        _ => None,
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load();
    if let Some(api_url) = cli.api_url {
        config = Config::new(api_url, config.theme);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let context = Context::with_config(config);
    let mut out = stdout();

    match cli.command {
        Commands::Survey => survey_flow(&context, BufReader::new(stdin()), &mut out).await,
        Commands::Results { answers } => {
            context.answers.save_answers(answers.into_iter().collect());
            results(&context, &mut out).await
        }
        Commands::Freelances => freelances(&context, &mut out).await,
    }
}

fn marker(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "*",
        Theme::Dark => "#",
    }
}

/// Runs the survey and shows the matching skills, unless the questions could not be loaded.
pub async fn survey_flow<F, R, W>(context: &Context<F>, input: R, out: &mut W) -> Result<()>
where
    F: Fetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if survey(context, input, out).await? {
        results(context, out).await?;
    }

    Ok(())
}

/// Asks every question in order. Returns `false` when the questions could not be loaded.
pub async fn survey<F, R, W>(context: &Context<F>, input: R, out: &mut W) -> Result<bool>
where
    F: Fetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let snapshot = context.survey().settled().await;

    if snapshot.has_error() {
        writeln!(out, "{FALLBACK_MESSAGE}")?;
        return Ok(false);
    }

    let Some(questions) = snapshot.payload else {
        writeln!(out, "{FALLBACK_MESSAGE}")?;
        return Ok(false);
    };

    let mut lines = input.lines();
    let mut current = 1;

    while let Some(text) = questions.question(current) {
        let selected = match context.answers.answer(current) {
            Some(true) => " (yes)",
            Some(false) => " (no)",
            None => "",
        };

        writeln!(out, "\n{} Question {current}{selected}", marker(context.current_theme()))?;
        writeln!(out, "{text}")?;
        write!(out, "[y]es / [n]o / [p]revious / [t]heme > ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed at question {current}");
            break;
        };

        match line.trim() {
            "p" => current = previous_question(current),
            "t" => {
                context.theme.toggle_theme();
                writeln!(out, "Theme: {}", context.current_theme())?;
            }
            reply => match parse_reply(reply) {
                Some(value) => {
                    context.answers.save_answer(current, value);
                    current = next_question(current);
                }
                None => writeln!(out, "Please answer y or n.")?,
            },
        }
    }

    Ok(true)
}

pub async fn results<F: Fetcher, W: Write>(context: &Context<F>, out: &mut W) -> Result<()> {
    let snapshot = context.results().settled().await;

    if snapshot.has_error() {
        writeln!(out, "{FALLBACK_MESSAGE}")?;
        return Ok(());
    }

    let skills = snapshot.payload.unwrap_or_default().results_data;
    if skills.is_empty() {
        writeln!(out, "{EMPTY_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{} The skills you need: {}",
        marker(context.current_theme()),
        skill_titles(&skills)
    )?;

    for skill in &skills {
        writeln!(out, "\n{}\n  {}", skill.title, skill.description)?;
    }

    Ok(())
}

pub fn skill_titles(skills: &[Skill]) -> String {
    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| format_job_list(&skill.title, skills.len(), index))
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn freelances<F: Fetcher, W: Write>(context: &Context<F>, out: &mut W) -> Result<()> {
    let snapshot = context.freelances().settled().await;

    if snapshot.has_error() {
        writeln!(out, "{FALLBACK_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{} Find your provider", marker(context.current_theme()))?;

    for profile in snapshot.payload.unwrap_or_default().freelancers_list {
        writeln!(out, "  {} - {}", profile.name, profile.job)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, future::Future, sync::Arc};

    use clap::Parser;

    use super::{
        Cli, Commands, EMPTY_RESULTS_MESSAGE, FALLBACK_MESSAGE, freelances, parse_answer, results,
        skill_titles, survey, survey_flow,
    };
    use crate::{
        config::Config, context::Context, error::FetchError, models::Skill, resource::Fetcher,
        survey::AnswerSet, theme::Theme,
    };

    const TWO_QUESTIONS: &str = r#"{"surveyData":{"1":"First?","2":"Second?"}}"#;

    /// Answers by path, ignoring the query string. Unknown paths fail like a dead server.
    #[derive(Clone)]
    struct StaticFetcher {
        bodies: Arc<HashMap<&'static str, &'static str>>,
    }

    impl Fetcher for StaticFetcher {
        fn fetch(&self, locator: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
            let path = locator
                .trim_start_matches("http://localhost:8000")
                .split('?')
                .next()
                .unwrap_or_default();
            let body = self.bodies.get(path).copied();

            async move {
                body.map(|body| body.as_bytes().to_vec())
                    .ok_or_else(|| FetchError::Transport("connection refused".into()))
            }
        }
    }

    fn context(routes: &[(&'static str, &'static str)]) -> Context<StaticFetcher> {
        let fetcher = StaticFetcher {
            bodies: Arc::new(routes.iter().copied().collect()),
        };

        Context::new(Config::default(), fetcher)
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_results_failure_shows_fallback() {
        let context = context(&[]);
        let mut out = Vec::new();

        results(&context, &mut out).await.unwrap();

        let out = text(out);
        assert!(out.contains(FALLBACK_MESSAGE));
        assert!(!out.contains(EMPTY_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_results_empty_list() {
        let context = context(&[("/results", r#"{"resultsData":[]}"#)]);
        let mut out = Vec::new();

        results(&context, &mut out).await.unwrap();

        assert_eq!(text(out).trim(), EMPTY_RESULTS_MESSAGE);
    }

    #[tokio::test]
    async fn test_results_lists_skills() {
        let context = context(&[(
            "/results",
            r#"{"resultsData":[{"title":"seo","description":"Ranks pages"},{"title":"frontend","description":"Builds screens"}]}"#,
        )]);
        let mut out = Vec::new();

        results(&context, &mut out).await.unwrap();

        let out = text(out);
        assert!(out.contains("* The skills you need: seo, frontend"));
        assert!(out.contains("seo\n  Ranks pages"));
        assert!(out.contains("frontend\n  Builds screens"));
    }

    #[tokio::test]
    async fn test_freelances_failure_and_list() {
        let mut out = Vec::new();
        freelances(&context(&[]), &mut out).await.unwrap();
        assert_eq!(text(out).trim(), FALLBACK_MESSAGE);

        let context = context(&[(
            "/freelances",
            r#"{"freelancersList":[{"name":"Harry Potter","job":"Frontend wizard"}]}"#,
        )]);
        let mut out = Vec::new();
        freelances(&context, &mut out).await.unwrap();

        let out = text(out);
        assert!(out.contains("Find your provider"));
        assert!(out.contains("  Harry Potter - Frontend wizard"));
    }

    #[tokio::test]
    async fn test_survey_failure_stops_before_results() {
        let mut out = Vec::new();
        survey_flow(&context(&[]), &b"y\n"[..], &mut out).await.unwrap();
        assert_eq!(text(out).matches(FALLBACK_MESSAGE).count(), 1);

        let context = context(&[("/results", r#"{"resultsData":[]}"#)]);
        let mut out = Vec::new();
        survey_flow(&context, &b"y\n"[..], &mut out).await.unwrap();

        let out = text(out);
        assert!(out.contains(FALLBACK_MESSAGE));
        assert!(!out.contains(EMPTY_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_survey_input_handling() {
        let context = context(&[("/survey", TWO_QUESTIONS)]);
        let mut out = Vec::new();

        let completed = survey(&context, &b"maybe\nt\ny\np\nn\nn\n"[..], &mut out)
            .await
            .unwrap();

        let out = text(out);
        assert!(completed);
        assert!(out.contains("Please answer y or n."));
        assert!(out.contains("Theme: dark"));
        assert!(out.contains("# Question 1 (yes)"));
        assert_eq!(context.current_theme(), Theme::Dark);
        assert_eq!(context.answers.answers(), AnswerSet::from([(1, false), (2, false)]));
    }

    #[tokio::test]
    async fn test_survey_then_results() {
        let context = context(&[
            ("/survey", TWO_QUESTIONS),
            ("/results", r#"{"resultsData":[{"title":"seo","description":""}]}"#),
        ]);
        let mut out = Vec::new();

        survey_flow(&context, &b"y\nn\n"[..], &mut out).await.unwrap();

        assert!(text(out).contains("The skills you need: seo"));
        assert_eq!(context.answers.answers(), AnswerSet::from([(1, true), (2, false)]));
    }

    #[tokio::test]
    async fn test_survey_input_closed_early() {
        let context = context(&[("/survey", TWO_QUESTIONS)]);
        let mut out = Vec::new();

        assert!(survey(&context, &b"y\n"[..], &mut out).await.unwrap());
        assert_eq!(context.answers.answers(), AnswerSet::from([(1, true)]));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("1=yes"), Ok((1, true)));
        assert_eq!(parse_answer(" 12 = Non "), Ok((12, false)));
        assert!(parse_answer("1").is_err());
        assert!(parse_answer("x=yes").is_err());
        assert!(parse_answer("1=maybe").is_err());
    }

    #[test]
    fn test_cli_results_command() {
        let cli = Cli::parse_from([
            "shiny", "--theme", "dark", "results", "--answer", "1=yes", "--answer", "2=no",
        ]);

        assert_eq!(cli.theme, Some(Theme::Dark));
        match cli.command {
            Commands::Results { answers } => assert_eq!(answers, [(1, true), (2, false)]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_skill_titles() {
        let skills: Vec<Skill> = ["seo", "frontend", "backend"]
            .into_iter()
            .map(|title| Skill {
                title: title.to_string(),
                description: String::new(),
            })
            .collect();

        assert_eq!(skill_titles(&skills), "seo, frontend, backend");
    }
}
