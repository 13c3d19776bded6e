use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Args;
use copydesk::config::AppConfig;
use copydesk::error::AppError;
use copydesk::workflows::intake;
use copydesk::workflows::originality::{
    HttpSearchClient, OriginalityService, PlagiarismReport, SearchGateway,
};
use copydesk::workflows::review::{ArticleSubmission, ReviewEngine, ScoreReport};

use crate::infra::{scoring_config, DisabledSearchGateway};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Article text file to score
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Optional headline recorded with the submission
    #[arg(long)]
    pub(crate) title: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Editorial CSV export (Title, Content, Language, Submitted At)
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct OriginalityArgs {
    /// Article text file to check for copied sentences
    #[arg(long)]
    pub(crate) file: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = ReviewEngine::new(scoring_config(&config.review));

    let content = fs::read_to_string(&args.file)?;
    let submission = match args.title {
        Some(title) => ArticleSubmission::titled(title, content),
        None => ArticleSubmission::new(content),
    };

    let report = engine.score(&submission);
    render_score_report(&args.file.display().to_string(), &report);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = ReviewEngine::new(scoring_config(&config.review));

    let records = intake::from_path(&args.csv)?;
    println!(
        "Batch review on {} ({} articles from {})",
        Local::now().date_naive(),
        records.len(),
        args.csv.display()
    );

    let mut passed = 0usize;
    for (index, record) in records.iter().enumerate() {
        let report = engine.score(&record.submission);
        if report.passed {
            passed += 1;
        }

        let headline = record
            .submission
            .title
            .as_deref()
            .unwrap_or("(untitled)");
        let submitted = match record.submitted_on {
            Some(date) => format!(", submitted {date}"),
            None => String::new(),
        };
        println!(
            "{}. {} | {} | score {}/100{}",
            index + 1,
            headline,
            if report.passed { "pass" } else { "needs work" },
            report.score,
            submitted
        );
        for item in &report.feedback {
            println!("   - [-{}] {}", item.penalty, item.message);
        }
    }

    println!("\n{passed} of {} articles cleared the gate", records.len());
    Ok(())
}

pub(crate) async fn run_originality(args: OriginalityArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let gateway: Arc<dyn SearchGateway> = match config.review.search_base_url.as_deref() {
        Some(base_url) => Arc::new(HttpSearchClient::new(base_url)?),
        None => {
            println!("SEARCH_BASE_URL unset; candidates will not be verified externally.");
            Arc::new(DisabledSearchGateway)
        }
    };
    let service = Arc::new(OriginalityService::new(gateway));

    let content = fs::read_to_string(&args.file)?;
    let submission = ArticleSubmission::new(content);

    // The gateway loop blocks on sequential network calls.
    let report = tokio::task::spawn_blocking(move || service.check(&submission))
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err.to_string())))?;

    render_plagiarism_report(&args.file.display().to_string(), &report);
    Ok(())
}

fn render_score_report(source: &str, report: &ScoreReport) {
    println!("Editorial review: {source}");
    println!(
        "Verdict: {} (score {}/100)",
        if report.passed { "pass" } else { "needs work" },
        report.score
    );

    if report.feedback.is_empty() {
        println!("\nFeedback: none");
    } else {
        println!("\nFeedback");
        for item in &report.feedback {
            println!("- [-{}] {}", item.penalty, item.message);
        }
    }

    let metrics = &report.metrics;
    println!("\nMetrics");
    println!("- words: {}", metrics.word_count);
    println!("- window entropy: {:.2}", metrics.window_entropy);
    println!("- entity density: {:.1}%", metrics.entity_density * 100.0);
    println!("- type-token ratio: {:.2}", metrics.type_token_ratio);
    println!("- subjectivity: {:.2}", metrics.subjectivity);
    match metrics.reading_ease {
        Some(ease) => println!("- reading ease: {ease:.1}"),
        None => println!("- reading ease: unavailable"),
    }
}

fn render_plagiarism_report(source: &str, report: &PlagiarismReport) {
    println!("Originality check: {source}");

    if report.matches.is_empty() {
        println!("No overlapping sources found; the text looks original.");
        return;
    }

    println!("Overlapping sources");
    for found in &report.matches {
        println!(
            "- \"{}\" matches {} ({:.0}% word overlap)",
            found.sentence_excerpt, found.source_url, found.similarity
        );
    }
}
