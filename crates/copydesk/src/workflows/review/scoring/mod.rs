mod config;
mod rules;

pub use config::ScoringConfig;

use std::sync::Arc;

use tracing::warn;

use super::analyzers::entities::{self, HeuristicTagger, PosTagger};
use super::analyzers::style::{
    FleschReadingEase, LexiconSubjectivity, ReadabilityModel, SubjectivityModel,
};
use super::analyzers::{diversity, entropy};
use super::domain::{ArticleSubmission, FeedbackItem, MetricSet, ScoreReport};
use super::normalizer::{self, RuleTokenizer, Tokenizer};

pub const MAX_SCORE: i32 = 100;
pub const MIN_SCORE: i32 = 0;

/// Stateless engine applying the rubric to a submission.
///
/// Scoring is deterministic and synchronous: every metric is a pure
/// function of the submission content, and collaborator failures degrade
/// to documented defaults instead of surfacing.
pub struct ReviewEngine {
    config: ScoringConfig,
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn PosTagger>,
    subjectivity: Arc<dyn SubjectivityModel>,
    readability: Arc<dyn ReadabilityModel>,
}

impl ReviewEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(RuleTokenizer),
            Arc::new(HeuristicTagger),
            Arc::new(LexiconSubjectivity),
            Arc::new(FleschReadingEase),
        )
    }

    pub fn with_collaborators(
        config: ScoringConfig,
        tokenizer: Arc<dyn Tokenizer>,
        tagger: Arc<dyn PosTagger>,
        subjectivity: Arc<dyn SubjectivityModel>,
        readability: Arc<dyn ReadabilityModel>,
    ) -> Self {
        Self {
            config,
            tokenizer,
            tagger,
            subjectivity,
            readability,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a submission against the rubric. Penalties accumulate over
    /// the ordered rule list and the score clamps to [0, 100].
    pub fn score(&self, submission: &ArticleSubmission) -> ScoreReport {
        let metrics = self.measure(&submission.content);

        let feedback: Vec<FeedbackItem> = rules::RULES
            .iter()
            .filter_map(|rule| rule(&metrics, &self.config))
            .collect();

        let penalty: i32 = feedback.iter().map(|item| item.penalty).sum();
        let score = (MAX_SCORE - penalty).clamp(MIN_SCORE, MAX_SCORE);

        ScoreReport {
            passed: score >= self.config.pass_cutoff,
            score,
            feedback,
            metrics,
        }
    }

    fn measure(&self, content: &str) -> MetricSet {
        let article = normalizer::normalize(content, self.tokenizer.as_ref());

        let window_entropy = entropy::window_entropy(&article.words, self.config.window_len);
        let entity_density = entities::entity_density(&article.clean_words, self.tagger.as_ref());
        let type_token_ratio = diversity::type_token_ratio(&article.clean_words);
        let subjectivity = self.subjectivity.subjectivity(&article.clean_words);
        let reading_ease = match self
            .readability
            .reading_ease(&article.sentences, &article.clean_words)
        {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%err, "readability formula skipped");
                None
            }
        };

        MetricSet {
            word_count: article.clean_words.len(),
            window_entropy,
            entity_density,
            type_token_ratio,
            subjectivity,
            reading_ease,
        }
    }
}
