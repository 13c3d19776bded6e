use super::config::ScoringConfig;
use crate::workflows::review::domain::{FeedbackItem, MetricSet};

pub(crate) type Rule = fn(&MetricSet, &ScoringConfig) -> Option<FeedbackItem>;

/// The rubric. Rules are independent and all applicable rules fire; the
/// order here fixes the feedback order, so keep it stable.
pub(crate) const RULES: &[Rule] = &[
    entropy_rule,
    entity_density_rule,
    length_rule,
    diversity_rule,
    subjectivity_rule,
    readability_rule,
];

fn entropy_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    if metrics.window_entropy < config.entropy_floor {
        return Some(FeedbackItem {
            message: format!(
                "mechanical phrasing: window entropy {:.2} is under the {:.1} floor, sentences read as templated",
                metrics.window_entropy, config.entropy_floor
            ),
            penalty: config.entropy_floor_penalty,
        });
    }
    if metrics.window_entropy < config.entropy_target {
        return Some(FeedbackItem {
            message: format!(
                "phrasing runs smooth: window entropy {:.2} is under the {:.1} target",
                metrics.window_entropy, config.entropy_target
            ),
            penalty: config.entropy_target_penalty,
        });
    }
    None
}

fn entity_density_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    if metrics.entity_density < config.entity_density_floor {
        return Some(FeedbackItem {
            message: format!(
                "thin on facts: {:.1}% of words are names or figures, target is {:.0}%",
                metrics.entity_density * 100.0,
                config.entity_density_floor * 100.0
            ),
            penalty: config.entity_density_penalty,
        });
    }
    None
}

fn length_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    if metrics.word_count < config.word_floor {
        return Some(FeedbackItem {
            message: format!(
                "too short: {} words against a {} minimum",
                metrics.word_count, config.word_floor
            ),
            penalty: config.word_floor_penalty,
        });
    }
    if metrics.word_count < config.word_target {
        return Some(FeedbackItem {
            message: format!(
                "below target length: {} words against a {} target",
                metrics.word_count, config.word_target
            ),
            penalty: config.word_target_penalty,
        });
    }
    None
}

fn diversity_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    if metrics.type_token_ratio < config.ttr_floor {
        return Some(FeedbackItem {
            message: format!(
                "repetitive vocabulary: type-token ratio {:.2} is under {:.2}",
                metrics.type_token_ratio, config.ttr_floor
            ),
            penalty: config.ttr_penalty,
        });
    }
    None
}

fn subjectivity_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    if metrics.subjectivity < config.subjectivity_floor {
        return Some(FeedbackItem {
            message: format!(
                "tone reads robotic: subjectivity {:.2} is under {:.2}, add a human viewpoint",
                metrics.subjectivity, config.subjectivity_floor
            ),
            penalty: config.subjectivity_penalty,
        });
    }
    if metrics.subjectivity > config.subjectivity_ceiling {
        return Some(FeedbackItem {
            message: format!(
                "tone reads as pure opinion: subjectivity {:.2} is over {:.2}, ground it in facts",
                metrics.subjectivity, config.subjectivity_ceiling
            ),
            penalty: config.subjectivity_penalty,
        });
    }
    None
}

fn readability_rule(metrics: &MetricSet, config: &ScoringConfig) -> Option<FeedbackItem> {
    let reading_ease = metrics.reading_ease?;
    if reading_ease < config.reading_ease_floor {
        return Some(FeedbackItem {
            message: format!(
                "hard to read: reading ease {:.1} is under {:.1}",
                reading_ease, config.reading_ease_floor
            ),
            penalty: config.reading_ease_penalty,
        });
    }
    None
}
