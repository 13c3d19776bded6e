/// Rubric thresholds and penalties. Every cutoff here is an empirically
/// chosen constant, never derived at runtime; deployments override fields
/// rather than recomputing them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Word-window length for the entropy estimate (trigrams by default).
    pub window_len: usize,
    /// Entropy below this reads as mechanically repetitive phrasing.
    pub entropy_floor: f64,
    pub entropy_floor_penalty: i32,
    /// Entropy between floor and target reads as suspiciously smooth.
    pub entropy_target: f64,
    pub entropy_target_penalty: i32,
    /// Minimum fraction of words naming concrete entities.
    pub entity_density_floor: f64,
    pub entity_density_penalty: i32,
    /// Hard word-count floor.
    pub word_floor: usize,
    pub word_floor_penalty: i32,
    /// Softer word-count target above the floor.
    pub word_target: usize,
    pub word_target_penalty: i32,
    /// Minimum type-token ratio before vocabulary reads as repetitive.
    pub ttr_floor: f64,
    pub ttr_penalty: i32,
    /// Subjectivity band; both ends of the band are penalized.
    pub subjectivity_floor: f64,
    pub subjectivity_ceiling: f64,
    pub subjectivity_penalty: i32,
    /// Reading ease below this is penalized; a missing reading-ease
    /// metric skips the rule entirely.
    pub reading_ease_floor: f64,
    pub reading_ease_penalty: i32,
    /// Scores at or above this cutoff pass the gate.
    pub pass_cutoff: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            window_len: 3,
            entropy_floor: 7.5,
            entropy_floor_penalty: 25,
            entropy_target: 8.5,
            entropy_target_penalty: 10,
            entity_density_floor: 0.09,
            entity_density_penalty: 20,
            word_floor: 450,
            word_floor_penalty: 30,
            word_target: 600,
            word_target_penalty: 10,
            ttr_floor: 0.39,
            ttr_penalty: 15,
            subjectivity_floor: 0.15,
            subjectivity_ceiling: 0.85,
            subjectivity_penalty: 10,
            reading_ease_floor: 30.0,
            reading_ease_penalty: 10,
            pass_cutoff: 85,
        }
    }
}

impl ScoringConfig {
    /// Variant tuned for shorter editorial formats: a 300-word floor and
    /// an 80-point cutoff. Neither variant is authoritative; pick per
    /// publication.
    pub fn brief_form() -> Self {
        Self {
            word_floor: 300,
            word_target: 450,
            pass_cutoff: 80,
            ..Self::default()
        }
    }
}
