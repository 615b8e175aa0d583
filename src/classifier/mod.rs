//! Rule-based promotion classifier
//!
//! Provides:
//! - `ThresholdRules`: independent threshold checks that accumulate dropout reasons
//! - `ConjunctiveRules`: a single all-of promotion rule that includes family income
//! - `RuleSet`: the configuration switch selecting one of them
//!
//! The two rule sets use different thresholds and comparison operators at the
//! same boundary values. They are kept exactly as written and are not
//! interchangeable.

pub mod conjunctive;
pub mod threshold;

use serde::{Deserialize, Serialize};

use crate::types::{Evaluation, StudentAttributes};

pub use conjunctive::ConjunctiveRules;
pub use threshold::ThresholdRules;

/// Maps student attributes to a classification
///
/// Implementations are pure and total over validated input.
pub trait Classifier {
    fn classify(&self, attributes: &StudentAttributes) -> Evaluation;
}

/// Which rule set is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Threshold checks with reasons
    #[default]
    Reasons,
    /// All-of promotion rule, no reasons
    Conjunctive,
}

impl RuleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Reasons => "reasons",
            RuleSet::Conjunctive => "conjunctive",
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Classifier for RuleSet {
    fn classify(&self, attributes: &StudentAttributes) -> Evaluation {
        match self {
            RuleSet::Reasons => ThresholdRules.classify(attributes),
            RuleSet::Conjunctive => ConjunctiveRules.classify(attributes),
        }
    }
}
