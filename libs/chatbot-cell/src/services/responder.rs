use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::services::responses::{ResponseTable, ReservedKey};

/// Minimum overlap ratio a topic must beat to be served.
pub const OVERLAP_THRESHOLD: f64 = 0.3;

static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(hi|hello|hey|greetings)\b").expect("greeting pattern is valid")
});

static THANKS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(thanks|thank you|appreciate it)\b").expect("thanks pattern is valid")
});

static GOODBYE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(bye|goodbye|see you|farewell)\b").expect("goodbye pattern is valid")
});

static HELP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(help|assist|support)\b").expect("help pattern is valid")
});

static BUILTIN: LazyLock<Responder> = LazyLock::new(Responder::default);

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Category(ReservedKey),
    Overlap,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub response: &'static str,
    pub kind: MatchKind,
    /// The table key that answered, when one did.
    pub topic: Option<&'static str>,
    pub score: Option<f64>,
}

/// One step of the matching procedure.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The whole lowercased input equals a table key.
    Exact,
    /// A word-boundary pattern hit returns a reserved entry.
    Category {
        reply: ReservedKey,
        pattern: &'static Regex,
    },
    /// Best word-overlap ratio across non-reserved topics, if above `threshold`.
    Overlap { threshold: f64 },
    Fallback,
}

impl Rule {
    /// `input` must already be lowercased.
    pub fn apply(&self, table: &ResponseTable, input: &str) -> Option<MatchOutcome> {
        match self {
            Rule::Exact => table
                .entries()
                .find(|(key, _)| *key == input)
                .map(|(key, response)| MatchOutcome {
                    response,
                    kind: MatchKind::Exact,
                    topic: Some(key),
                    score: None,
                }),

            Rule::Category { reply, pattern } => pattern.is_match(input).then(|| MatchOutcome {
                response: table.reserved(*reply),
                kind: MatchKind::Category(*reply),
                topic: Some(reply.as_str()),
                score: None,
            }),

            Rule::Overlap { threshold } => {
                let (key, score) = best_overlap(table, input)?;
                if score <= *threshold {
                    debug!("Best topic {:?} scored {:.2}, below threshold", key, score);
                    return None;
                }
                table.get(key).map(|response| MatchOutcome {
                    response,
                    kind: MatchKind::Overlap,
                    topic: Some(key),
                    score: Some(score),
                })
            }

            Rule::Fallback => Some(MatchOutcome {
                response: table.reserved(ReservedKey::Default),
                kind: MatchKind::Fallback,
                topic: Some(ReservedKey::Default.as_str()),
                score: None,
            }),
        }
    }
}

/// Share of a topic's words found in `input`.
pub fn overlap_score(topic: &str, input_words: &HashSet<&str>) -> f64 {
    let key_words: HashSet<&str> = topic.split_whitespace().collect();
    if key_words.is_empty() {
        return 0.0;
    }
    let common = key_words.intersection(input_words).count();
    common as f64 / key_words.len() as f64
}

/// Highest scoring non-reserved topic; ties go to the earlier entry.
fn best_overlap(table: &ResponseTable, input: &str) -> Option<(&'static str, f64)> {
    let input_words: HashSet<&str> = input.split_whitespace().collect();

    let mut best: Option<(&'static str, f64)> = None;
    for (key, _) in table.topics() {
        let score = overlap_score(key, &input_words);
        if score == 0.0 {
            continue;
        }
        if best.map_or(true, |(_, highest)| score > highest) {
            best = Some((key, score));
        }
    }
    best
}

/// Picks the canned answer that best fits a free-text question.
///
/// Rules run top to bottom and the first one that fires wins. The last rule
/// always fires, so every input gets an answer.
#[derive(Debug, Clone)]
pub struct Responder {
    table: ResponseTable,
    rules: Vec<Rule>,
}

impl Responder {
    pub fn new(table: ResponseTable) -> Self {
        Self {
            table,
            rules: Self::default_rules(),
        }
    }

    /// Shared responder over the built-in table.
    pub fn builtin() -> &'static Responder {
        &BUILTIN
    }

    pub fn default_rules() -> Vec<Rule> {
        vec![
            Rule::Exact,
            Rule::Category {
                reply: ReservedKey::Greeting,
                pattern: &GREETING_PATTERN,
            },
            Rule::Category {
                reply: ReservedKey::Thanks,
                pattern: &THANKS_PATTERN,
            },
            Rule::Category {
                reply: ReservedKey::Goodbye,
                pattern: &GOODBYE_PATTERN,
            },
            Rule::Category {
                reply: ReservedKey::Help,
                pattern: &HELP_PATTERN,
            },
            Rule::Overlap { threshold: OVERLAP_THRESHOLD },
            Rule::Fallback,
        ]
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub fn evaluate(&self, query: &str) -> MatchOutcome {
        let input = query.to_lowercase();

        self.rules
            .iter()
            .find_map(|rule| rule.apply(&self.table, &input))
            .unwrap_or_else(|| MatchOutcome {
                response: self.table.reserved(ReservedKey::Default),
                kind: MatchKind::Fallback,
                topic: Some(ReservedKey::Default.as_str()),
                score: None,
            })
    }

    pub fn respond(&self, query: &str) -> &'static str {
        let outcome = self.evaluate(query);
        debug!("Matched {:?} via {:?} (score {:?})", outcome.topic, outcome.kind, outcome.score);
        outcome.response
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ResponseTable::builtin())
    }
}

pub fn find_best_match(query: &str) -> &'static str {
    Responder::builtin().respond(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> HashSet<&str> {
        input.split_whitespace().collect()
    }

    #[test]
    fn test_overlap_score_ratio() {
        let input = words("tips for good health please");
        assert_eq!(overlap_score("tips for good health", &input), 1.0);
        assert_eq!(overlap_score("dental health tips", &words("health tips")), 2.0 / 3.0);
        assert_eq!(overlap_score("sleep apnea symptoms", &words("banana")), 0.0);
    }

    #[test]
    fn test_overlap_counts_repeated_words_once() {
        assert_eq!(overlap_score("sleep and weight", &words("sleep sleep sleep")), 1.0 / 3.0);
    }

    #[test]
    fn test_rule_order() {
        let rules = Responder::default_rules();
        assert!(matches!(rules.first(), Some(Rule::Exact)));
        assert!(matches!(rules.last(), Some(Rule::Fallback)));

        let categories: Vec<ReservedKey> = rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Category { reply, .. } => Some(*reply),
                _ => None,
            })
            .collect();
        assert_eq!(
            categories,
            vec![
                ReservedKey::Greeting,
                ReservedKey::Thanks,
                ReservedKey::Goodbye,
                ReservedKey::Help,
            ]
        );
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let table = ResponseTable::builtin();

        assert!(Rule::Exact.apply(&table, "fever treatment").is_some());
        assert!(Rule::Exact.apply(&table, "fever treatment now").is_none());

        let greeting = Rule::Category {
            reply: ReservedKey::Greeting,
            pattern: &GREETING_PATTERN,
        };
        assert!(greeting.apply(&table, "well hello").is_some());
        assert!(greeting.apply(&table, "this is shiny").is_none());

        let overlap = Rule::Overlap { threshold: OVERLAP_THRESHOLD };
        let outcome = overlap.apply(&table, "any fever remedies").unwrap();
        assert_eq!(outcome.topic, Some("fever treatment"));
        assert_eq!(outcome.score, Some(0.5));
        assert!(overlap.apply(&table, "banana").is_none());

        assert_eq!(Rule::Fallback.apply(&table, "").unwrap().kind, MatchKind::Fallback);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // "lyme disease" scores exactly 0.5 here.
        let table = ResponseTable::builtin();
        let overlap = Rule::Overlap { threshold: 0.5 };
        assert!(overlap.apply(&table, "disease").is_none());
    }
}
