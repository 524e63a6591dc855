//! Occurrence tallying and running-leader selection.
//!
//! Counts how often each answer text appears across term cards whose
//! prompt matches the question, and tracks the leading answer as cards
//! stream in. The tally is driven by a single consumer, so no locking
//! is involved; see [`crate::resolver`] for the delivery model.

use std::collections::HashMap;

use crate::types::TermCard;

/// Per-question occurrence tally with running-leader state.
///
/// A card counts only if its prompt case-insensitively contains the
/// question text. The leader is updated when an answer's count strictly
/// exceeds the current leader's count — so when two answers finish with
/// equal counts, the one that reached that count *first* wins, not the
/// alphabetically-first or the last observed. This first-to-the-lead
/// tie-break is surprising but deliberate: it reproduces the behaviour
/// of streaming comparison against a running maximum, and downstream
/// callers depend on it.
#[derive(Debug)]
pub struct AnswerTally {
    /// Lowercased question text matched against card prompts.
    question: String,
    counts: HashMap<String, u32>,
    leader: String,
    leader_count: u32,
}

impl AnswerTally {
    /// Create an empty tally for one question.
    pub fn new(question: &str) -> Self {
        Self {
            question: question.trim().to_lowercase(),
            counts: HashMap::new(),
            leader: String::new(),
            leader_count: 0,
        }
    }

    /// Observe one term card, counting it if its prompt matches the question.
    pub fn observe(&mut self, card: &TermCard) {
        if !card.prompt.to_lowercase().contains(self.question.as_str()) {
            return;
        }

        let count = self.counts.entry(card.answer.clone()).or_insert(0);
        *count += 1;

        // Strictly greater: an answer tying the leader does not take over.
        if *count > self.leader_count {
            self.leader_count = *count;
            self.leader = card.answer.clone();
        }
    }

    /// Observe a batch of cards in order.
    pub fn observe_all(&mut self, cards: &[TermCard]) {
        for card in cards {
            self.observe(card);
        }
    }

    /// The current leading answer, or the empty string if nothing matched.
    pub fn leader(&self) -> &str {
        &self.leader
    }

    /// The occurrence count recorded for an answer.
    pub fn count_of(&self, answer: &str) -> u32 {
        self.counts.get(answer).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(prompt: &str, answer: &str) -> TermCard {
        TermCard::new(prompt, answer)
    }

    #[test]
    fn empty_tally_has_empty_leader() {
        let tally = AnswerTally::new("capital of france");
        assert_eq!(tally.leader(), "");
    }

    #[test]
    fn matching_prompt_counted() {
        let mut tally = AnswerTally::new("capital of france");
        tally.observe(&card("capital of france", "paris"));
        assert_eq!(tally.leader(), "paris");
        assert_eq!(tally.count_of("paris"), 1);
    }

    #[test]
    fn match_is_case_insensitive_containment() {
        let mut tally = AnswerTally::new("capital of france");
        tally.observe(&card("Q12: What is the Capital Of France?", "paris"));
        assert_eq!(tally.leader(), "paris");
    }

    #[test]
    fn non_matching_prompt_ignored() {
        let mut tally = AnswerTally::new("capital of france");
        tally.observe(&card("capital of italy", "rome"));
        assert_eq!(tally.leader(), "");
        assert_eq!(tally.count_of("rome"), 0);
    }

    #[test]
    fn majority_answer_wins() {
        let mut tally = AnswerTally::new("capital of france");
        tally.observe_all(&[
            card("capital of france", "paris"),
            card("capital of france", "lyon"),
            card("capital of france", "paris"),
        ]);
        assert_eq!(tally.leader(), "paris");
        assert_eq!(tally.count_of("paris"), 2);
        assert_eq!(tally.count_of("lyon"), 1);
    }

    #[test]
    fn tie_broken_by_first_to_reach_count() {
        let mut tally = AnswerTally::new("q");
        // Arrival order: zebra, apple, zebra, apple. Final counts tie at 2,
        // but zebra reached 2 first — it must keep the lead over the
        // alphabetically-earlier apple.
        tally.observe_all(&[
            card("q", "zebra"),
            card("q", "apple"),
            card("q", "zebra"),
            card("q", "apple"),
        ]);
        assert_eq!(tally.count_of("zebra"), 2);
        assert_eq!(tally.count_of("apple"), 2);
        assert_eq!(tally.leader(), "zebra");
    }

    #[test]
    fn question_trimmed_before_matching() {
        let mut tally = AnswerTally::new("  capital of france  ");
        tally.observe(&card("capital of france", "paris"));
        assert_eq!(tally.leader(), "paris");
    }

    #[test]
    fn capital_of_france_scenario() {
        let mut tally = AnswerTally::new("capital of france");
        tally.observe_all(&[
            card("capital of france", "paris"),
            card("Capital Of France", "paris"),
            card("capital of france", "lyon"),
        ]);
        assert_eq!(tally.leader(), "paris");
    }
}
