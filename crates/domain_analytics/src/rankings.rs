//! Tie-break selection queries

use std::collections::BTreeMap;

use crate::engine::QueryEngine;

/// Which end of a ranking to select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Most,
    Least,
}

impl Extreme {
    fn prefers(&self, candidate: usize, current: usize) -> bool {
        match self {
            Extreme::Most => candidate > current,
            Extreme::Least => candidate < current,
        }
    }
}

/// Picks the key with the extreme count
///
/// Keys are visited in ascending order and only a strictly better count
/// replaces the current pick, so ties go to the alphabetically first key.
pub(crate) fn select_by_count<'a>(counts: &BTreeMap<&'a str, usize>, extreme: Extreme) -> Option<&'a str> {
    counts
        .iter()
        .fold(None, |best: Option<(&'a str, usize)>, (&key, &count)| match best {
            Some((_, best_count)) if !extreme.prefers(count, best_count) => best,
            _ => Some((key, count)),
        })
        .map(|(key, _)| key)
}

impl QueryEngine {
    /// Disaster count for every state that has at least one disaster
    pub fn disaster_counts_by_state(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for disaster in self.dataset().disasters() {
            *counts.entry(disaster.state.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// State with the most or least disasters, ties to the alphabetically first
    ///
    /// `None` only when there are no disasters at all.
    pub fn state_by_disaster_count(&self, extreme: Extreme) -> Option<String> {
        select_by_count(&self.disaster_counts_by_state(), extreme).map(str::to_string)
    }

    pub fn state_with_most_disasters(&self) -> Option<String> {
        self.state_by_disaster_count(Extreme::Most)
    }

    pub fn state_with_least_disasters(&self) -> Option<String> {
        self.state_by_disaster_count(Extreme::Least)
    }

    /// Most common non-English language among a state's agents
    ///
    /// Primary and secondary languages both count. Ties go to the
    /// alphabetically first language. Returns an empty string when the state
    /// has no agents or none of them speaks a language other than English.
    pub fn most_spoken_agent_language_by_state(&self, state: &str) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for agent in self.dataset().agents().iter().filter(|agent| agent.state == state) {
            for language in agent.non_english_languages() {
                *counts.entry(language).or_insert(0) += 1;
            }
        }
        select_by_count(&counts, Extreme::Most)
            .map(str::to_string)
            .unwrap_or_default()
    }
}
