//! Backtracking search for every combination of dictionary words whose
//! letters add up exactly to the target word.
//!
//! The dictionary is sorted longest first. A combination is built by
//! picking words at strictly increasing positions, so no entry is used twice
//! and word lengths never increase along a combination. Each branch works
//! on its own copy of the [`LetterMultiset`]; the path of chosen positions is
//! a single stack, pushed before recursing and popped after.
//!
//! The search can fan out over the opening word with rayon. Every opening
//! word gets its own multiset copy and path stack, and results are merged
//! back in opening-word order, so the parallel and sequential solution sets
//! are identical.

use crate::dictionary::Dictionary;
use crate::letters::LetterMultiset;
use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::ops::AddAssign;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Positions in the searched dictionary, strictly increasing.
pub type Combination = Vec<usize>;

/// Every combination found, in the order the search produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    combinations: Vec<Combination>,
}

impl SolutionSet {
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Resolve each combination to its words.
    pub fn words<'a>(&self, dict: &Dictionary<'a>) -> Vec<Vec<&'a str>> {
        self.combinations
            .iter()
            .map(|combination| combination.iter().map(|&i| dict.word(i)).collect())
            .collect()
    }
}

impl IntoIterator for SolutionSet {
    type Item = Combination;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.into_iter()
    }
}

/// Traversal counters, returned with the solutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the per-position loop.
    pub nodes_visited: u64,
    /// Words whose letters we tried to consume.
    pub words_tried: u64,
    /// Words jumped over by the length index.
    pub words_skipped: u64,
    pub solutions: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.nodes_visited += rhs.nodes_visited;
        self.words_tried += rhs.words_tried;
        self.words_skipped += rhs.words_skipped;
        self.solutions += rhs.solutions;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Spread opening words over the rayon pool.
    pub parallel: bool,
    /// Jump over words longer than the letters left, using the length index.
    pub skip_ahead: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            parallel: false,
            skip_ahead: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub solutions: SolutionSet,
    pub stats: SearchStats,
    /// The cancel flag was raised; `solutions` holds what was found so far.
    pub cancelled: bool,
}

pub struct SearchEngine<'a> {
    dict: &'a Dictionary<'a>,
    options: SearchOptions,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(dict: &'a Dictionary<'a>) -> SearchEngine<'a> {
        SearchEngine {
            dict,
            options: SearchOptions::default(),
            cancel: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Check `flag` before every word; once it is set the search unwinds.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Find every combination of dictionary words that spells `target`.
    ///
    /// `dict` should already be filtered against `target`; an unfiltered
    /// dictionary gives the same answer, only slower.
    pub fn run(&self, target: &LetterMultiset) -> SearchOutcome {
        let started = Instant::now();
        // Any opening word is at most as long as the target.
        let Some(first) = self
            .dict
            .length_index()
            .first_at_most(target.remaining_length())
        else {
            debug!("no word is short enough to open a combination");
            return SearchOutcome::default();
        };

        let outcome = if self.options.parallel {
            self.run_parallel(target, first)
        } else {
            let mut traversal = Traversal::new(self);
            for start in first..self.dict.len() {
                if traversal.is_cancelled() {
                    break;
                }
                traversal.try_word(target, start);
            }
            traversal.finish()
        };

        info!(
            "search found {} combinations in {:.3}s ({} words tried)",
            outcome.solutions.len(),
            started.elapsed().as_secs_f64(),
            outcome.stats.words_tried
        );
        outcome
    }

    fn run_parallel(&self, target: &LetterMultiset, first: usize) -> SearchOutcome {
        // (opening position, outcome) from every worker
        let collected = Mutex::new(Vec::new());
        (first..self.dict.len()).into_par_iter().for_each(|start| {
            let mut traversal = Traversal::new(self);
            if !traversal.is_cancelled() {
                traversal.try_word(target, start);
            }
            let outcome = traversal.finish();
            collected.lock().push((start, outcome));
        });

        let mut per_start = collected.into_inner();
        per_start.sort_unstable_by_key(|(start, _)| *start);

        let mut merged = SearchOutcome::default();
        for (_, outcome) in per_start {
            merged.solutions.combinations.extend(outcome.solutions);
            merged.stats += outcome.stats;
            merged.cancelled |= outcome.cancelled;
        }
        merged
    }
}

/// Mutable state of one traversal: the shared path stack and the collector.
struct Traversal<'e> {
    dict: &'e Dictionary<'e>,
    options: SearchOptions,
    cancel: Option<&'e AtomicBool>,
    path: Vec<usize>,
    solutions: Vec<Combination>,
    stats: SearchStats,
    cancelled: bool,
}

impl<'e> Traversal<'e> {
    fn new(engine: &SearchEngine<'e>) -> Traversal<'e> {
        Traversal {
            dict: engine.dict,
            options: engine.options,
            cancel: engine.cancel,
            path: Vec::new(),
            solutions: Vec::new(),
            stats: SearchStats::default(),
            cancelled: false,
        }
    }

    fn is_cancelled(&mut self) -> bool {
        if !self.cancelled {
            self.cancelled = self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));
        }
        self.cancelled
    }

    /// Try every word from `start_index` onwards as the next word.
    fn search_from(&mut self, multiset: &LetterMultiset, start_index: usize) {
        self.stats.nodes_visited += 1;
        let mut index = start_index;
        while index < self.dict.len() {
            if self.is_cancelled() {
                return;
            }
            if self.options.skip_ahead && self.dict.word(index).len() > multiset.remaining_length() {
                match self
                    .dict
                    .length_index()
                    .first_at_most(multiset.remaining_length())
                {
                    Some(next) => {
                        debug_assert!(next > index);
                        let next = next.max(index + 1);
                        self.stats.words_skipped += (next - index) as u64;
                        index = next;
                        continue;
                    }
                    None => {
                        self.stats.words_skipped += (self.dict.len() - index) as u64;
                        return;
                    }
                }
            }
            self.try_word(multiset, index);
            index += 1;
        }
    }

    /// Use the word at `index` if its letters are all still available, and
    /// either record a solution or extend the path with it.
    fn try_word(&mut self, multiset: &LetterMultiset, index: usize) {
        self.stats.words_tried += 1;
        let mut remaining = *multiset;
        if !remaining.try_consume_word(self.dict.word(index)) {
            return;
        }

        if remaining.is_exhausted() {
            let mut combination = self.path.clone();
            combination.push(index);
            self.solutions.push(combination);
            self.stats.solutions += 1;
        } else {
            self.path.push(index);
            self.search_from(&remaining, index + 1);
            self.path.pop();
        }
    }

    fn finish(self) -> SearchOutcome {
        debug_assert!(self.path.is_empty());
        SearchOutcome {
            solutions: SolutionSet {
                combinations: self.solutions,
            },
            stats: self.stats,
            cancelled: self.cancelled,
        }
    }
}

/// Sequential search with default options.
pub fn search(target: &LetterMultiset, dict: &Dictionary<'_>) -> SolutionSet {
    SearchEngine::new(dict).run(target).solutions
}
