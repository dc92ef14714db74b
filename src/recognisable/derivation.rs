use fnv::FnvHashMap;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, VecDeque};
use std::hash::Hash;

use search::agenda::limited_heap;
use search::agenda::weighted::Weighted;
use search::Agenda;

use crate::grammars::cfg::{Cfg, Symbol};
use crate::normalisation::useless;
use crate::recognisable::Verdict;

/// Number of states a derivation search explores before it gives up.
pub const DEFAULT_STEP_BOUND: usize = 128 * 1024;

/// State of a derivation search: a sentential form `derived` that still has
/// to produce the remaining input `target`.  Matching terminals are stripped
/// from both ends when a state is constructed, cf.
/// `DerivationSearch::recognise`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Derivation<N, T> {
    pub derived: Vec<Symbol<N, T>>,
    pub target: Vec<T>,
}

/// States with less remaining input come first, ties are broken by the
/// length of the sentential form and then structurally.
impl<N: Ord, T: Ord> Ord for Derivation<N, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.target
            .len()
            .cmp(&other.target.len())
            .then_with(|| self.derived.len().cmp(&other.derived.len()))
            .then_with(|| self.derived.cmp(&other.derived))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<N: Ord, T: Ord> PartialOrd for Derivation<N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, T> Weighted for Derivation<N, T> {
    type Weight = Reverse<(usize, usize)>;

    fn get_weight(&self) -> Self::Weight {
        Reverse((self.target.len(), self.derived.len()))
    }
}

/// Result of reducing a freshly expanded derivation state.
enum Reduced<N, T> {
    /// Both the sentential form and the remaining input are exhausted.
    Accepted,
    /// The state can never produce the remaining input.
    Pruned,
    /// The reduced state, to be explored further.
    Continue(Derivation<N, T>),
}

/// A brute-force recogniser that searches for a derivation of the input,
/// expanding the leftmost and the rightmost variable of every explored
/// sentential form.  It works directly on the rules of a CFG, without any
/// normalisation, but visits at most a fixed number of states, so its answer
/// is three-valued, cf. `Verdict`.
pub struct DerivationSearch<N, T>
where
    N: Eq + Hash,
{
    rules: FnvHashMap<N, Vec<Vec<Symbol<N, T>>>>,
    terminals: BTreeSet<T>,
    generating: BTreeSet<N>,
    initial: N,
    step_bound: usize,
}

impl<N, T> DerivationSearch<N, T>
where
    N: Clone + Eq + Hash + Ord,
    T: Clone + Eq + Ord,
{
    pub fn new(g: &Cfg<N, T>) -> Self {
        let mut rules: FnvHashMap<N, Vec<Vec<Symbol<N, T>>>> = FnvHashMap::default();
        for rule in &g.rules {
            rules
                .entry(rule.head.clone())
                .or_insert_with(Vec::new)
                .push(rule.rhs.clone());
        }

        DerivationSearch {
            rules,
            terminals: g.terminals(),
            generating: useless::generating(g),
            initial: g.initial.clone(),
            step_bound: DEFAULT_STEP_BOUND,
        }
    }

    /// Replaces the default step bound.
    pub fn with_step_bound(mut self, step_bound: usize) -> Self {
        self.step_bound = step_bound;
        self
    }

    /// Searches breadth-first for a derivation of `word`.
    ///
    /// A word that contains a symbol outside the terminal alphabet of the
    /// grammar is rejected up front, without consuming any search step, and
    /// so is every word if the initial variable cannot derive terminal words
    /// at all.
    pub fn recognise(&self, word: &[T]) -> Verdict {
        if !self.valid_input(word) {
            return Verdict::Rejected;
        }
        self.run(VecDeque::new(), word)
    }

    /// Like `recognise`, but keeps only the `beam` most promising states in
    /// the agenda: states with less remaining input are explored first.  The
    /// search stays sound, but may reject words that a complete search would
    /// accept.
    pub fn recognise_beam(&self, word: &[T], beam: usize) -> Verdict {
        if !self.valid_input(word) {
            return Verdict::Rejected;
        }
        self.run(limited_heap::weighted::LimitedHeap::with_capacity(beam), word)
    }

    /// Collapses the verdict of `recognise` into a yes/no answer.
    pub fn accepts(&self, word: &[T]) -> bool {
        self.recognise(word).is_accepted()
    }

    fn valid_input(&self, word: &[T]) -> bool {
        word.iter().all(|t| self.terminals.contains(t))
            && self.generating.contains(&self.initial)
    }

    fn run<A>(&self, mut agenda: A, word: &[T]) -> Verdict
    where
        A: Agenda<Item = Derivation<N, T>>,
    {
        let mut visited = BTreeSet::new();

        let initial = Derivation {
            derived: vec![Symbol::Variable(self.initial.clone())],
            target: word.to_vec(),
        };
        visited.insert(initial.clone());
        agenda.push(initial);

        let mut steps = 0;
        while let Some(derivation) = agenda.pop() {
            if steps >= self.step_bound {
                return Verdict::StepBoundExceeded;
            }
            steps += 1;

            // leftmost expansion
            if let Some(&Symbol::Variable(ref head)) = derivation.derived.first() {
                if let Some(rhss) = self.rules.get(head) {
                    for rhs in rhss {
                        let mut candidate = rhs.clone();
                        candidate.extend_from_slice(&derivation.derived[1..]);
                        match self.reduce(candidate, &derivation.target) {
                            Reduced::Accepted => return Verdict::Accepted,
                            Reduced::Continue(next) => {
                                if visited.insert(next.clone()) {
                                    agenda.push(next);
                                }
                            }
                            Reduced::Pruned => (),
                        }
                    }
                }
            }

            // rightmost expansion, unless it would redo the leftmost one
            if derivation.derived.len() > 1 {
                if let Some(&Symbol::Variable(ref head)) = derivation.derived.last() {
                    if let Some(rhss) = self.rules.get(head) {
                        for rhs in rhss {
                            let mut candidate =
                                derivation.derived[..derivation.derived.len() - 1].to_vec();
                            candidate.extend_from_slice(rhs);
                            match self.reduce(candidate, &derivation.target) {
                                Reduced::Accepted => return Verdict::Accepted,
                                Reduced::Continue(next) => {
                                    if visited.insert(next.clone()) {
                                        agenda.push(next);
                                    }
                                }
                                Reduced::Pruned => (),
                            }
                        }
                    }
                }
            }
        }

        Verdict::Rejected
    }

    /// Strips matching terminals from both ends of `derived` and `target`
    /// and decides whether the state is worth exploring further.
    fn reduce(&self, derived: Vec<Symbol<N, T>>, target: &[T]) -> Reduced<N, T> {
        let mut lo = 0;
        let mut hi = derived.len();
        let mut tgt_hi = target.len();

        while lo < hi {
            match derived[lo] {
                Symbol::Terminal(ref t) => {
                    if lo < tgt_hi && target[lo] == *t {
                        lo += 1;
                    } else {
                        return Reduced::Pruned;
                    }
                }
                Symbol::Variable(_) => break,
            }
        }

        while hi > lo {
            match derived[hi - 1] {
                Symbol::Terminal(ref t) => {
                    if tgt_hi > lo && target[tgt_hi - 1] == *t {
                        hi -= 1;
                        tgt_hi -= 1;
                    } else {
                        return Reduced::Pruned;
                    }
                }
                Symbol::Variable(_) => break,
            }
        }

        let trimmed = &derived[lo..hi];
        let remaining = &target[lo..tgt_hi];

        if trimmed.is_empty() {
            return if remaining.is_empty() {
                Reduced::Accepted
            } else {
                Reduced::Pruned
            };
        }

        let mut terminal_count = 0;
        for symbol in trimmed {
            match *symbol {
                Symbol::Variable(ref v) => {
                    if !self.generating.contains(v) {
                        return Reduced::Pruned;
                    }
                }
                Symbol::Terminal(_) => terminal_count += 1,
            }
        }
        if terminal_count > remaining.len() {
            return Reduced::Pruned;
        }

        Reduced::Continue(Derivation {
            derived: trimmed.to_vec(),
            target: remaining.to_vec(),
        })
    }
}
