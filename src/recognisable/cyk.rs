use fnv::{FnvHashMap, FnvHashSet};
use integeriser::{HashIntegeriser, Integeriser};
use std::hash::Hash;

use crate::grammars::cnf::{CnfGrammar, CnfRhs};

/// A recogniser for grammars in Chomsky normal form, based on the
/// Cocke–Younger–Kasami algorithm.  The variables of the grammar are
/// integerised on construction, and the rules are indexed by their
/// right-hand sides, so that each table cell is filled by hash lookups.
#[derive(Debug)]
pub struct CykRecogniser<T>
where
    T: Eq + Hash,
{
    initial: usize,
    terminal_rules: FnvHashMap<T, Vec<usize>>,
    binary_rules: FnvHashMap<(usize, usize), Vec<usize>>,
}

impl<T> CykRecogniser<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new<M>(g: &CnfGrammar<M, T>) -> Self
    where
        M: Clone + Eq + Hash,
    {
        let mut variables = HashIntegeriser::new();
        let initial = variables.integerise(g.initial.clone());

        let mut terminal_rules: FnvHashMap<T, Vec<usize>> = FnvHashMap::default();
        let mut binary_rules: FnvHashMap<(usize, usize), Vec<usize>> = FnvHashMap::default();

        for rule in &g.rules {
            let head = variables.integerise(rule.head.clone());
            match rule.rhs {
                CnfRhs::Terminal(ref t) => terminal_rules
                    .entry(t.clone())
                    .or_insert_with(Vec::new)
                    .push(head),
                CnfRhs::Variables(ref b, ref c) => {
                    let b = variables.integerise(b.clone());
                    let c = variables.integerise(c.clone());
                    binary_rules
                        .entry((b, c))
                        .or_insert_with(Vec::new)
                        .push(head);
                }
            }
        }

        CykRecogniser {
            initial,
            terminal_rules,
            binary_rules,
        }
    }

    /// Decides whether `word` is derivable from the initial variable of the
    /// grammar.  A grammar in Chomsky normal form cannot derive the empty
    /// word, so the empty word is always rejected here.
    pub fn recognise(&self, word: &[T]) -> bool {
        let n = word.len();
        if n == 0 {
            return false;
        }

        // table[l - 1][i] contains the variables deriving word[i .. i + l]
        let mut table: Vec<Vec<FnvHashSet<usize>>> = Vec::with_capacity(n);

        let mut row = Vec::with_capacity(n);
        for t in word {
            let cell: FnvHashSet<usize> = self
                .terminal_rules
                .get(t)
                .map(|heads| heads.iter().cloned().collect())
                .unwrap_or_default();
            row.push(cell);
        }
        table.push(row);

        for l in 2..=n {
            let mut row = Vec::with_capacity(n - l + 1);
            for i in 0..=(n - l) {
                let mut cell = FnvHashSet::default();
                for split in 1..l {
                    let left = &table[split - 1][i];
                    let right = &table[l - split - 1][i + split];
                    for b in left {
                        for c in right {
                            if let Some(heads) = self.binary_rules.get(&(*b, *c)) {
                                cell.extend(heads.iter().cloned());
                            }
                        }
                    }
                }
                row.push(cell);
            }
            table.push(row);
        }

        table[n - 1][0].contains(&self.initial)
    }
}
