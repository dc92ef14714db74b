use std::collections::{BTreeMap, BTreeSet};

use search::Search;

use crate::grammars::cfg::{Cfg, CfgRule, Symbol};

/// Computes the set of generating variables of `g`, i.e. all variables that
/// derive some word of terminal symbols.
pub fn generating<N, T>(g: &Cfg<N, T>) -> BTreeSet<N>
where
    N: Clone + Ord,
{
    let mut generating = BTreeSet::new();

    let mut changed = true;
    while changed {
        changed = false;
        for rule in &g.rules {
            if generating.contains(&rule.head) {
                continue;
            }
            let rhs_generating = rule.rhs.iter().all(|symbol| match *symbol {
                Symbol::Variable(ref v) => generating.contains(v),
                Symbol::Terminal(_) => true,
            });
            if rhs_generating {
                generating.insert(rule.head.clone());
                changed = true;
            }
        }
    }

    generating
}

/// Computes the set of variables of `g` that are reachable from the initial
/// nonterminal by breadth-first search over the rules.
pub fn reachable<N, T>(g: &Cfg<N, T>) -> BTreeSet<N>
where
    N: Clone + Ord,
{
    let mut index: BTreeMap<N, Vec<N>> = BTreeMap::new();
    for rule in &g.rules {
        let successors = index.entry(rule.head.clone()).or_insert_with(Vec::new);
        for symbol in &rule.rhs {
            if let Symbol::Variable(ref v) = *symbol {
                successors.push(v.clone());
            }
        }
    }

    Search::bfs(vec![g.initial.clone()], move |v: &N| {
        index.get(v).cloned().unwrap_or_default()
    }).uniques()
        .collect()
}

/// Removes all useless variables from `g`, together with every rule that
/// mentions one.  A variable is useless if it is not generating or not
/// reachable from the initial nonterminal once the non-generating variables
/// are gone.  The initial nonterminal itself is never removed.
pub fn eliminate<N, T>(g: &Cfg<N, T>) -> Cfg<N, T>
where
    N: Clone + Ord,
    T: Clone + Ord,
{
    let generating = generating(g);

    let restricted = Cfg {
        initial: g.initial.clone(),
        rules: g
            .rules
            .iter()
            .filter(|rule| {
                generating.contains(&rule.head)
                    && rule.rhs.iter().all(|symbol| match *symbol {
                        Symbol::Variable(ref v) => generating.contains(v),
                        Symbol::Terminal(_) => true,
                    })
            })
            .cloned()
            .collect::<Vec<CfgRule<N, T>>>(),
    };

    let reachable = reachable(&restricted);

    Cfg {
        initial: restricted.initial,
        rules: restricted
            .rules
            .into_iter()
            .filter(|rule| reachable.contains(&rule.head))
            .collect(),
    }
}
