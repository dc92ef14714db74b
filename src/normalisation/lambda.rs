use std::collections::BTreeSet;

use crate::grammars::cfg::{Cfg, CfgRule, Symbol};

/// Computes the set of nullable variables of `g`, i.e. all variables that
/// derive the empty word.  A variable is added if the right-hand side of one
/// of its rules is empty or consists only of variables that are already known
/// to be nullable, until no further variable can be added.
pub fn closure<N, T>(g: &Cfg<N, T>) -> BTreeSet<N>
where
    N: Clone + Ord,
{
    let mut nullable = BTreeSet::new();

    let mut changed = true;
    while changed {
        changed = false;
        for rule in &g.rules {
            if nullable.contains(&rule.head) {
                continue;
            }
            let rhs_nullable = rule.rhs.iter().all(|symbol| match *symbol {
                Symbol::Variable(ref v) => nullable.contains(v),
                Symbol::Terminal(_) => false,
            });
            if rhs_nullable {
                nullable.insert(rule.head.clone());
                changed = true;
            }
        }
    }

    nullable
}

/// Removes all λ-rules from `g`.  Every rule is replaced by the set of its
/// deletion variants, i.e. the rules obtained by deleting occurrences of
/// variables in `nullable` from its right-hand side in every combination.
/// The variant in which the entire right-hand side is deleted is never added,
/// so the returned grammar contains no rule with an empty right-hand side.
///
/// Whether the language of `g` contains the empty word must be recorded
/// before this pass, cf. `closure`.
pub fn eliminate<N, T>(g: &Cfg<N, T>, nullable: &BTreeSet<N>) -> Cfg<N, T>
where
    N: Clone + Ord,
    T: Clone + Ord,
{
    let mut rules = Vec::new();
    let mut known = BTreeSet::new();

    for rule in &g.rules {
        for rhs in deletion_variants(&rule.rhs, nullable) {
            if rhs.is_empty() {
                continue;
            }
            if known.insert((rule.head.clone(), rhs.clone())) {
                rules.push(CfgRule {
                    head: rule.head.clone(),
                    rhs,
                });
            }
        }
    }

    Cfg {
        initial: g.initial.clone(),
        rules,
    }
}

/// Returns all right-hand sides that can be obtained from `rhs` by deleting
/// occurrences of nullable variables.  Non-nullable symbols are kept in every
/// variant, so the result contains `2^k` (not necessarily distinct) variants,
/// where `k` is the number of nullable occurrences in `rhs`.
fn deletion_variants<N, T>(rhs: &[Symbol<N, T>], nullable: &BTreeSet<N>) -> Vec<Vec<Symbol<N, T>>>
where
    N: Clone + Ord,
    T: Clone,
{
    let mut variants = vec![Vec::new()];

    for symbol in rhs {
        let deletable = match *symbol {
            Symbol::Variable(ref v) => nullable.contains(v),
            Symbol::Terminal(_) => false,
        };

        if deletable {
            let mut doubled = Vec::with_capacity(2 * variants.len());
            for variant in variants {
                let mut kept = variant.clone();
                kept.push(symbol.clone());
                doubled.push(kept);
                doubled.push(variant);
            }
            variants = doubled;
        } else {
            for variant in &mut variants {
                variant.push(symbol.clone());
            }
        }
    }

    variants
}
