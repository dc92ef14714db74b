use std::collections::{BTreeMap, BTreeSet};

use crate::grammars::cfg::{Cfg, CfgRule, Symbol};

/// Removes all unit rules (rules of the form `A → [Nt B]`) from `g`.
///
/// The rules are grouped into alternatives per variable.  As long as some
/// variable `A` has a unit alternative `[Nt B]`, that alternative is removed
/// and replaced by all current alternatives of `B`, except for `[Nt A]`
/// itself.  A unit alternative that points to a variable without any
/// alternatives simply vanishes.
pub fn eliminate<N, T>(g: &Cfg<N, T>) -> Cfg<N, T>
where
    N: Clone + Ord,
    T: Clone + Ord,
{
    let mut alternatives: BTreeMap<N, BTreeSet<Vec<Symbol<N, T>>>> = BTreeMap::new();
    for rule in &g.rules {
        alternatives
            .entry(rule.head.clone())
            .or_insert_with(BTreeSet::new)
            .insert(rule.rhs.clone());
    }

    let heads: Vec<N> = alternatives.keys().cloned().collect();
    let mut changed = true;
    while changed {
        changed = false;
        for head in &heads {
            let units: Vec<N> = alternatives[head]
                .iter()
                .filter_map(|rhs| match rhs.as_slice() {
                    [Symbol::Variable(ref v)] => Some(v.clone()),
                    _ => None,
                })
                .collect();

            for unit in units {
                changed = true;
                let unit_rhs = vec![Symbol::Variable(unit.clone())];
                let self_loop = vec![Symbol::Variable(head.clone())];

                let substitutes: Vec<Vec<Symbol<N, T>>> = alternatives
                    .get(&unit)
                    .map(|rhss| rhss.iter().cloned().collect())
                    .unwrap_or_default();

                if let Some(own) = alternatives.get_mut(head) {
                    own.remove(&unit_rhs);
                    for rhs in substitutes {
                        if rhs != self_loop {
                            own.insert(rhs);
                        }
                    }
                }
            }
        }
    }

    let mut rules = Vec::new();
    for (head, rhss) in alternatives {
        for rhs in rhss {
            rules.push(CfgRule {
                head: head.clone(),
                rhs,
            });
        }
    }

    Cfg {
        initial: g.initial.clone(),
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_eliminate() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T]\n\
             T → [T 0, Nt T]\n\
             T → [T 0]",
        ).unwrap();
        let control: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T 0, Nt T]\n\
             S → [T 0]\n\
             T → [T 0, Nt T]\n\
             T → [T 0]",
        ).unwrap();

        assert_eq!(sorted(control), eliminate(&g));
    }

    #[test]
    fn test_eliminate_unit_chain() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T]\n\
             T → [Nt Z]\n\
             Z → [T 0, T 0]",
        ).unwrap();
        let control: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T 0, T 0]\n\
             T → [T 0, T 0]\n\
             Z → [T 0, T 0]",
        ).unwrap();

        assert_eq!(sorted(control), eliminate(&g));
    }

    #[test]
    fn test_eliminate_suppresses_self_loops() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt S]\n\
             S → [T a]",
        ).unwrap();
        let control: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T a]",
        ).unwrap();

        assert_eq!(sorted(control), eliminate(&g));
    }

    #[test]
    fn test_eliminate_unit_cycle_without_alternatives() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T]\n\
             T → [Nt S]",
        ).unwrap();
        let stripped = eliminate(&g);

        assert!(stripped.rules.is_empty());
    }

    #[test]
    fn test_eliminate_is_idempotent() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T]\n\
             S → [T 1, Nt S]\n\
             T → [T 0]",
        ).unwrap();
        let once = eliminate(&g);
        let twice = eliminate(&once);

        assert_eq!(once, twice);
    }

    /// `eliminate` reconstructs the rules in alternative-set order, so control
    /// grammars are brought into the same order before comparison.
    fn sorted(mut g: Cfg<char, char>) -> Cfg<char, char> {
        g.rules.sort();
        g
    }
}
