use fnv::FnvHashSet;
use std::fmt;
use std::hash::Hash;

use crate::grammars::cfg::{Cfg, Symbol};
use crate::grammars::cnf::{CnfGrammar, CnfRhs, CnfRule};
use crate::normalisation::NormalisationError;

/// Variable of a grammar in Chomsky normal form.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub enum CnfVariable<N, T> {
    /// A variable of the source grammar.
    Plain(N),
    /// A fresh variable that derives exactly the terminal symbol it wraps.
    Wrap(T),
    /// A fresh variable that derives the tail of a binarised right-hand side.
    Link(usize),
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for CnfVariable<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CnfVariable::Plain(ref n) => write!(f, "{}", n),
            CnfVariable::Wrap(ref t) => write!(f, "_{}", t),
            CnfVariable::Link(i) => write!(f, "@{}", i),
        }
    }
}

/// Rewrites `g` into Chomsky normal form.  The rules of `g` must already be
/// free of λ-rules and unit rules, otherwise a `NormalisationError` is
/// returned.
///
/// Terminal symbols in right-hand sides of length at least two are replaced
/// by `Wrap` variables, and right-hand sides of more than two variables are
/// decomposed from the left, with one fresh `Link` variable per decomposition
/// step.  Duplicate rules arising from the rewrite are emitted only once.
pub fn rewrite<N, T>(g: &Cfg<N, T>) -> Result<CnfGrammar<CnfVariable<N, T>, T>, NormalisationError>
where
    N: Clone + Eq + Hash + fmt::Display,
    T: Clone + Eq + Hash + fmt::Display,
{
    for rule in &g.rules {
        match rule.rhs.as_slice() {
            [] => return Err(NormalisationError::EmptyRhs(rule.head.to_string())),
            [Symbol::Variable(ref v)] => {
                return Err(NormalisationError::UnitRhs(
                    rule.head.to_string(),
                    v.to_string(),
                ))
            }
            _ => (),
        }
    }

    let mut rules = Vec::new();
    let mut emitted = FnvHashSet::default();
    let mut links = 0;

    for rule in &g.rules {
        if let [Symbol::Terminal(ref t)] = rule.rhs.as_slice() {
            emit(
                CnfRule {
                    head: CnfVariable::Plain(rule.head.clone()),
                    rhs: CnfRhs::Terminal(t.clone()),
                },
                &mut rules,
                &mut emitted,
            );
            continue;
        }

        let mut separated = Vec::with_capacity(rule.rhs.len());
        for symbol in &rule.rhs {
            match *symbol {
                Symbol::Variable(ref v) => separated.push(CnfVariable::Plain(v.clone())),
                Symbol::Terminal(ref t) => {
                    emit(
                        CnfRule {
                            head: CnfVariable::Wrap(t.clone()),
                            rhs: CnfRhs::Terminal(t.clone()),
                        },
                        &mut rules,
                        &mut emitted,
                    );
                    separated.push(CnfVariable::Wrap(t.clone()));
                }
            }
        }

        // pending right-hand sides always contain at least two variables
        let mut pending = vec![(CnfVariable::Plain(rule.head.clone()), separated)];
        while let Some((head, mut rhs)) = pending.pop() {
            if rhs.len() == 2 {
                emit(
                    CnfRule {
                        head,
                        rhs: CnfRhs::Variables(rhs[0].clone(), rhs[1].clone()),
                    },
                    &mut rules,
                    &mut emitted,
                );
            } else {
                let link = CnfVariable::Link(links);
                links += 1;
                let first = rhs.remove(0);
                emit(
                    CnfRule {
                        head,
                        rhs: CnfRhs::Variables(first, link.clone()),
                    },
                    &mut rules,
                    &mut emitted,
                );
                pending.push((link, rhs));
            }
        }
    }

    Ok(CnfGrammar {
        initial: CnfVariable::Plain(g.initial.clone()),
        rules,
    })
}

fn emit<M, T>(rule: CnfRule<M, T>, rules: &mut Vec<CnfRule<M, T>>, emitted: &mut FnvHashSet<CnfRule<M, T>>)
where
    M: Clone + Eq + Hash,
    T: Clone + Eq + Hash,
{
    if emitted.insert(rule.clone()) {
        rules.push(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rewrite_keeps_terminal_rules() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T a]",
        ).unwrap();
        let cnf = rewrite(&g).unwrap();

        assert_eq!(CnfVariable::Plain('S'), cnf.initial);
        assert_eq!(
            vec![CnfRule {
                head: CnfVariable::Plain('S'),
                rhs: CnfRhs::Terminal('a'),
            }],
            cnf.rules
        );
    }

    #[test]
    fn test_rewrite_wraps_terminals() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T 0, Nt T]\n\
             T → [T 0]",
        ).unwrap();
        let cnf = rewrite(&g).unwrap();

        assert_eq!(
            vec![
                CnfRule {
                    head: CnfVariable::Wrap('0'),
                    rhs: CnfRhs::Terminal('0'),
                },
                CnfRule {
                    head: CnfVariable::Plain('S'),
                    rhs: CnfRhs::Variables(CnfVariable::Wrap('0'), CnfVariable::Plain('T')),
                },
                CnfRule {
                    head: CnfVariable::Plain('T'),
                    rhs: CnfRhs::Terminal('0'),
                },
            ],
            cnf.rules
        );
    }

    #[test]
    fn test_rewrite_binarises_from_the_left() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt A, Nt B, Nt C, Nt D]\n\
             A → [T a]\n\
             B → [T b]\n\
             C → [T c]\n\
             D → [T d]",
        ).unwrap();
        let cnf = rewrite(&g).unwrap();

        let a = CnfVariable::Plain('A');
        let b = CnfVariable::Plain('B');
        let c = CnfVariable::Plain('C');
        let d = CnfVariable::Plain('D');

        assert_eq!(
            vec![
                CnfRule {
                    head: CnfVariable::Plain('S'),
                    rhs: CnfRhs::Variables(a, CnfVariable::Link(0)),
                },
                CnfRule {
                    head: CnfVariable::Link(0),
                    rhs: CnfRhs::Variables(b, CnfVariable::Link(1)),
                },
                CnfRule {
                    head: CnfVariable::Link(1),
                    rhs: CnfRhs::Variables(c, d),
                },
            ],
            cnf.rules[..3].to_vec()
        );
    }

    #[test]
    fn test_rewrite_deduplicates_wrap_rules() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T 0, T 0]\n\
             S → [T 0, Nt S]",
        ).unwrap();
        let cnf = rewrite(&g).unwrap();

        let wrap_rules = cnf
            .rules
            .iter()
            .filter(|rule| rule.head == CnfVariable::Wrap('0'))
            .count();

        assert_eq!(1, wrap_rules);
    }

    #[test]
    fn test_rewrite_rejects_empty_rhs() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [T a]\n\
             U → []",
        ).unwrap();

        assert_eq!(
            Err(NormalisationError::EmptyRhs(String::from("U"))),
            rewrite(&g)
        );
    }

    #[test]
    fn test_rewrite_rejects_unit_rhs() {
        let g: Cfg<char, char> = Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T]\n\
             T → [T 0, T 1]",
        ).unwrap();

        assert_eq!(
            Err(NormalisationError::UnitRhs(
                String::from("S"),
                String::from("T")
            )),
            rewrite(&g)
        );
    }
}
