use std::fmt::Display;
use std::hash::Hash;

use thiserror::Error;

use crate::grammars::cfg::Cfg;
use crate::grammars::cnf::CnfGrammar;

pub mod chomsky;
pub mod lambda;
pub mod unit;
pub mod useless;

pub use self::chomsky::CnfVariable;

/// Raised by `chomsky::rewrite` when a rule is not expressible in Chomsky
/// normal form.  The full pipeline in `normalise` removes all such rules
/// beforehand, so it never reports these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalisationError {
    #[error("illegal grammar: the rule of \"{0}\" has an empty right-hand side")]
    EmptyRhs(String),
    #[error("illegal grammar: \"{0}\" → [Nt \"{1}\"] is a unit rule")]
    UnitRhs(String, String),
}

/// A grammar in Chomsky normal form together with the information whether the
/// original grammar accepts the empty word.  The rewritten grammar itself
/// cannot derive the empty word, so that bit is the only part of the original
/// language that the rules do not carry.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Normalised<N, T> {
    pub grammar: CnfGrammar<CnfVariable<N, T>, T>,
    pub accepts_empty: bool,
}

/// Normalises `g` into Chomsky normal form by eliminating λ-rules, unit
/// rules, and useless variables, in this order, and binarising what remains.
///
/// A grammar whose language is empty comes out with an empty rule set.
pub fn normalise<N, T>(g: &Cfg<N, T>) -> Result<Normalised<N, T>, NormalisationError>
where
    N: Clone + Ord + Hash + Display,
    T: Clone + Ord + Hash + Display,
{
    let nullable = lambda::closure(g);
    let accepts_empty = nullable.contains(&g.initial);

    let stripped = lambda::eliminate(g, &nullable);
    let without_units = unit::eliminate(&stripped);
    let useful = useless::eliminate(&without_units);
    let grammar = chomsky::rewrite(&useful)?;

    Ok(Normalised {
        grammar,
        accepts_empty,
    })
}
