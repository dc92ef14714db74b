use std::fmt;

/// Right-hand side of a rule in Chomsky normal form: either exactly two
/// variables or exactly one terminal symbol.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub enum CnfRhs<M, T> {
    Variables(M, M),
    Terminal(T),
}

/// A rule of a grammar in Chomsky normal form.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub struct CnfRule<M, T> {
    pub head: M,
    pub rhs: CnfRhs<M, T>,
}

/// A context-free grammar in Chomsky normal form.  Such a grammar cannot
/// derive the empty word; whether the empty word belongs to the language is
/// recorded separately by `Normalised` in the `normalisation` module.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub struct CnfGrammar<M, T> {
    pub initial: M,
    pub rules: Vec<CnfRule<M, T>>,
}

impl<M: fmt::Display, T: fmt::Display> fmt::Display for CnfRhs<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CnfRhs::Variables(ref b, ref c) => write!(f, "[Nt \"{}\", Nt \"{}\"]", b, c),
            CnfRhs::Terminal(ref t) => write!(f, "[T \"{}\"]", t),
        }
    }
}

impl<M: fmt::Display, T: fmt::Display> fmt::Display for CnfRule<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" → {}", self.head, self.rhs)
    }
}

impl<M: fmt::Display, T: fmt::Display> fmt::Display for CnfGrammar<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = String::new();

        buffer.push_str(format!("initial: [\"{}\"]\n\n", self.initial).as_str());
        for rule in &self.rules {
            buffer.push_str(format!("{}\n", rule).as_str());
        }

        write!(f, "{}", buffer)
    }
}
