use std::collections::BTreeSet;
use std::fmt;

mod from_str;

/// Variable or terminal symbol in a CFG.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub enum Symbol<N, T> {
    Variable(N),
    Terminal(T),
}

impl<N, T> Symbol<N, T> {
    pub fn is_variable(&self) -> bool {
        match *self {
            Symbol::Variable(_) => true,
            Symbol::Terminal(_) => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_variable()
    }
}

/// A rule of a CFG.
///
/// ```
/// use std::str::FromStr;
/// use chomskify::grammars::cfg::{CfgRule, Symbol};
///
/// let head = 'S';
/// let rhs = vec![
///     Symbol::Terminal('a'), Symbol::Variable('S'), Symbol::Terminal('b'),
/// ];
///
/// assert_eq!(
///     CfgRule { head, rhs },
///     CfgRule::from_str("S → [T a, Nt S, T b]").unwrap()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct CfgRule<N, T> {
    pub head: N,
    pub rhs: Vec<Symbol<N, T>>,
}

/// A context-free grammar (CFG). Contains an initial nonterminal symbol
/// and a set of context-free rules.
///
/// ```
/// use std::str::FromStr;
/// use chomskify::grammars::cfg::{Cfg, CfgRule};
///
/// let initial = 'S';
/// let rules = vec![
///     CfgRule::from_str("S → [T a, Nt S, T b]").unwrap(),
///     CfgRule::from_str("S → []").unwrap(),
/// ];
///
/// assert_eq!(
///     Cfg::<char, char> { initial, rules },
///     Cfg::from_str("initial: [S]\n\
///                    S → [T a, Nt S, T b]\n\
///                    S → []").unwrap()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Cfg<N, T> {
    pub initial: N,
    pub rules: Vec<CfgRule<N, T>>,
}

impl<N, T> Cfg<N, T>
where
    N: Clone + Ord,
    T: Clone + Ord,
{
    /// Returns the variables of the grammar, i.e. the initial nonterminal together
    /// with every nonterminal that occurs in some rule.
    pub fn variables(&self) -> BTreeSet<N> {
        let mut variables = BTreeSet::new();
        variables.insert(self.initial.clone());
        for rule in &self.rules {
            variables.insert(rule.head.clone());
            for symbol in &rule.rhs {
                if let Symbol::Variable(ref v) = *symbol {
                    variables.insert(v.clone());
                }
            }
        }
        variables
    }

    /// Returns the terminal symbols that occur in some rule of the grammar.
    pub fn terminals(&self) -> BTreeSet<T> {
        let mut terminals = BTreeSet::new();
        for rule in &self.rules {
            for symbol in &rule.rhs {
                if let Symbol::Terminal(ref t) = *symbol {
                    terminals.insert(t.clone());
                }
            }
        }
        terminals
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for Symbol<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Variable(ref x) => write!(f, "Nt \"{}\"", x),
            Symbol::Terminal(ref x) => write!(f, "T \"{}\"", x),
        }
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for CfgRule<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = "".to_string();

        let mut iter = self.rhs.iter().peekable();

        buffer.push_str("[");
        while let Some(symbol) = iter.next() {
            buffer.push_str(format!("{}", symbol).as_str());
            if iter.peek().is_some() {
                buffer.push_str(", ");
            }
        }
        buffer.push_str("]");

        write!(f, "\"{}\" → {}", self.head, buffer)
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for Cfg<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = String::new();

        buffer.push_str(format!("initial: [\"{}\"]\n\n", self.initial).as_str());
        for rule in &self.rules {
            buffer.push_str(format!("{}\n", rule).as_str());
        }

        write!(f, "{}", buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn example_grammar() -> Cfg<char, char> {
        Cfg::from_str(
            "initial: [S]\n\n\
             S → [Nt T, Nt U]\n\
             T → [T 0, Nt T]\n\
             T → [T 0]\n\
             U → [Nt U, T 1]\n\
             U → []",
        ).unwrap()
    }

    #[test]
    fn test_variables_and_terminals() {
        let g = example_grammar();

        assert_eq!(
            vec!['S', 'T', 'U'].into_iter().collect::<BTreeSet<_>>(),
            g.variables()
        );
        assert_eq!(
            vec!['0', '1'].into_iter().collect::<BTreeSet<_>>(),
            g.terminals()
        );
    }

    #[test]
    fn test_variables_contain_the_initial() {
        let g: Cfg<char, char> = Cfg {
            initial: 'S',
            rules: Vec::new(),
        };

        assert_eq!(vec!['S'].into_iter().collect::<BTreeSet<_>>(), g.variables());
        assert_eq!(BTreeSet::new(), g.terminals());
    }

    #[test]
    fn test_display_is_parseable() {
        let g = example_grammar();

        assert_eq!(g, format!("{}", g).parse().unwrap());
    }

    #[test]
    fn test_display_formatting() {
        let rule: CfgRule<char, char> = CfgRule {
            head: 'S',
            rhs: vec![Symbol::Terminal('a'), Symbol::Variable('S')],
        };

        assert_eq!("\"S\" → [T \"a\", Nt \"S\"]", format!("{}", rule));
    }
}
