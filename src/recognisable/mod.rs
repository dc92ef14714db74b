pub mod cyk;
pub mod derivation;

pub use self::cyk::CykRecogniser;
pub use self::derivation::DerivationSearch;

/// Answer of a bounded recognition procedure.  `Rejected` means the word is
/// provably not in the language, while `StepBoundExceeded` means the search
/// gave up before finding an answer.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Verdict {
    Accepted,
    Rejected,
    StepBoundExceeded,
}

impl Verdict {
    /// Collapses the verdict into a yes/no answer; a verdict that exceeded
    /// the step bound counts as a no.
    pub fn is_accepted(&self) -> bool {
        *self == Verdict::Accepted
    }
}
