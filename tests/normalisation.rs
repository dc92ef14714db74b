extern crate chomskify;

use std::fs::File;
use std::io::Read;

use chomskify::grammars::cfg::Cfg;
use chomskify::normalisation::{lambda, normalise, unit, useless, CnfVariable, NormalisationError};

fn cfg_from_file(path: &str) -> Cfg<String, char> {
    let mut grammar_file = File::open(path).unwrap();
    let mut grammar_string = String::new();
    let _ = grammar_file.read_to_string(&mut grammar_string);
    grammar_string.parse().unwrap()
}

#[test]
fn test_lambda_elimination_correctness() {
    let grammar = cfg_from_file("demos/example2.cfg");

    let nullable = lambda::closure(&grammar);
    assert_eq!(
        vec!["A".to_string()],
        nullable.iter().cloned().collect::<Vec<_>>()
    );

    let control_grammar: Cfg<String, char> = "initial: [S]\n\n\
                                              S → [Nt A, Nt B]\n\
                                              S → [Nt B]\n\
                                              S → [Nt C]\n\
                                              A → [T a, Nt A]\n\
                                              A → [T a]\n\
                                              B → [T b]\n\
                                              C → [T c, T c]\n\
                                              D → [T d]"
        .parse()
        .unwrap();

    assert_eq!(control_grammar, lambda::eliminate(&grammar, &nullable));
}

#[test]
fn test_unit_elimination_correctness() {
    let grammar = cfg_from_file("demos/example2.cfg");
    let grammar = lambda::eliminate(&grammar, &lambda::closure(&grammar));

    let control_grammar: Cfg<String, char> = "initial: [S]\n\n\
                                              A → [T a]\n\
                                              A → [T a, Nt A]\n\
                                              B → [T b]\n\
                                              C → [T c, T c]\n\
                                              D → [T d]\n\
                                              S → [Nt A, Nt B]\n\
                                              S → [T b]\n\
                                              S → [T c, T c]"
        .parse()
        .unwrap();

    assert_eq!(control_grammar, unit::eliminate(&grammar));
}

#[test]
fn test_useless_elimination_correctness() {
    let grammar = cfg_from_file("demos/example2.cfg");
    let grammar = unit::eliminate(&lambda::eliminate(&grammar, &lambda::closure(&grammar)));

    let control_grammar: Cfg<String, char> = "initial: [S]\n\n\
                                              A → [T a]\n\
                                              A → [T a, Nt A]\n\
                                              B → [T b]\n\
                                              S → [Nt A, Nt B]\n\
                                              S → [T b]\n\
                                              S → [T c, T c]"
        .parse()
        .unwrap();

    assert_eq!(control_grammar, useless::eliminate(&grammar));
}

#[test]
fn test_elimination_pass_idempotence() {
    let grammar = cfg_from_file("demos/example2.cfg");

    let grammar = lambda::eliminate(&grammar, &lambda::closure(&grammar));
    assert_eq!(
        grammar,
        lambda::eliminate(&grammar, &lambda::closure(&grammar))
    );

    let grammar = unit::eliminate(&grammar);
    assert_eq!(grammar, unit::eliminate(&grammar));

    let grammar = useless::eliminate(&grammar);
    assert_eq!(grammar, useless::eliminate(&grammar));
}

#[test]
fn test_normalise_correctness() {
    let normalised = normalise(&cfg_from_file("demos/example2.cfg")).unwrap();

    assert_eq!(CnfVariable::Plain("S".to_string()), normalised.grammar.initial);
    assert!(!normalised.accepts_empty);

    // six useful rules, plus one wrapper each for the terminals a and c
    assert_eq!(8, normalised.grammar.rules.len());
}

#[test]
fn test_normalise_empty_word_language() {
    let grammar: Cfg<String, char> = "initial: [S]\n\n\
                                      S → [Nt A]\n\
                                      A → []"
        .parse()
        .unwrap();
    let normalised = normalise(&grammar).unwrap();

    assert!(normalised.accepts_empty);
    assert!(normalised.grammar.rules.is_empty());
}

#[test]
fn test_normalisation_error_messages() {
    assert_eq!(
        "illegal grammar: the rule of \"U\" has an empty right-hand side",
        NormalisationError::EmptyRhs("U".to_string()).to_string()
    );
    assert_eq!(
        "illegal grammar: \"S\" → [Nt \"T\"] is a unit rule",
        NormalisationError::UnitRhs("S".to_string(), "T".to_string()).to_string()
    );
}
