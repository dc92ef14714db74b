use nom::{anychar, is_space, ErrorKind, IResult};
use std::fmt::Debug;
use std::str::{from_utf8, FromStr};

/// Parses a token (i.e. a terminal symbol or a nonterminal symbol).
/// A *token* can be of one of the following two forms:
///
/// * It is a string containing neither of the symbols `'"'`, `' '`, `'-'`, `'→'`, `','`, `';'`, `')'`, `']'`.
/// * It is delimited by the symbol `'"'` on both sides and each occurrence of `'\\'` or `'"'` inside the delimiters is escaped.
pub fn parse_token<A>(input: &[u8]) -> IResult<&[u8], A>
    where A: FromStr,
          A::Err: Debug,
{
    named!(
        parse_token_s<&str>,
        map_res!(
            alt!(
                delimited!(
                    char!('\"'),
                    escaped!(is_not!("\\\""), '\\', anychar),
                    char!('\"')
                ) |
                is_not!(" \"-→,;)]")
            ),
            from_utf8
        )
    );

    match parse_token_s(input) {
        IResult::Done(rest, token_s) => match token_s.parse() {
            Ok(token) => IResult::Done(rest, token),
            Err(_) => IResult::Error(nom::Err::Code(ErrorKind::MapRes)),
        },
        IResult::Error(e) => IResult::Error(e),
        IResult::Incomplete(needed) => IResult::Incomplete(needed),
    }
}

/// Parses the `input` into a `Vec<A>` given an `inner_parser` for type `A`, an `opening` delimiter, a `closing` delimiter, and a `separator`.
/// The `inner_parser` must not consume the `separator`s or the `closing` delimiter of the given `input`.
pub fn parse_vec<'a, A, P>(input: &'a [u8], inner_parser: P, opening: &str, closing: &str, separator: &str) -> IResult<&'a [u8], Vec<A>>
    where P: Fn(&'a [u8]) -> IResult<&'a [u8], A>
{
    do_parse!(
        input,
        tag!(opening) >>
            take_while!(is_space) >>
            result: many0!(
                do_parse!(
                    opt!(tag!(separator)) >>
                        take_while!(is_space) >>
                        the_token: inner_parser >>
                        take_while!(is_space) >>
                        (the_token)
                )
            ) >>
            tag!(closing) >>
            (result)
    )
}

/// Parses a declaration of the form `initial: [...]` into the list of declared tokens.
/// A well-formed grammar declares exactly one initial nonterminal;
/// `initial_rule_grammar_from_str` enforces this.
pub fn parse_initials<A>(input: &[u8]) -> IResult<&[u8], Vec<A>>
    where A: FromStr,
          A::Err: Debug,
{
    do_parse!(
        input,
        tag!("initial:") >>
            take_while!(is_space) >>
            result: call!(|x| parse_vec(x, parse_token, "[", "]", ",")) >>
            (result)
    )
}

/// Parses a grammar file into its initial nonterminal and its list of rules.
/// Lines that are empty or start with `'%'` are skipped, a line that starts with
/// `initial:` declares initial nonterminals, and every other line is handed to
/// the rule parser of `R`.  Exactly one initial nonterminal must be declared.
pub fn initial_rule_grammar_from_str<N, R>(s: &str) -> Result<(N, Vec<R>), String>
    where N: FromStr,
          N::Err: Debug,
          R: FromStr<Err = String>,
{
    let mut initials = Vec::new();
    let mut rules = Vec::new();

    for line in s.lines() {
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        if line.starts_with("initial:") {
            match parse_initials(line.as_bytes()) {
                IResult::Done(rest, mut parsed) if is_blank_or_comment(rest) => {
                    initials.append(&mut parsed)
                }
                _ => {
                    return Err(format!(
                        "Malformed declaration of the initial nonterminal: \'{}\'",
                        line
                    ))
                }
            }
        } else {
            rules.push(line.parse()?);
        }
    }

    if initials.len() == 1 {
        Ok((initials.remove(0), rules))
    } else {
        Err(format!(
            "Expected exactly one initial nonterminal, found {}",
            initials.len()
        ))
    }
}

fn is_blank_or_comment(rest: &[u8]) -> bool {
    match from_utf8(rest) {
        Ok(rest_s) => {
            let rest_s = rest_s.trim_start();
            rest_s.is_empty() || rest_s.starts_with('%')
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_legal_input() {
        let legal_inputs = vec![
            ("abcxyz", "", String::from("abcxyz")),
            ("\"abc\"xyz", "xyz", String::from("abc")),
            ("\"a\\\\b\\\"c\"xyz", "xyz", String::from("a\\\\b\\\"c")),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_token::<String>(legal_input.as_bytes()).unwrap()
            );
        }
    }

    #[test]
    fn test_parse_token_illegal_input() {
        let illegal_inputs = vec![
            " xyz",
            "-xyz",
            "→xyz",
            ",xyz",
            ";xyz",
            ")xyz",
            "]xyz",
            " \"a\"",
        ];

        for illegal_input in illegal_inputs {
            match parse_token::<String>(illegal_input.as_bytes()) {
                IResult::Done(_, _) | IResult::Incomplete(_) =>
                    panic!("Was able to parse the illegal input \'{}\'", illegal_input),
                IResult::Error(_) => (),
            }
        }

        let illegal_inputs = vec![
            "a",
            "\"a\"",
        ];

        for illegal_input in illegal_inputs {
            match parse_token::<u8>(illegal_input.as_bytes()) {
                IResult::Done(_, _) | IResult::Incomplete(_) =>
                    panic!("Was able to parse the illegal input \'{}\'", illegal_input),
                IResult::Error(_) => (),
            }
        }
    }

    #[test]
    fn test_parse_token_incomplete_input() {
        let incomplete_inputs = vec![
            "\"a",
        ];

        for incomplete_input in incomplete_inputs {
            match parse_token::<String>(incomplete_input.as_bytes()) {
                IResult::Done(_, _) | IResult::Error(_) =>
                    panic!("The input was not handled as incomplete: \'{}\'", incomplete_input),
                IResult::Incomplete(_) => (),
            }
        }
    }

    #[test]
    fn test_parse_vec_legal_input() {
        let legal_inputs = vec![
            ("[]xyz", "xyz", vec![]),
            ("[\"a\",\"bc\",\"d\"]xyz", "xyz",
                vec![String::from("a"), String::from("bc"), String::from("d")]),
            ("[  \"a\", \"b\" ,\"c\"]xyz", "xyz",
                vec![String::from("a"), String::from("b"), String::from("c")]),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_vec(legal_input.as_bytes(), parse_token, "[", "]", ",").unwrap()
            );
        }
    }

    #[test]
    fn test_parse_vec_illegal_input() {
        let illegal_inputs = vec![
            "(\"a\")xyz",
            "[\"a\"]xyz",
            "[\"a\",\"b\";\"c\")xyz",
            " []xyz",
        ];

        for illegal_input in illegal_inputs {
            match parse_vec::<String, _>(illegal_input.as_bytes(), parse_token, "[", ")", ",") {
                IResult::Done(_, _) | IResult::Incomplete(_) =>
                    panic!("Was able to parse the illegal input \'{}\'", illegal_input),
                IResult::Error(_) => (),
            }
        }
    }

    #[test]
    fn test_parse_initials_legal_input() {
        let legal_inputs = vec![
            ("initial: [\"a\"]xyz", "xyz", vec![String::from("a")]),
            ("initial:  []xyz", "xyz", vec![]),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_initials(legal_input.as_bytes()).unwrap()
            );
        }
    }

    #[test]
    fn test_parse_initials_illegal_input() {
        let illegal_inputs = vec![
            "initials: []xyz",
            " initial: []xyz",
        ];

        for illegal_input in illegal_inputs {
            match parse_initials::<String>(illegal_input.as_bytes()) {
                IResult::Done(_, _) | IResult::Incomplete(_) =>
                    panic!("Was able to parse the illegal input \'{}\'", illegal_input),
                IResult::Error(_) => (),
            }
        }
    }

    #[test]
    fn test_initial_rule_grammar_exactly_one_initial() {
        let no_initial = "A → [T a]";
        assert_eq!(
            Err(String::from("Expected exactly one initial nonterminal, found 0")),
            initial_rule_grammar_from_str::<char, DummyRule>(no_initial).map(|(n, _)| n)
        );

        let two_initials = "initial: [S]\ninitial: [A]\n\nA → [T a]";
        assert_eq!(
            Err(String::from("Expected exactly one initial nonterminal, found 2")),
            initial_rule_grammar_from_str::<char, DummyRule>(two_initials).map(|(n, _)| n)
        );

        let one_initial = "% comment\ninitial: [S] % another comment\n\nA → [T a]";
        assert_eq!(
            Ok('S'),
            initial_rule_grammar_from_str::<char, DummyRule>(one_initial).map(|(n, _)| n)
        );
    }

    #[test]
    fn test_initial_rule_grammar_malformed_initial() {
        let malformed = "initial: [S";
        assert_eq!(
            Err(format!(
                "Malformed declaration of the initial nonterminal: \'{}\'",
                malformed
            )),
            initial_rule_grammar_from_str::<char, DummyRule>(malformed).map(|(n, _)| n)
        );
    }

    #[derive(Debug, PartialEq)]
    struct DummyRule;

    impl FromStr for DummyRule {
        type Err = String;

        fn from_str(_: &str) -> Result<Self, Self::Err> {
            Ok(DummyRule)
        }
    }
}
