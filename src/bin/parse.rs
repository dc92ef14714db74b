use clap::{App, Arg, ArgMatches, SubCommand};
use std::fs::File;
use std::io::{stdin, Read};

use chomskify::grammars::cfg::Cfg;
use chomskify::recognisable::derivation::DEFAULT_STEP_BOUND;
use chomskify::recognisable::{DerivationSearch, Verdict};

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("parse")
        .about("Searches for derivations of the lines of stdin, directly on the given grammar")
        .arg(
            Arg::with_name("grammar")
                .help("grammar file to use")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("steps")
                .help("maximum number of derivations to expand per input line")
                .short("s")
                .long("steps")
                .value_name("steps")
                .required(false),
        )
        .arg(
            Arg::with_name("beam-width")
                .help("maximum number of unexpanded derivations to keep around")
                .short("b")
                .long("beam")
                .value_name("beam-width")
                .required(false),
        )
}

pub fn handle_sub_matches(params: &ArgMatches) {
    let mut grammar_string = String::new();
    File::open(params.value_of("grammar").unwrap())
        .expect("Could not open grammar file.")
        .read_to_string(&mut grammar_string)
        .expect("Could not read grammar file.");
    let grammar: Cfg<String, char> = grammar_string.parse().expect("Could not parse grammar file.");

    let step_bound = match params.value_of("steps") {
        Some(steps) => steps.parse().expect("The step bound must be a number."),
        None => DEFAULT_STEP_BOUND,
    };
    let searcher = DerivationSearch::new(&grammar).with_step_bound(step_bound);

    let mut corpus = String::new();
    let _ = stdin().read_to_string(&mut corpus);

    for line in corpus.lines() {
        let word: Vec<char> = line.chars().collect();
        let verdict = match params.value_of("beam-width") {
            Some(beam) => searcher
                .recognise_beam(&word, beam.parse().expect("The beam width must be a number.")),
            None => searcher.recognise(&word),
        };
        match verdict {
            Verdict::Accepted => println!("\"{}\"\taccepted", line),
            Verdict::Rejected => println!("\"{}\"\trejected", line),
            Verdict::StepBoundExceeded => {
                println!("\"{}\"\tdid not halt within {} steps", line, step_bound)
            }
        }
    }
}
