extern crate bincode;
use clap::{App, Arg, ArgMatches, SubCommand};
use flate2::{write, Compression};
use std::fs::File;
use std::io::{stdout, Read};

use chomskify::grammars::cfg::Cfg;
use chomskify::normalisation::{self, lambda, unit, useless};

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("normalise")
        .about("Rewrites the given context-free grammar into Chomsky normal form")
        .arg(
            Arg::with_name("grammar")
                .help("grammar file to use")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("until")
                .help("stop after the given pass and print the intermediate grammar")
                .short("u")
                .long("until")
                .value_name("pass")
                .possible_values(&["lambda", "unit", "useless", "chomsky"])
                .default_value("chomsky")
                .required(false),
        )
        .arg(
            Arg::with_name("binary")
                .help("print the normalised grammar as gzipped bincode instead of text")
                .short("b")
                .long("binary"),
        )
}

pub fn handle_sub_matches(params: &ArgMatches) {
    let mut grammar_string = String::new();
    File::open(params.value_of("grammar").unwrap())
        .expect("Could not open grammar file.")
        .read_to_string(&mut grammar_string)
        .expect("Could not read grammar file.");
    let grammar: Cfg<String, char> = grammar_string.parse().expect("Could not parse grammar file.");

    match params.value_of("until").unwrap() {
        "lambda" => {
            let nullable = lambda::closure(&grammar);
            print!("{}", lambda::eliminate(&grammar, &nullable));
        }
        "unit" => {
            let nullable = lambda::closure(&grammar);
            print!("{}", unit::eliminate(&lambda::eliminate(&grammar, &nullable)));
        }
        "useless" => {
            let nullable = lambda::closure(&grammar);
            print!(
                "{}",
                useless::eliminate(&unit::eliminate(&lambda::eliminate(&grammar, &nullable)))
            );
        }
        _ => {
            let normalised =
                normalisation::normalise(&grammar).expect("Could not normalise the grammar.");
            if params.is_present("binary") {
                bincode::serialize_into(
                    &mut write::GzEncoder::new(stdout(), Compression::best()),
                    &normalised,
                )
                .expect("Could not serialise the normalised grammar.");
            } else {
                print!("{}", normalised.grammar);
                if normalised.accepts_empty {
                    println!("% the grammar accepts the empty word");
                }
                if normalised.grammar.rules.is_empty() && !normalised.accepts_empty {
                    println!("% the grammar does not accept any words");
                }
            }
        }
    }
}
