extern crate bincode;
use clap::{App, Arg, ArgMatches, SubCommand};
use flate2::read;
use std::fs::File;
use std::io::{stdin, Read};

use chomskify::grammars::cfg::Cfg;
use chomskify::normalisation::{normalise, Normalised};
use chomskify::recognisable::CykRecogniser;

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("recognise")
        .about("Decides with the CYK algorithm which lines of stdin the grammar accepts")
        .arg(
            Arg::with_name("grammar")
                .help("grammar file to use")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("binary")
                .help("treat the grammar file as gzipped bincode, as written by normalise --binary")
                .short("b")
                .long("binary"),
        )
}

pub fn handle_sub_matches(params: &ArgMatches) {
    let normalised: Normalised<String, char> = if params.is_present("binary") {
        let grammar_file =
            File::open(params.value_of("grammar").unwrap()).expect("Could not open grammar file.");
        bincode::deserialize_from(&mut read::GzDecoder::new(grammar_file))
            .expect("Could not deserialise grammar file.")
    } else {
        let mut grammar_string = String::new();
        File::open(params.value_of("grammar").unwrap())
            .expect("Could not open grammar file.")
            .read_to_string(&mut grammar_string)
            .expect("Could not read grammar file.");
        let grammar: Cfg<String, char> =
            grammar_string.parse().expect("Could not parse grammar file.");
        normalise(&grammar).expect("Could not normalise the grammar.")
    };

    if normalised.grammar.rules.is_empty() && !normalised.accepts_empty {
        eprintln!("% the grammar does not accept any words");
    }

    let recogniser = CykRecogniser::new(&normalised.grammar);

    let mut corpus = String::new();
    let _ = stdin().read_to_string(&mut corpus);

    for line in corpus.lines() {
        let word: Vec<char> = line.chars().collect();
        let accepted = if word.is_empty() {
            normalised.accepts_empty
        } else {
            recogniser.recognise(&word)
        };
        println!(
            "\"{}\"\t{}",
            line,
            if accepted { "accepted" } else { "rejected" }
        );
    }
}
