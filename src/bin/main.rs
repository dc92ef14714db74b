extern crate chomskify;
extern crate clap;
extern crate flate2;

use clap::App;

mod normalise;
mod parse;
mod recognise;

fn main() {
    let matches = App::new("chomskify")
        .version("0.1")
        .about("Chomsky normal form and recognition for context-free grammars")
        .subcommand(normalise::get_sub_command())
        .subcommand(recognise::get_sub_command())
        .subcommand(parse::get_sub_command())
        .get_matches();

    match matches.subcommand() {
        ("normalise", Some(normalise_matches)) => normalise::handle_sub_matches(normalise_matches),
        ("recognise", Some(recognise_matches)) => recognise::handle_sub_matches(recognise_matches),
        ("parse", Some(parse_matches)) => parse::handle_sub_matches(parse_matches),
        _ => (),
    }
}
