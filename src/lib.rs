#[macro_use]
extern crate nom;
#[macro_use]
extern crate serde_derive;

pub mod grammars;
pub mod normalisation;
pub mod recognisable;
pub mod util;
