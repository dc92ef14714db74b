pub mod cfg;
pub mod cnf;
