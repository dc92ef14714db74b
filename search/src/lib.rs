pub mod agenda;
pub mod search;

pub use crate::agenda::{Agenda, LimitedHeap};
pub use crate::search::Search;
