//! This module provides data structures that hold elements during a search
//! and a unified interface to them in the `Agenda` trait.
//!
//! * Prioritised structures order elements max-first; like
//!   `std::collections::BinaryHeap`, popping returns the element with the
//!   greatest priority.
//!
//! * Elements and priorities are kept separate in all interfaces, so the
//!   elements themselves do not need to implement `Ord`.

pub mod limited_heap;
pub mod weighted;

pub use self::limited_heap::LimitedHeap;
use self::weighted::Weighted;

use std::collections::VecDeque;

/// Generic interface to a data structure that can hold some amount of
/// elements of type `Agenda::Item`.
pub trait Agenda {
    type Item;
    fn push(&mut self, element: Self::Item);
    fn pop(&mut self) -> Option<Self::Item>;
    fn peek(&self) -> Option<&Self::Item>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn extend<I: IntoIterator<Item = Self::Item>>(&mut self, elements: I) {
        for element in elements {
            self.push(element);
        }
    }
}

/// Last-in-first-out; yields a depth-first exploration order.
impl<I> Agenda for Vec<I> {
    type Item = I;

    fn push(&mut self, element: Self::Item) {
        self.push(element);
    }

    fn pop(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn peek(&self) -> Option<&Self::Item> {
        self.last()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// First-in-first-out; yields a breadth-first exploration order.
impl<I> Agenda for VecDeque<I> {
    type Item = I;

    fn push(&mut self, element: Self::Item) {
        self.push_front(element);
    }

    fn pop(&mut self) -> Option<Self::Item> {
        self.pop_back()
    }

    fn peek(&self) -> Option<&Self::Item> {
        self.back()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<I: Weighted> Agenda for limited_heap::weighted::LimitedHeap<I>
where
    I::Weight: Ord,
{
    type Item = I;

    fn push(&mut self, element: Self::Item) {
        self.push(element);
    }

    fn pop(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn peek(&self) -> Option<&Self::Item> {
        self.peek()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
