use min_max_heap::MinMaxHeap;

use super::weighted::WeightedItem;

/// A heap that only holds a constant amount of items. It keeps the items
/// with the greatest priority; pushing onto a full heap evicts and returns
/// the least element.
#[derive(Clone)]
pub struct LimitedHeap<I, W>
where
    W: Ord,
{
    heap: MinMaxHeap<WeightedItem<I, W>>,
    capacity: usize,
}

impl<I, W: Ord> LimitedHeap<I, W> {
    pub fn with_capacity(capacity: usize) -> Self {
        LimitedHeap {
            heap: MinMaxHeap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, element: I, priority: W) -> Option<I> {
        if self.capacity > self.heap.len() {
            self.heap.push(WeightedItem(element, priority));
            None
        } else {
            Some(self.heap.push_pop_min(WeightedItem(element, priority)).0)
        }
    }

    pub fn pop(&mut self) -> Option<I> {
        self.heap.pop_max().map(|wi| wi.0)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<&I> {
        self.heap.peek_max().map(|wi| &wi.0)
    }
}

/// Consuming iterator over the elements of a `LimitedHeap`, priorities
/// stripped, in no particular order.
pub struct IntoIter<I, W>(min_max_heap::IntoIter<WeightedItem<I, W>>);

impl<I, W> Iterator for IntoIter<I, W> {
    type Item = I;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|wi| wi.0)
    }
}

impl<I, W> IntoIterator for LimitedHeap<I, W>
where
    W: Ord,
{
    type IntoIter = IntoIter<I, W>;
    type Item = I;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.heap.into_iter())
    }
}

pub mod weighted {
    use crate::agenda::weighted::Weighted;

    /// An adapter for `super::LimitedHeap` that uses the priority given by
    /// the items' implementation of `Weighted`.
    pub struct LimitedHeap<I: Weighted>(super::LimitedHeap<I, I::Weight>)
    where
        I::Weight: Ord;

    impl<I: Weighted> LimitedHeap<I>
    where
        I::Weight: Ord,
    {
        pub fn with_capacity(capacity: usize) -> Self {
            LimitedHeap(super::LimitedHeap::with_capacity(capacity))
        }

        pub fn push(&mut self, element: I) -> Option<I> {
            let priority = element.get_weight();
            self.0.push(element, priority)
        }

        pub fn pop(&mut self) -> Option<I> {
            self.0.pop()
        }

        pub fn clear(&mut self) {
            self.0.clear()
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn peek(&self) -> Option<&I> {
            self.0.peek()
        }
    }

    impl<I: Weighted> IntoIterator for LimitedHeap<I>
    where
        I::Weight: Ord,
    {
        type IntoIter = super::IntoIter<I, I::Weight>;
        type Item = I;
        fn into_iter(self) -> Self::IntoIter {
            self.0.into_iter()
        }
    }
}
