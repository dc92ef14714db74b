use std::cmp::Ordering;

/// A trait that gives an interface for a priority assignment.
pub trait Weighted {
    type Weight;

    fn get_weight(&self) -> Self::Weight;
}

impl Weighted for usize {
    type Weight = usize;
    fn get_weight(&self) -> Self::Weight {
        *self
    }
}

/// Pairs an element with its priority. The comparison traits only consider
/// the priority type `W`, so the element type `I` needs no ordering of its
/// own.
#[derive(Clone)]
pub struct WeightedItem<I, W>(pub I, pub W);

impl<I, W: PartialEq> PartialEq for WeightedItem<I, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<I, W: Eq> Eq for WeightedItem<I, W> {}

impl<I, W: PartialOrd> PartialOrd for WeightedItem<I, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<I, W: Ord> Ord for WeightedItem<I, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

impl<I, W> Weighted for WeightedItem<I, W>
where
    W: Clone,
{
    type Weight = W;
    fn get_weight(&self) -> Self::Weight {
        self.1.clone()
    }
}
