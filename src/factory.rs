use super::constants::NO_CAPACITY;
use super::types::Sequence;
use super::utils::growth_capacity;

pub fn new_seq<T>() -> Sequence<T> {
    Vec::with_capacity(NO_CAPACITY)
}

pub fn seq_from<T: Clone>(elements: &[T]) -> Sequence<T> {
    let mut seq = Vec::with_capacity(growth_capacity(elements.len()));
    seq.extend_from_slice(elements);
    seq
}

// Pre-sizes from the size hint's lower bound.
pub fn seq_from_iter<I: IntoIterator>(elements: I) -> Sequence<I::Item> {
    let elements = elements.into_iter();
    let (lower, _) = elements.size_hint();

    let mut seq = Vec::with_capacity(growth_capacity(lower));
    seq.extend(elements);
    seq
}

pub fn presized_seq<T>(capacity: usize) -> Sequence<T> {
    Vec::with_capacity(capacity)
}

pub fn expected_size_seq<T>(expected: usize) -> Sequence<T> {
    Vec::with_capacity(growth_capacity(expected))
}
