use std::cmp::Ordering;

/// Ascending order for any totally ordered key.
///
/// This is the canonical comparator; pass it wherever a routine asks for
/// `FnMut(&T, &T) -> Ordering`.
#[inline]
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Wraps a comparator and counts how many times it has been invoked.
///
/// ```ignore
/// let mut counter = CountingComparator::new(ascending::<i32>);
/// hybrid_sort(&mut data, 0..=last, 16, |a, b| counter.compare(a, b))?;
/// println!("{} comparisons", counter.count());
/// ```
#[derive(Clone, Debug)]
pub struct CountingComparator<F> {
    inner: F,
    count: u64,
}

impl<F> CountingComparator<F> {
    pub fn new(inner: F) -> Self {
        Self { inner, count: 0 }
    }

    #[inline]
    pub fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.count += 1;
        (self.inner)(a, b)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
