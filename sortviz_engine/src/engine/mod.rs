//! The algorithmic core: a [`Sorter`] per strategy, a [`SortEngine`] that
//! owns the sequence being sorted, and a [`Steps`] handle through which each
//! primitive mutation (a swap, or a merge write-back) is reported to an
//! optional observer. The observer is the only seam to the outside world;
//! none of the sorters know anything about rendering.
//!
//! # Example
//!
//! ```
//! use sortviz_engine::engine::{BubbleSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```
//!
//! Or, with an engine and an observer watching every step:
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use sortviz_engine::engine::SortEngine;
//!
//! let frames = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&frames);
//!
//! let mut engine = SortEngine::new(vec![3, 1, 2])
//!     .observe(move |_sequence| counter.set(counter.get() + 1));
//! engine.bubble_sort();
//!
//! assert_eq!(engine.sequence(), &[1, 2, 3]);
//! assert!(frames.get() > 0);
//! ```

pub mod benchmark;
mod sorters;
pub mod tree;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::shell_sorter::ShellSorter;
pub use sorters::tim_sorter::{calc_run_size, TimSorter, MIN_MERGE};
pub use sorters::tree_sorter::TreeSorter;

use rand::Rng;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// [`sort_stepped`](Sorter::sort_stepped) does the work and reports every
/// primitive mutation through the given [`Steps`] handle;
/// [`sort`](Sorter::sort) is the silent convenience wrapper.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort_stepped(&self, slice: &mut [T], steps: &mut Steps<'_, T>);

    fn sort(&self, slice: &mut [T]) {
        self.sort_stepped(slice, &mut Steps::none());
    }
}

/// Handle through which a sorter reports each primitive mutation.
///
/// Wraps an optional callback that receives a snapshot of the full sequence
/// after every swap or merge write-back. The callback gets a shared slice,
/// so it can draw a frame or block on a delay but never mutate the sequence
/// it is watching.
pub struct Steps<'a, T> {
    on_step: Option<&'a mut dyn FnMut(&[T])>,
}

impl<'a, T> Steps<'a, T> {
    /// A handle that swallows every step.
    pub fn none() -> Self {
        Self { on_step: None }
    }

    /// A handle forwarding every step to `on_step`.
    pub fn observe(on_step: &'a mut dyn FnMut(&[T])) -> Self {
        Self {
            on_step: Some(on_step),
        }
    }

    /// Report the current state of the sequence. No-op without an observer.
    #[inline]
    pub fn emit(&mut self, sequence: &[T]) {
        if let Some(on_step) = self.on_step.as_mut() {
            on_step(sequence);
        }
    }
}

impl<T> Default for Steps<'_, T> {
    fn default() -> Self {
        Self::none()
    }
}

/// Owns a sequence of values and sorts it in place with the strategy of the
/// caller's choosing, reporting each step to the observer if one was
/// installed with [`observe`](SortEngine::observe).
///
/// Every operation is total: any finite sequence (empty, singleton,
/// duplicates, already sorted, reversed) ends up a non-decreasing
/// permutation of its input.
///
/// # Example
///
/// ```
/// use sortviz_engine::engine::SortEngine;
///
/// let mut engine = SortEngine::new(vec![5, 3, 8, 1, 9, 2]);
/// engine.merge_sort();
/// assert_eq!(engine.sequence(), &[1, 2, 3, 5, 8, 9]);
/// ```
pub struct SortEngine<'obs, T> {
    sequence: Vec<T>,
    observer: Option<Box<dyn FnMut(&[T]) + 'obs>>,
}

impl<'obs, T> SortEngine<'obs, T>
where
    T: Ord,
{
    pub fn new(sequence: Vec<T>) -> Self {
        Self {
            sequence,
            observer: None,
        }
    }

    /// Install a step observer. It is invoked with the full sequence after
    /// every primitive mutation of whichever sort runs next.
    pub fn observe(mut self, on_step: impl FnMut(&[T]) + 'obs) -> Self {
        self.observer = Some(Box::new(on_step));
        self
    }

    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    pub fn into_sequence(self) -> Vec<T> {
        self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sort the owned sequence with any [`Sorter`].
    pub fn sort_with<S>(&mut self, sorter: S)
    where
        S: Sorter<T>,
    {
        let Self { sequence, observer } = self;
        match observer.as_mut() {
            Some(on_step) => {
                let mut forward = |snapshot: &[T]| on_step(snapshot);
                sorter.sort_stepped(sequence, &mut Steps::observe(&mut forward));
            }
            None => sorter.sort_stepped(sequence, &mut Steps::none()),
        }
    }

    pub fn bubble_sort(&mut self) {
        self.sort_with(BubbleSorter);
    }

    pub fn insertion_sort(&mut self) {
        self.sort_with(InsertionSorter { smart: false });
    }

    pub fn selection_sort(&mut self) {
        self.sort_with(SelectionSorter);
    }

    pub fn shell_sort(&mut self) {
        self.sort_with(ShellSorter);
    }

    pub fn quick_sort(&mut self) {
        self.sort_with(QuickSorter);
    }
}

impl<'obs, T> SortEngine<'obs, T>
where
    T: Ord + Clone,
{
    pub fn merge_sort(&mut self) {
        self.sort_with(MergeSorter);
    }

    pub fn tim_sort(&mut self) {
        self.sort_with(TimSorter::default());
    }

    pub fn tree_sort(&mut self) {
        self.sort_with(TreeSorter);
    }
}

impl<'obs> SortEngine<'obs, u32> {
    /// An engine over `count` random values in `1..=max_value`, like a fresh
    /// window full of unsorted bars.
    pub fn random(count: usize, max_value: u32) -> Self {
        let mut rng = rand::thread_rng();
        let sequence = (0..count).map(|_| rng.gen_range(1..=max_value)).collect();
        Self::new(sequence)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn all_sorters() -> Vec<(&'static str, Box<dyn Sorter<i32>>)> {
        vec![
            ("bubble", Box::new(BubbleSorter)),
            ("insertion", Box::new(InsertionSorter { smart: false })),
            ("insertion (smart)", Box::new(InsertionSorter { smart: true })),
            ("selection", Box::new(SelectionSorter)),
            ("shell", Box::new(ShellSorter)),
            ("merge", Box::new(MergeSorter)),
            ("quick", Box::new(QuickSorter)),
            ("tim", Box::new(TimSorter::default())),
            ("tree", Box::new(TreeSorter)),
        ]
    }

    #[test]
    fn every_sorter_sorts_the_reference_sequence() {
        for (name, sorter) in all_sorters() {
            let mut slice = vec![5, 3, 8, 1, 9, 2];
            sorter.sort(&mut slice);
            assert_eq!(slice, vec![1, 2, 3, 5, 8, 9], "{name}");
        }
    }

    #[test]
    fn every_sorter_handles_empty_and_singleton() {
        for (name, sorter) in all_sorters() {
            let mut empty: Vec<i32> = vec![];
            sorter.sort(&mut empty);
            assert!(empty.is_empty(), "{name}");

            let mut one = vec![42];
            sorter.sort(&mut one);
            assert_eq!(one, vec![42], "{name}");
        }
    }

    #[test]
    fn every_sorter_preserves_the_multiset() {
        for (name, sorter) in all_sorters() {
            let input = vec![9, -3, 7, 7, 0, -3, 12, 1];
            let mut slice = input.clone();
            sorter.sort(&mut slice);

            let mut expected = input;
            expected.sort();
            assert_eq!(slice, expected, "{name}");
        }
    }

    #[test]
    fn all_equal_values_are_left_untouched() {
        for (name, sorter) in all_sorters() {
            let mut sevens = vec![7, 7, 7, 7];
            sorter.sort(&mut sevens);
            assert_eq!(sevens, vec![7, 7, 7, 7], "{name}");
        }
    }

    #[test]
    fn engine_reads_back_sorted_sequence() {
        let mut engine = SortEngine::new(vec![5, 3, 8, 1, 9, 2]);
        engine.tim_sort();
        assert_eq!(engine.sequence(), &[1, 2, 3, 5, 8, 9]);
        assert_eq!(engine.into_sequence(), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn observer_sees_every_swap() {
        let frames = Rc::new(Cell::new(0));
        let counter = Rc::clone(&frames);

        let mut engine =
            SortEngine::new(vec![2, 1]).observe(move |_| counter.set(counter.get() + 1));
        engine.bubble_sort();

        assert_eq!(engine.sequence(), &[1, 2]);
        assert_eq!(frames.get(), 1);
    }

    #[test]
    fn observer_snapshots_preserve_the_multiset() {
        let ok = Rc::new(Cell::new(true));
        let watcher = Rc::clone(&ok);

        let mut engine = SortEngine::new(vec![4, 1, 3, 2]).observe(move |snapshot: &[i32]| {
            let mut values = snapshot.to_vec();
            values.sort();
            if values != [1, 2, 3, 4] {
                watcher.set(false);
            }
        });
        engine.quick_sort();

        assert!(ok.get());
        assert_eq!(engine.sequence(), &[1, 2, 3, 4]);
    }

    #[test]
    fn comparison_sorts_never_swap_equal_values() {
        for sorter in [BubbleSorter.sort_boxed(), InsertionSorter { smart: false }.sort_boxed()] {
            let frames = Rc::new(Cell::new(0));
            let counter = Rc::clone(&frames);

            let mut sevens = vec![7, 7, 7, 7];
            let mut on_step = move |_: &[i32]| counter.set(counter.get() + 1);
            sorter.sort_stepped(&mut sevens, &mut Steps::observe(&mut on_step));

            assert_eq!(sevens, vec![7, 7, 7, 7]);
            assert_eq!(frames.get(), 0);
        }
    }

    #[test]
    fn selection_emits_once_per_outer_iteration() {
        let frames = Rc::new(Cell::new(0));
        let counter = Rc::clone(&frames);

        let mut engine =
            SortEngine::new(vec![7, 7, 7, 7]).observe(move |_| counter.set(counter.get() + 1));
        engine.selection_sort();

        assert_eq!(engine.sequence(), &[7, 7, 7, 7]);
        assert_eq!(frames.get(), 3);
    }

    #[test]
    fn no_sorter_emits_for_trivial_inputs() {
        for (name, sorter) in all_sorters() {
            let frames = Rc::new(Cell::new(0));

            for input in [vec![], vec![1]] {
                let counter = Rc::clone(&frames);
                let mut slice = input;
                let mut on_step = move |_: &[i32]| counter.set(counter.get() + 1);
                sorter.sort_stepped(&mut slice, &mut Steps::observe(&mut on_step));
            }

            assert_eq!(frames.get(), 0, "{name}");
        }
    }

    #[test]
    fn random_engine_respects_bounds() {
        let engine = SortEngine::random(100, 40);
        assert_eq!(engine.len(), 100);
        assert!(engine.sequence().iter().all(|&v| (1..=40).contains(&v)));
    }

    // Small helper so the equal-values test can iterate unit-struct sorters
    // of different types.
    trait SortBoxed {
        fn sort_boxed(self) -> Box<dyn Sorter<i32>>;
    }

    impl<S> SortBoxed for S
    where
        S: Sorter<i32> + 'static,
    {
        fn sort_boxed(self) -> Box<dyn Sorter<i32>> {
            Box::new(self)
        }
    }
}
