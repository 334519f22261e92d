//! Times every sorter against random sequences of increasing length and
//! prints one comparison/wall-clock table per size.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Duration, time::Instant};

use prettytable::{row, Table};

use super::{
    BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, ShellSorter, Sorter,
    TimSorter, TreeSorter,
};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

// Above this the quadratic sorts stop being entertainment and start being a
// coffee break.
const QUADRATIC_CUTOFF: usize = TEN_THOUSAND;

/// Wraps an element so that every comparison made against it is counted.
/// The `elem` is what gets compared; the counter is shared by the whole
/// sequence through an `Rc<Cell>`.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem.cmp(&other.elem)
    }
}

/// `slice::sort` / `slice::sort_unstable` behind the [`Sorter`] trait, as
/// the baseline everything else gets measured against.
pub struct StdSorter {
    pub stable: bool,
}

impl<T> Sorter<T> for StdSorter
where
    T: Ord,
{
    fn sort_stepped(&self, slice: &mut [T], _steps: &mut super::Steps<'_, T>) {
        if self.stable {
            slice.sort();
        } else {
            slice.sort_unstable();
        }
    }
}

// Each sorter gets its own fresh copy of the master sequence; reusing one
// buffer would hand every sorter after the first an already sorted input.
fn run_bench<T, S>(
    sorter: &S,
    master: &[SortEvaluator<T>],
    comparisons: &Rc<Cell<usize>>,
) -> (usize, Duration)
where
    T: Ord + Eq + Clone,
    S: Sorter<SortEvaluator<T>> + ?Sized,
{
    let mut values = master.to_vec();
    comparisons.set(0);

    let now = Instant::now();
    sorter.sort(&mut values);
    let elapsed = now.elapsed();

    (comparisons.get(), elapsed)
}

pub fn run_all() {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));

    for &n in &[ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND] {
        let mut master = Vec::with_capacity(n);
        for _ in 0..n {
            master.push(SortEvaluator::new(random.gen::<i32>(), counter.clone()));
        }

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        let pb = ProgressBar::new(11);
        pb.set_style(
            ProgressStyle::with_template(
                "Benchmarking -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len})",
            )
            .unwrap(),
        );

        let mut bench =
            |label: &str, sorter: &dyn Sorter<SortEvaluator<i32>>, quadratic: bool| {
                if quadratic && n > QUADRATIC_CUTOFF {
                    table.add_row(row![label, "Skipped".red(), "Too Slow To Watch".red()]);
                } else {
                    let (comparisons, elapsed) = run_bench(sorter, &master, &counter);
                    table.add_row(row![label, comparisons.to_string(), format!("{elapsed:?}")]);
                }
                pb.inc(1);
            };

        bench("Bubble Sort", &BubbleSorter, true);
        bench("Insertion Sort", &InsertionSorter { smart: false }, true);
        bench("Insertion Sort (smart)", &InsertionSorter { smart: true }, true);
        bench("Selection Sort", &SelectionSorter, true);
        bench("Shell Sort", &ShellSorter, false);
        bench("Merge Sort", &MergeSorter, false);
        bench("Quick Sort", &QuickSorter, false);
        bench("Tim Sort", &TimSorter::default(), false);
        bench("Tree Sort", &TreeSorter, false);
        bench("Std Sort (stable)", &StdSorter { stable: true }, false);
        bench("Std Sort (unstable)", &StdSorter { stable: false }, false);

        pb.finish_and_clear();
        table.printstd();
        println!();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn evaluator_counts_comparisons() {
        let counter = Rc::new(Cell::new(0));
        let mut values: Vec<SortEvaluator<i32>> = [3, 1, 2]
            .into_iter()
            .map(|v| SortEvaluator::new(v, counter.clone()))
            .collect();

        counter.set(0);
        QuickSorter.sort(&mut values);

        assert!(counter.get() > 0);
        let sorted: Vec<i32> = values.into_iter().map(|e| e.elem).collect();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn fresh_copy_per_run() {
        let counter = Rc::new(Cell::new(0));
        let master: Vec<SortEvaluator<i32>> = [5, 4, 3, 2, 1]
            .into_iter()
            .map(|v| SortEvaluator::new(v, counter.clone()))
            .collect();

        let (first, _) = run_bench(&BubbleSorter, &master, &counter);
        let (second, _) = run_bench(&BubbleSorter, &master, &counter);

        // The master stays unsorted, so both runs do identical work.
        assert_eq!(first, second);
        let original: Vec<i32> = master.into_iter().map(|e| e.elem).collect();
        assert_eq!(original, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn std_sorter_sorts() {
        for stable in [true, false] {
            let mut slice = vec![5, 3, 8, 1, 9, 2];
            StdSorter { stable }.sort(&mut slice);
            assert_eq!(slice, vec![1, 2, 3, 5, 8, 9]);
        }
    }
}
