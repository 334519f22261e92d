//! Draws the sequence owned by a [`SortEngine`] as a horizontal bar chart
//! in the terminal, one frame per reported step.
//!
//! This module is a consumer of the engine's observer seam, nothing more:
//! the sorters in [`crate::engine`] have no idea it exists, and anything
//! else implementing `FnMut(&[T])` could replace it.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};
use std::{cell::Cell, rc::Rc};

use colored::Colorize;

use crate::engine::SortEngine;
use crate::Algorithm;

const BAR_WIDTH: usize = 60;

/// Generate `count` random bars, run `algorithm` over them, and redraw the
/// whole chart after every reported step with a `delay` pause per frame.
/// Prints a one line summary once the bars are in order.
pub fn watch(algorithm: Algorithm, count: usize, max_value: u32, delay: Duration) {
    let max_value = max_value.max(1);

    let frames = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&frames);

    let mut engine = SortEngine::random(count, max_value).observe(move |sequence: &[u32]| {
        counter.set(counter.get() + 1);
        draw(sequence, max_value);
        sleep(delay);
    });

    draw(engine.sequence(), max_value);
    let started = Instant::now();

    match algorithm {
        Algorithm::Bubble => engine.bubble_sort(),
        Algorithm::Insertion => engine.insertion_sort(),
        Algorithm::Selection => engine.selection_sort(),
        Algorithm::Shell => engine.shell_sort(),
        Algorithm::Merge => engine.merge_sort(),
        Algorithm::Quick => engine.quick_sort(),
        Algorithm::Tim => engine.tim_sort(),
        Algorithm::Tree => engine.tree_sort(),
    }

    let elapsed = started.elapsed();
    draw(engine.sequence(), max_value);

    println!(
        "{} sorted {} bars in {} steps ({:?} with frame delays)",
        algorithm.label().bold().green(),
        engine.len().to_string().bold(),
        frames.get().to_string().bold(),
        elapsed
    );
}

// Clear the screen and reprint every bar, scaled to BAR_WIDTH columns.
fn draw(sequence: &[u32], max_value: u32) {
    let mut frame = String::from("\x1b[2J\x1b[H");

    for &value in sequence {
        let width = (value as usize * BAR_WIDTH / max_value as usize).max(1);
        frame.push_str(&format!(
            "{} {}\n",
            "\u{2587}".repeat(width).cyan(),
            value.to_string().dimmed()
        ));
    }

    print!("{frame}");
    io::stdout().flush().unwrap();
}
