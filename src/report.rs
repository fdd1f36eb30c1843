//! Console rendering of a finished or interrupted run.

use crate::engines::generation::history::FitnessHistory;

const LABEL_WIDTH: usize = 10;

/// Closing summary: generation count, best fitness and its genotype.
pub fn conclude(history: &FitnessHistory) -> String {
    match history.best() {
        None => "No solutions has been found yet.".to_string(),
        Some(record) => format!(
            "{}! {:.4}\n{}",
            history.len(),
            record.best_fitness,
            record.best.genotype()
        ),
    }
}

/// ASCII chart of best (`*`) and average (`.`) fitness per generation.
///
/// Long histories are sampled down to `width` columns. `#` marks cells
/// where both series land.
pub fn render_plot(history: &FitnessHistory, width: usize, height: usize) -> String {
    let best = history.best_fitness_series();
    let average = history.average_fitness_series();
    if best.is_empty() || width == 0 || height == 0 {
        return "No fitness history to plot.".to_string();
    }

    let (lo, hi) = best
        .iter()
        .chain(&average)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return "No finite fitness values to plot.".to_string();
    }
    let hi = if hi - lo < f64::EPSILON { lo + 1.0 } else { hi };

    let n = best.len();
    let columns = width.min(n);
    let row_of = |v: f64| ((v - lo) / (hi - lo) * (height - 1) as f64).round() as usize;

    let mut grid = vec![vec![' '; columns]; height];
    for column in 0..columns {
        let sample = if columns == 1 {
            n - 1
        } else {
            column * (n - 1) / (columns - 1)
        };

        if average[sample].is_finite() {
            grid[row_of(average[sample])][column] = '.';
        }
        if best[sample].is_finite() {
            let cell = &mut grid[row_of(best[sample])][column];
            *cell = if *cell == '.' { '#' } else { '*' };
        }
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate().rev() {
        let label = if row == height - 1 {
            format!("{:>w$.4}", hi, w = LABEL_WIDTH)
        } else if row == 0 {
            format!("{:>w$.4}", lo, w = LABEL_WIDTH)
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(cells.iter());
        out.push('\n');
    }
    out.push_str(&" ".repeat(LABEL_WIDTH));
    out.push_str(" +");
    out.push_str(&"-".repeat(columns));
    out.push('\n');
    out.push_str(&format!(
        "{} * best  . average  generations 0..={}",
        " ".repeat(LABEL_WIDTH),
        history.latest().map_or(0, |r| r.generation)
    ));

    out
}
