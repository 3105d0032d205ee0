//! Plain-text rendering of traces and policy comparisons.

use crate::sim::{Comparison, StepRecord, Trace};

/// Width of the fault bar in [`render_comparison`].
pub const BAR_WIDTH: usize = 40;

/// Render a trace as a grid: one row per slot, one column per step.
///
/// # Layout
/// ```text
/// FIFO (2 frames)
/// Ref     |  1  2  1
/// Frame 1 | 1*  1  1
/// Frame 2 |  - 2*  2
/// Used    |  1  2  2
/// Result  |  F  F  H
/// Hits: 1, Faults: 2, Hit Ratio: 0.33, Miss Ratio: 0.67
/// ```
/// `*` marks the slot written on a fault, `-` an empty slot. `Used` is the
/// number of occupied slots after the step. Only [`Trace::slots`] rows are
/// drawn, so slots no page could ever reach are left out.
pub fn render_trace(trace: &Trace) -> String {
    let rows = trace.slots();

    let refs: Vec<String> = trace.references().map(|page| page.to_string()).collect();
    let slots: Vec<Vec<String>> = (0..rows)
        .map(|slot| trace.iter().map(|record| cell(record, slot)).collect())
        .collect();
    let used: Vec<String> = trace
        .iter()
        .map(|record| record.occupancy().to_string())
        .collect();
    let results: Vec<String> = trace
        .iter()
        .map(|record| (if record.faulted() { "F" } else { "H" }).to_string())
        .collect();

    let label_width = format!("Frame {}", rows).len().max("Result".len());
    let cell_width = refs
        .iter()
        .chain(slots.iter().flatten())
        .chain(used.iter())
        .map(String::len)
        .max()
        .unwrap_or(1);

    let row = |label: &str, cells: &[String]| {
        let body: String = cells
            .iter()
            .map(|c| format!(" {:>width$}", c, width = cell_width))
            .collect();
        format!("{:<width$} |{}", label, body, width = label_width)
    };

    let mut lines = Vec::with_capacity(rows + 5);
    lines.push(format!("{} ({} frames)", trace.policy(), trace.capacity()));
    lines.push(row("Ref", refs.as_slice()));
    for (slot, cells) in slots.iter().enumerate() {
        lines.push(row(&format!("Frame {}", slot + 1), cells.as_slice()));
    }
    lines.push(row("Used", used.as_slice()));
    lines.push(row("Result", results.as_slice()));
    lines.push(trace.stats().to_string());
    lines.join("\n")
}

fn cell(record: &StepRecord, slot: usize) -> String {
    match record.frames.get(slot).copied().flatten() {
        Some(page) if record.faulted() && record.outcome.slot().0 == slot => format!("{}*", page),
        Some(page) => page.to_string(),
        None => "-".to_string(),
    }
}

/// Render one line per policy with a bar proportional to its faults,
/// followed by the winner.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut lines: Vec<String> = comparison
        .iter()
        .map(|run| {
            let total = run.stats.total().max(1) as usize;
            let filled = run.faults() as usize * BAR_WIDTH / total;
            let bar = "#".repeat(filled);
            format!(
                "{:<7} |{:<width$}| {}",
                run.policy().name(),
                bar,
                run.stats,
                width = BAR_WIDTH
            )
        })
        .collect();

    if let Some(best) = comparison.best() {
        lines.push(format!("Best: {} ({} faults)", best.policy(), best.faults()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;
    use crate::sim::{simulate, simulate_all, Policy};

    #[test]
    fn test_render_trace_grid() {
        let refs = PageId::stream(&[1, 2, 1]);
        let sim = simulate(Policy::Fifo, &refs, 2).unwrap();

        let expected = "\
FIFO (2 frames)
Ref     |  1  2  1
Frame 1 | 1*  1  1
Frame 2 |  - 2*  2
Used    |  1  2  2
Result  |  F  F  H
Hits: 1, Faults: 2, Hit Ratio: 0.33, Miss Ratio: 0.67";
        assert_eq!(render_trace(&sim.trace), expected);
    }

    #[test]
    fn test_render_trace_used_row() {
        let refs = PageId::stream(&[3, 3, 4, 5]);
        let sim = simulate(Policy::Fifo, &refs, 2).unwrap();
        let grid = render_trace(&sim.trace);

        assert!(grid.contains("Used    |  1  1  2  2"));
    }

    #[test]
    fn test_render_trace_huge_capacity() {
        let refs = PageId::stream(&[1, 2, 1]);
        let sim = simulate(Policy::Optimal, &refs, usize::MAX).unwrap();
        let grid = render_trace(&sim.trace);

        assert!(grid.starts_with(&format!("Optimal ({} frames)", usize::MAX)));
        assert!(grid.contains("Frame 2 |"));
        assert!(!grid.contains("Frame 3"));
    }

    #[test]
    fn test_render_trace_marks_replacement() {
        let refs = PageId::stream(&[10, 20, 30]);
        let sim = simulate(Policy::Lru, &refs, 2).unwrap();
        let grid = render_trace(&sim.trace);

        assert!(grid.contains("Frame 1 | 10*  10 30*"));
        assert!(grid.contains("Frame 2 |   - 20*  20"));
    }

    #[test]
    fn test_render_comparison() {
        let refs = PageId::stream(&[1, 2, 3, 4, 1, 2, 5]);
        let comparison = simulate_all(&refs, 3).unwrap();
        let text = render_comparison(&comparison);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("FIFO    |"));
        assert!(lines[0].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[2].contains("Faults: 5"));
        assert_eq!(lines[3], "Best: Optimal (5 faults)");
    }
}
