//! Plain-text rendering of reports and tables.

use std::fmt::Write;

use dicecount::{CountTable, Report};

const BAR_WIDTH: f64 = 30.0;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    "#".repeat((value / max * BAR_WIDTH).round() as usize)
}

fn push_with_bar(out: &mut String, line: String, bar: String) {
    out.push_str(&line);
    if !bar.is_empty() {
        out.push(' ');
        out.push_str(&bar);
    }
    out.push('\n');
}

pub fn render_report(report: &Report) -> String {
    let q = report.query;
    let mut out = String::new();

    let _ = writeln!(out, "Iterative");
    let _ = writeln!(
        out,
        "  ways to total {} with {} roll(s): {}",
        q.target_sum, q.rolls, report.iterative_ways
    );
    let _ = writeln!(out, "  time: {:.5}s", report.timings.iterative.seconds);

    let _ = writeln!(out, "Recursive");
    match (report.recursive_ways, report.timings.recursive) {
        (Some(ways), Some(t)) => {
            let _ = writeln!(
                out,
                "  ways to total {} with {} roll(s): {}",
                q.target_sum, q.rolls, ways
            );
            let _ = writeln!(out, "  time: {:.5}s", t.seconds);
        }
        _ => {
            let _ = writeln!(out, "  skipped");
        }
    }

    let _ = writeln!(out, "Total combinations: {}", report.total_combinations);
    let _ = writeln!(
        out,
        "Chance of exactly {}: {:.2}%",
        q.target_sum, report.target_percentage
    );
    out.push('\n');

    if report.distribution.is_empty() {
        let _ = writeln!(out, "Distribution: no achievable sums up to {}", q.target_sum);
    } else {
        let _ = writeln!(out, "Distribution {}..={}", report.min_sum, report.max_sum);
        let max = report
            .distribution
            .iter()
            .map(|(_, p)| p)
            .fold(0.0, f64::max);
        for (sum, pct) in report.distribution.iter() {
            push_with_bar(&mut out, format!("{:>4} {:>7.2}%", sum, pct), bar(pct, max));
        }
    }
    out.push('\n');

    let _ = writeln!(out, "Timing");
    let entries = report.timings.entries();
    let slowest = entries.iter().map(|t| t.seconds).fold(0.0, f64::max);
    for t in &entries {
        push_with_bar(
            &mut out,
            format!("  {:<9} {:.5}s", t.method.label(), t.seconds),
            bar(t.seconds, slowest),
        );
    }
    if report.timings.recursive.is_none() {
        let _ = writeln!(out, "  recursive skipped");
    }
    let _ = writeln!(out, "  faster: {}", report.timings.faster().label());
    out
}

/// The whole table, one row per roll count, columns by partial sum.
pub fn render_table(table: &CountTable) -> String {
    let widest = table
        .rows()
        .flat_map(|row| row.iter())
        .max()
        .copied()
        .unwrap_or(0)
        .to_string()
        .len()
        .max(table.target_sum().to_string().len())
        + 1;

    let mut out = String::from("r\\s");
    out.push(' ');
    for s in 0..=table.target_sum() {
        let _ = write!(out, "{:>widest$}", s);
    }
    out.push('\n');
    for (r, row) in table.rows().enumerate() {
        let _ = write!(out, "{:<4}", r);
        for ways in row {
            let _ = write!(out, "{:>widest$}", ways);
        }
        out.push('\n');
    }
    out
}
