//! Plain-text rendering of a simulation outcome.
//!
//! Everything is written to a caller-supplied [`std::io::Write`] sink so the
//! same report can go to stdout, a file or a test buffer.
//!
//! ```text
//! ------------------------------------------------------------
//!                             FCFS
//! ------------------------------------------------------------
//! |  1  |  2  |
//! 0     5     8
//!
//! ID  Priority  Burst  Arrival  Wait  Turnaround  Completion
//! 1          1      5        0     0           5           5
//! 2          1      3        0     5           8           8
//!
//! Average wait:        2.50
//! Average turnaround:  6.50
//! Throughput:          0.25
//! ```

use std::io::{self, Write};

use crate::models::Timeline;
use crate::scheduler::SimulationOutcome;

const BANNER_WIDTH: usize = 60;
const IDLE_LABEL: &str = "-";

/// Writes a centred title between two rules.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(BANNER_WIDTH);
    writeln!(w, "{rule}")?;
    writeln!(w, "{title:^BANNER_WIDTH$}")?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt chart: one bar cell per slice, start ticks beneath.
///
/// Idle gaps between slices get a `-` cell of their own.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    let Some(last) = timeline.iter().last() else {
        return Ok(());
    };

    // (label, start tick)
    let mut cells: Vec<(&str, i64)> = Vec::with_capacity(timeline.len());
    let mut cursor: Option<i64> = None;
    for slice in timeline {
        if let Some(stop) = cursor {
            if slice.start > stop {
                cells.push((IDLE_LABEL, stop));
            }
        }
        cells.push((slice.process_id.as_str(), slice.start));
        cursor = Some(slice.stop);
    }

    let width = cells
        .iter()
        .map(|(label, start)| label.len().max(start.to_string().len()))
        .chain(std::iter::once(last.stop.to_string().len()))
        .max()
        .unwrap_or(1)
        + 4;

    let mut bar = String::from("|");
    let mut ticks = String::new();
    for (label, start) in &cells {
        bar.push_str(&format!("{label:^width$}|"));
        ticks.push_str(&format!("{:<pad$}", start, pad = width + 1));
    }
    ticks.push_str(&last.stop.to_string());

    writeln!(w, "{bar}")?;
    writeln!(w, "{ticks}")
}

/// Writes the per-process table in input order and the aggregate statistics.
pub fn write_table<W: Write>(w: &mut W, outcome: &SimulationOutcome) -> io::Result<()> {
    let id_width = outcome
        .processes
        .iter()
        .map(|p| p.id.len())
        .max()
        .unwrap_or(0)
        .max(2);

    writeln!(
        w,
        "{:<id_width$}  Priority  Burst  Arrival  Wait  Turnaround  Completion",
        "ID"
    )?;
    for p in &outcome.processes {
        writeln!(
            w,
            "{:<id_width$}  {:>8}  {:>5}  {:>7}  {:>4}  {:>10}  {:>10}",
            p.id,
            p.priority,
            p.burst_duration,
            p.arrival_time,
            p.waiting_time,
            p.turnaround_time,
            p.completion_time
        )?;
    }

    let kpi = &outcome.kpi;
    writeln!(w)?;
    writeln!(w, "Average wait:        {:.2}", kpi.average_waiting)?;
    writeln!(w, "Average turnaround:  {:.2}", kpi.average_turnaround)?;
    writeln!(w, "Throughput:          {:.2}", kpi.throughput)
}

/// Writes title, Gantt chart and table, in that order.
pub fn write_report<W: Write>(
    w: &mut W,
    title: &str,
    outcome: &SimulationOutcome,
) -> io::Result<()> {
    write_title(w, title)?;
    write_gantt(w, &outcome.timeline)?;
    writeln!(w)?;
    write_table(w, outcome)
}
