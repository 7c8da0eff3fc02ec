//! Ready-set operations shared by the drivers.
//!
//! All functions are pure over the process slice: they return or reorder
//! indices and never touch process state.

use super::rules::ArrivalOrder;
use super::{SchedulingContext, SelectionRule};
use crate::models::Process;

/// Picks the next process to dispatch from `candidates`.
///
/// `candidates` holds indices into `processes` in scan order. Only
/// unfinished processes that have arrived by `context.current_time` are
/// eligible; the lowest rule score wins and ties go to the candidate
/// scanned first. Returns the winner's position in `candidates`, or
/// `None` when nothing is ready and the CPU idles.
pub fn select_next<R: SelectionRule + ?Sized>(
    processes: &[Process],
    candidates: &[usize],
    rule: &R,
    context: &SchedulingContext,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for (pos, &idx) in candidates.iter().enumerate() {
        let process = &processes[idx];
        if process.completed || !process.has_arrived(context.current_time) {
            continue;
        }
        let score = rule.evaluate(process, context);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
}

/// Stable-sorts `indices` by rule score, lowest first.
///
/// Indices with equal scores keep their relative order.
pub fn sort_by_rule<R: SelectionRule + ?Sized>(
    indices: &mut [usize],
    processes: &[Process],
    rule: &R,
    context: &SchedulingContext,
) {
    indices.sort_by_key(|&i| rule.evaluate(&processes[i], context));
}

/// Appends newly ready processes to `waiting`.
///
/// A process is admitted when it is unfinished, has arrived by `now`, is
/// not the `active` one and is not already waiting. Admission follows
/// slice order. Returns how many processes were added.
pub fn admit_arrivals(
    processes: &[Process],
    now: i64,
    active: Option<usize>,
    waiting: &mut Vec<usize>,
) -> usize {
    let before = waiting.len();
    for (idx, process) in processes.iter().enumerate() {
        if process.completed || !process.has_arrived(now) || active == Some(idx) {
            continue;
        }
        if !waiting.contains(&idx) {
            waiting.push(idx);
        }
    }
    waiting.len() - before
}

/// Indices of `processes` in arrival order, list order on equal arrivals.
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    sort_by_rule(
        &mut indices,
        processes,
        &ArrivalOrder,
        &SchedulingContext::default(),
    );
    indices
}
