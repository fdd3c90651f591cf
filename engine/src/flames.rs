//! The FLAMES reading: letter cancellation followed by elimination.
//!
//! Everything here is pure and total. Validation of what may be typed lives
//! with the caller; [`try_compute`] is the validating entry point.
//!
//! ```text
//! "Alice", "Bob" -> normalize -> "alice", "bob"
//!                -> cancel    -> 5 + 3 = 8 survivors
//!                -> eliminate -> F L A M E S, strike L E M F S -> Affection
//! ```

use std::collections::HashMap;

use serde::Serialize;

use flames_types::{InvalidInput, Name, NameSlot, ResultCode};

/// Outcome of one reading, with the intermediate values the UI animates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Letters left after cancellation, across both names.
    pub survivors: usize,
    /// Codes in the order they were struck out; always five entries.
    pub eliminated: Vec<ResultCode>,
    pub code: ResultCode,
}

/// Lowercase and drop all whitespace.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Letters that remain once every letter shared by both names has been
/// cancelled one occurrence at a time.
///
/// Inputs are expected to be normalized already.
#[must_use]
pub fn survivor_count(name1: &str, name2: &str) -> usize {
    let mut counts: HashMap<char, (usize, usize)> = HashMap::new();
    for c in name1.chars() {
        counts.entry(c).or_default().0 += 1;
    }
    for c in name2.chars() {
        counts.entry(c).or_default().1 += 1;
    }
    counts.values().map(|&(a, b)| a.abs_diff(b)).sum()
}

/// `(index + count - 1) mod len`, non-negative and overflow-free.
fn next_index(index: usize, count: usize, len: usize) -> usize {
    (index + count % len + len - 1) % len
}

fn run_elimination(count: usize) -> (Vec<ResultCode>, ResultCode) {
    let mut remaining = ResultCode::ALL.to_vec();
    let mut eliminated = Vec::with_capacity(remaining.len() - 1);
    let mut index = 0;

    while remaining.len() > 1 {
        index = next_index(index, count, remaining.len());
        eliminated.push(remaining.remove(index));
    }

    (eliminated, remaining[0])
}

/// Strike codes out of "FLAMES" until one is left.
#[must_use]
pub fn eliminate(count: usize) -> ResultCode {
    run_elimination(count).1
}

/// The five codes struck out for `count`, in order.
#[must_use]
pub fn elimination_order(count: usize) -> Vec<ResultCode> {
    run_elimination(count).0
}

/// Compute the result for two names without validating them.
#[must_use]
pub fn compute(name1: &str, name2: &str) -> ResultCode {
    eliminate(survivor_count(&normalize(name1), &normalize(name2)))
}

/// Validate both names, then compute.
pub fn try_compute(name1: &str, name2: &str) -> Result<ResultCode, InvalidInput> {
    let first = Name::parse(NameSlot::First, name1)?;
    let second = Name::parse(NameSlot::Second, name2)?;
    Ok(evaluate(&first, &second).code)
}

#[must_use]
pub fn evaluate(name1: &Name, name2: &Name) -> Reading {
    let survivors = survivor_count(&normalize(name1.as_str()), &normalize(name2.as_str()));
    let (eliminated, code) = run_elimination(survivors);
    Reading {
        survivors,
        eliminated,
        code,
    }
}
