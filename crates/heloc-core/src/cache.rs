//! Bounded memoization for schedule generation.
//!
//! Schedules are pure functions of their inputs, so caching is safe.
//! The cache is an explicit value owned by the caller, never process
//! state: sizing, lifetime, and sharing are the caller's decisions.
//! Eviction is insertion-ordered once capacity is reached.

use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;

use crate::schedule::ScheduleOutput;
use crate::types::{DrawEvent, LoanTerms, Money, Rate, Years};
use crate::HelocResult;

/// Exact input tuple a schedule is derived from.
///
/// Draws are normalized (sorted by period) so logically identical
/// requests hit the same entry regardless of event order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    principal: Money,
    annual_rate_pct: Rate,
    term_years: Years,
    payments_per_year: u32,
    interest_only: bool,
    start_date: NaiveDate,
    draws: Vec<(u32, Money)>,
}

impl ScheduleKey {
    /// Build a key from resolved inputs. `start_date` must already be
    /// the resolved anchor (terms date or the caller's as-of date), so
    /// omitted dates cannot alias across days.
    pub fn new(terms: &LoanTerms, draws: &[DrawEvent], start_date: NaiveDate) -> Self {
        let mut normalized: Vec<(u32, Money)> = draws
            .iter()
            .map(|d| (d.period_index, d.amount.normalize()))
            .collect();
        normalized.sort_unstable();
        ScheduleKey {
            principal: terms.principal.normalize(),
            annual_rate_pct: terms.annual_rate_pct.normalize(),
            term_years: terms.term_years.normalize(),
            payments_per_year: terms.payments_per_year,
            interest_only: terms.interest_only,
            start_date,
            draws: normalized,
        }
    }
}

/// Bounded key-value store for generated schedules.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    capacity: usize,
    entries: HashMap<ScheduleKey, ScheduleOutput>,
    insertion_order: VecDeque<ScheduleKey>,
}

impl ScheduleCache {
    pub fn with_capacity(capacity: usize) -> Self {
        ScheduleCache {
            capacity,
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ScheduleKey) -> Option<&ScheduleOutput> {
        self.entries.get(key)
    }

    /// Return the cached schedule or compute, store, and return it.
    /// Computation errors are propagated and never cached.
    pub fn get_or_compute<F>(&mut self, key: ScheduleKey, compute: F) -> HelocResult<ScheduleOutput>
    where
        F: FnOnce() -> HelocResult<ScheduleOutput>,
    {
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }
        let output = compute()?;
        self.insert(key, output.clone());
        Ok(output)
    }

    fn insert(&mut self, key: ScheduleKey, output: ScheduleOutput) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, output);
    }
}
