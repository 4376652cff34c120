use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::data::pipeline::ColumnFilterMap;

/// A quiescence timer: an action fires only after the input has been
/// idle for the configured delay.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_event: Option<Instant>,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_event: None,
            pending: false,
        }
    }

    /// Register that an event occurred, restarting the timer.
    pub fn trigger(&mut self) {
        self.last_event = Some(Instant::now());
        self.pending = true;
    }

    /// True once the delay has elapsed since the last event. Consumes the
    /// pending state.
    pub fn should_execute(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        if let Some(last) = self.last_event {
            if last.elapsed() >= self.delay {
                self.pending = false;
                self.last_event = None;
                return true;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        self.last_event = None;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// One quiescence timer per column filter input.
///
/// Keystrokes overwrite the column's pending text and restart its timer;
/// `poll` commits edits whose timers have expired into the live filter
/// map. Timers are independent per column, not globally coordinated.
#[derive(Debug, Clone)]
pub struct FilterInputDebouncer {
    delay_ms: u64,
    pending: HashMap<String, (String, Debouncer)>,
}

impl FilterInputDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: HashMap::new(),
        }
    }

    pub fn input(&mut self, column: &str, text: &str) {
        let entry = self
            .pending
            .entry(column.to_string())
            .or_insert_with(|| (String::new(), Debouncer::new(self.delay_ms)));
        entry.0 = text.to_string();
        entry.1.trigger();
    }

    /// Drain expired edits into `filters`. Returns true when anything was
    /// committed and the pipeline should recompute.
    pub fn poll(&mut self, filters: &mut ColumnFilterMap) -> bool {
        let ready: Vec<String> = self
            .pending
            .iter_mut()
            .filter_map(|(key, (_, debouncer))| debouncer.should_execute().then(|| key.clone()))
            .collect();

        let mut committed = false;
        for key in ready {
            if let Some((text, _)) = self.pending.remove(&key) {
                filters.set(&key, &text);
                committed = true;
            }
        }
        committed
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debouncer_fires_after_delay() {
        let mut d = Debouncer::new(0);
        assert!(!d.should_execute());
        d.trigger();
        assert!(d.is_pending());
        assert!(d.should_execute());
        // Consumed: does not fire twice for one trigger.
        assert!(!d.should_execute());
    }

    #[test]
    fn test_debouncer_reset_cancels() {
        let mut d = Debouncer::new(0);
        d.trigger();
        d.reset();
        assert!(!d.should_execute());
    }

    #[test]
    fn test_filter_input_commits_latest_text() {
        let mut input = FilterInputDebouncer::new(0);
        let mut filters = ColumnFilterMap::new();

        input.input("gap", ">1");
        input.input("gap", ">2");
        assert!(input.poll(&mut filters));
        assert_eq!(filters.get("gap"), Some(">2"));
        assert!(!input.has_pending());
        assert!(!input.poll(&mut filters));
    }

    #[test]
    fn test_filter_input_blank_clears_filter() {
        let mut input = FilterInputDebouncer::new(0);
        let mut filters = ColumnFilterMap::new();
        filters.set("ticker", "sp");

        input.input("ticker", "");
        assert!(input.poll(&mut filters));
        assert!(filters.is_empty());
    }
}
