use crate::config::CounterConfig;

/// Bounded integer counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    initial: i64,
    step: i64,
    min: i64,
    max: i64,
}

impl Counter {
    /// Bounds are swapped if given reversed; `initial` is clamped into them
    pub fn new(initial: i64, step: i64, min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let initial = initial.clamp(min, max);
        Self {
            value: initial,
            initial,
            step: step.max(1),
            min,
            max,
        }
    }

    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.initial, config.step, config.min, config.max)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(self.step).min(self.max);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(self.step).max(self.min);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = self.initial;
        self.value
    }

    pub fn at_min(&self) -> bool {
        self.value == self.min
    }

    pub fn at_max(&self) -> bool {
        self.value == self.max
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::from_config(&CounterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_decrement_reset() {
        let mut counter = Counter::new(5, 2, 0, 10);
        assert_eq!(counter.increment(), 7);
        assert_eq!(counter.decrement(), 5);
        assert_eq!(counter.decrement(), 3);
        assert_eq!(counter.reset(), 5);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let mut counter = Counter::new(9, 3, 0, 10);
        assert_eq!(counter.increment(), 10);
        assert!(counter.at_max());
        assert_eq!(counter.increment(), 10);

        let mut counter = Counter::new(1, 3, 0, 10);
        assert_eq!(counter.decrement(), 0);
        assert!(counter.at_min());
    }

    #[test]
    fn test_new_normalizes_input() {
        let counter = Counter::new(50, 0, 10, -10);
        assert_eq!(counter.bounds(), (-10, 10));
        assert_eq!(counter.value(), 10);
        assert_eq!(counter.step(), 1);
    }

    #[test]
    fn test_from_default_config() {
        let counter = Counter::default();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.bounds(), (-999, 999));
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let mut counter = Counter::new(i64::MAX - 1, 5, i64::MIN, i64::MAX);
        assert_eq!(counter.increment(), i64::MAX);
    }
}
