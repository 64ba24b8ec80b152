/// How the next update is scheduled relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Timer fires every period, regardless of how long work takes.
    FixedRate,
    /// Wait a period after each cycle completes; slow cycles push the next one back.
    AfterCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshPolicy {
    pub cadence: Cadence,
    pub period_ms: u32,
    /// Multiplier applied per consecutive failure. `1.0` means no backoff.
    pub backoff_factor: f64,
    pub max_delay_ms: u32,
}

impl RefreshPolicy {
    pub const fn fixed_rate(period_ms: u32) -> Self {
        Self {
            cadence: Cadence::FixedRate,
            period_ms,
            backoff_factor: 1.0,
            max_delay_ms: period_ms,
        }
    }

    pub const fn after_completion(period_ms: u32) -> Self {
        Self {
            cadence: Cadence::AfterCompletion,
            period_ms,
            backoff_factor: 1.0,
            max_delay_ms: period_ms,
        }
    }

    pub fn with_backoff(mut self, factor: f64, max_delay_ms: u32) -> Self {
        self.backoff_factor = factor.max(1.0);
        self.max_delay_ms = max_delay_ms.max(self.period_ms);
        self
    }

    /// Delay before the next cycle given how many cycles in a row failed.
    pub fn next_delay_ms(&self, consecutive_failures: u32) -> u32 {
        if consecutive_failures == 0 || self.backoff_factor <= 1.0 {
            return self.period_ms;
        }
        let scaled = self.period_ms as f64 * self.backoff_factor.powi(consecutive_failures as i32);
        if scaled.is_finite() {
            (scaled.round() as u64).min(self.max_delay_ms as u64) as u32
        } else {
            self.max_delay_ms
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardConfig {
    pub simulation: RefreshPolicy,
    pub polling: RefreshPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            simulation: RefreshPolicy::fixed_rate(2_000),
            polling: RefreshPolicy::after_completion(2_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_two_second_cadence() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.simulation.cadence, Cadence::FixedRate);
        assert_eq!(cfg.polling.cadence, Cadence::AfterCompletion);
        assert_eq!(cfg.polling.next_delay_ms(0), 2_000);
        // no backoff by default, even after failures
        assert_eq!(cfg.polling.next_delay_ms(5), 2_000);
    }

    #[test]
    fn backoff_grows_and_caps() {
        let p = RefreshPolicy::after_completion(2_000).with_backoff(2.0, 15_000);
        assert_eq!(p.next_delay_ms(0), 2_000);
        assert_eq!(p.next_delay_ms(1), 4_000);
        assert_eq!(p.next_delay_ms(2), 8_000);
        assert_eq!(p.next_delay_ms(3), 15_000);
        assert_eq!(p.next_delay_ms(400), 15_000);
    }

    #[test]
    fn backoff_factor_below_one_is_ignored() {
        let p = RefreshPolicy::after_completion(1_000).with_backoff(0.5, 100);
        assert_eq!(p.backoff_factor, 1.0);
        assert_eq!(p.max_delay_ms, 1_000);
        assert_eq!(p.next_delay_ms(3), 1_000);
    }
}
