use std::time::Duration;

/// Retry delay for the poll loop, threaded through each cycle rather than
/// living in any global. Doubles on every consecutive failure up to a
/// ceiling and snaps back to the floor on the first success.
#[derive(Debug, Clone)]
pub struct Backoff {
    delay: Duration,
    floor: Duration,
    ceiling: Duration,
}

impl Backoff {
    pub fn new(floor: Duration, ceiling: Duration) -> Self {
        Self {
            delay: floor,
            floor,
            ceiling,
        }
    }

    /// The delay to wait out for the failure that just happened. Doubles the
    /// stored delay for the next one, capped at the ceiling.
    pub fn next_delay(&mut self) -> Duration {
        let current = self.delay;
        self.delay = (self.delay * 2).min(self.ceiling);
        current
    }

    pub fn reset(&mut self) {
        self.delay = self.floor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backoff() -> Backoff {
        Backoff::new(Duration::from_millis(1000), Duration::from_millis(4000))
    }

    #[test]
    fn doubles_until_ceiling() {
        let mut backoff = backoff();
        assert_eq!(backoff.next_delay(), Duration::from_millis(1000));
        assert_eq!(backoff.next_delay(), Duration::from_millis(2000));
        assert_eq!(backoff.next_delay(), Duration::from_millis(4000));
        assert_eq!(backoff.next_delay(), Duration::from_millis(4000));
    }

    #[test]
    fn nth_failure_matches_min_of_doubling_and_ceiling() {
        let floor = 1000u64;
        let ceiling = 4000u64;
        let mut backoff = backoff();
        for n in 0..8u32 {
            let expected = (floor * 2u64.pow(n)).min(ceiling);
            assert_eq!(backoff.next_delay(), Duration::from_millis(expected));
        }
    }

    #[test]
    fn success_resets_to_floor() {
        let mut backoff = backoff();
        backoff.next_delay();
        backoff.next_delay();
        backoff.reset();
        assert_eq!(backoff.next_delay(), Duration::from_millis(1000));
        assert_eq!(backoff.next_delay(), Duration::from_millis(2000));
    }
}
