//! Tick clock for auto-playing the timeline.
//!
//! There is no OS timer behind playback. The host calls
//! [`PlaybackClock::advance`] from its frame loop and dispatches one tick
//! per returned step, so pausing is synchronous: after [`pause`] returns,
//! no further step can ever be produced.
//!
//! [`pause`]: PlaybackClock::pause

/// Seconds between cursor advances during playback.
pub const DEFAULT_TICK_INTERVAL: f64 = 0.15;

/// Accumulates wall-clock time into discrete playback steps.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    interval: f64,
    elapsed: f64,
    playing: bool,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl PlaybackClock {
    /// Create a clock with the given tick interval in seconds.
    /// Non-positive intervals fall back to the default.
    #[must_use]
    pub fn new(interval: f64) -> Self {
        let interval = if interval > 0.0 {
            interval
        } else {
            DEFAULT_TICK_INTERVAL
        };
        Self {
            interval,
            elapsed: 0.0,
            playing: false,
        }
    }

    /// Whether the clock is currently running.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start the clock. No-op when already playing.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop the clock and discard any partially accumulated interval.
    pub fn pause(&mut self) {
        self.playing = false;
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds; returns the number of whole steps due.
    ///
    /// Returns 0 while paused. Leftover time below one interval carries
    /// over to the next call.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !self.playing || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let steps = (self.elapsed / self.interval).floor();
        self.elapsed -= steps * self.interval;
        steps as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_steps_while_paused() {
        let mut clock = PlaybackClock::default();
        assert_eq!(clock.advance(10.0), 0);
    }

    #[test]
    fn test_steps_accumulate() {
        let mut clock = PlaybackClock::new(0.15);
        clock.play();
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 1); // 0.2 elapsed
        assert_eq!(clock.advance(0.45), 3); // 0.05 carried + 0.45
    }

    #[test]
    fn test_pause_discards_partial_interval() {
        let mut clock = PlaybackClock::new(0.15);
        clock.play();
        assert_eq!(clock.advance(0.1), 0);
        clock.pause();
        clock.play();
        // the 0.1s from before the pause must not count
        assert_eq!(clock.advance(0.1), 0);
    }

    #[test]
    fn test_pause_is_synchronous() {
        let mut clock = PlaybackClock::new(0.15);
        clock.play();
        clock.pause();
        assert!(!clock.is_playing());
        assert_eq!(clock.advance(100.0), 0);
    }

    #[test]
    fn test_play_is_idempotent() {
        let mut clock = PlaybackClock::new(0.15);
        clock.play();
        clock.advance(0.1);
        clock.play();
        assert_eq!(clock.advance(0.05), 1);
    }

    #[test]
    fn test_invalid_interval_falls_back() {
        let clock = PlaybackClock::new(0.0);
        assert_eq!(clock, PlaybackClock::new(DEFAULT_TICK_INTERVAL));
    }
}
