//! Frame clock
//!
//! Converts host timestamps into a bounded per-tick delta so a long pause
//! (backgrounded tab, debugger stop) can never integrate past an obstacle.

/// Clamp a raw elapsed time (milliseconds) to `[0, max_delta]` seconds.
///
/// Zero, negative and NaN elapsed times all produce a zero-effect tick.
#[inline]
pub fn clamp_delta(elapsed_ms: f64, max_delta: f32) -> f32 {
    let secs = (elapsed_ms / 1000.0) as f32;
    if secs.is_nan() || secs <= 0.0 {
        0.0
    } else {
        secs.min(max_delta)
    }
}

/// Tracks the previous host timestamp
#[derive(Debug, Clone)]
pub struct Clock {
    last_ms: Option<f64>,
    max_delta: f32,
}

impl Clock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_ms: None,
            max_delta,
        }
    }

    /// Delta (seconds) since the previous call, clamped.
    ///
    /// The first call after creation or `resync` only records the timestamp.
    pub fn next_delta(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => clamp_delta(now_ms - last, self.max_delta),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta
    }

    /// Forget the previous timestamp
    pub fn resync(&mut self) {
        self.last_ms = None;
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}
