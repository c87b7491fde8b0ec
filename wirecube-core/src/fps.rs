/// Frames-per-second accounting, sampled once per wall-clock second
///
/// Minimum elapsed time between samples, in milliseconds. The guard on
/// this threshold is also what keeps the frames/elapsed division away
/// from zero; keep it if the interval is ever shortened.
const SAMPLE_INTERVAL_MS: u64 = 1000;

/// Rolling frame counter with a once-per-second formatted readout
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    last_sample_ms: Option<u64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame against the current sampling window
    ///
    /// Returns the formatted readout once at least a second has passed
    /// since the previous sample, then restarts the window. The first
    /// call opens the window at `now_ms`.
    pub fn record(&mut self, now_ms: u64) -> Option<String> {
        self.frames += 1;
        let window_start = *self.last_sample_ms.get_or_insert(now_ms);

        let elapsed = now_ms.saturating_sub(window_start);
        if elapsed < SAMPLE_INTERVAL_MS {
            return None;
        }

        let fps = (self.frames as f32 * 1000.0) / elapsed as f32;
        self.frames = 0;
        self.last_sample_ms = Some(now_ms);
        Some(format!("FPS: {:.1}", fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_frames_over_one_second() {
        let mut fps = FpsCounter::new();
        // 60 calls inside the window, the last one exactly at 1000 ms
        for i in 0..59u64 {
            assert_eq!(fps.record(i * 16), None);
        }
        assert_eq!(fps.record(1000).as_deref(), Some("FPS: 60.0"));
    }

    #[test]
    fn test_thirty_frames_over_1500_ms() {
        let mut fps = FpsCounter::new();
        // 29 frames inside the window (last at 924 ms), the 30th at 1500 ms
        for i in 0..29u64 {
            assert_eq!(fps.record(i * 33), None);
        }
        assert_eq!(fps.record(1500).as_deref(), Some("FPS: 20.0"));
    }

    #[test]
    fn test_no_sample_before_interval() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.record(0), None);
        assert_eq!(fps.record(500), None);
        assert_eq!(fps.record(999), None);
    }

    #[test]
    fn test_window_restarts_after_sample() {
        let mut fps = FpsCounter::new();
        fps.record(0);
        assert!(fps.record(1000).is_some());
        // The counter reset; the next window accumulates afresh
        assert_eq!(fps.record(1500), None);
        assert_eq!(fps.record(2000).as_deref(), Some("FPS: 2.0"));
    }

    #[test]
    fn test_same_timestamp_does_not_divide_by_zero() {
        let mut fps = FpsCounter::new();
        // Repeated identical readings never reach the threshold
        for _ in 0..10 {
            assert_eq!(fps.record(42), None);
        }
    }
}
