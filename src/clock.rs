use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame clock.  `tick` sleeps away whatever is left of the
/// current frame.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            frame: frame_duration(fps),
            last: Instant::now(),
        }
    }

    /// Wait until the next frame is due; returns the time since the previous
    /// tick.
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.last;
        self.last = now;
        delta
    }
}

/// One frame at `fps` frames per second (0 is treated as 1).
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
