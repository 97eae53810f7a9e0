/// Fixed-timestep frame driver
///
/// Wall-clock frame time is banked and paid out as whole simulation ticks at
/// 60 Hz. The running tick count is the monotonic clock every timer in the
/// game (quiz countdown, result display) is measured against.
use std::time::{Duration, Instant};

/// Monotonic simulation time, in ticks since start
pub type Tick = u64;

/// Simulation updates per second
pub const TICK_RATE: u32 = 60;

/// Length of one tick
pub const TICK_DURATION: Duration = Duration::from_micros(16_667);

/// Catch-up limit per frame; anything beyond is dropped
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Weight of the newest frame in the FPS moving average
const FPS_SMOOTHING: f32 = 0.1;

pub const fn seconds_to_ticks(seconds: u32) -> Tick {
    seconds as Tick * TICK_RATE as Tick
}

pub fn ticks_to_seconds(ticks: Tick) -> f32 {
    ticks as f32 / TICK_RATE as f32
}

pub struct GameLoop {
    /// Wall-clock time not yet paid out as ticks
    banked: Duration,
    last_frame: Instant,
    paused: bool,
    frames: u64,
    tick: Tick,
    /// Exponential moving average of frame time, in seconds
    avg_frame_secs: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            banked: Duration::ZERO,
            last_frame: Instant::now(),
            paused: false,
            frames: 0,
            tick: 0,
            avg_frame_secs: 0.0,
        }
    }

    /// Start a frame from the wall clock, returns how many ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Bank `elapsed` and return how many ticks it pays for
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frames += 1;
        let secs = elapsed.as_secs_f32();
        self.avg_frame_secs = if self.frames == 1 {
            secs
        } else {
            self.avg_frame_secs + (secs - self.avg_frame_secs) * FPS_SMOOTHING
        };

        if self.paused {
            return 0;
        }

        self.banked += elapsed;
        let due = (self.banked.as_micros() / TICK_DURATION.as_micros()) as u64;
        let ticks = due.min(MAX_TICKS_PER_FRAME as u64) as u32;

        if due > ticks as u64 {
            log::debug!("Frame took {:?}, skipping {} ticks", elapsed, due - ticks as u64);
            self.banked = Duration::ZERO;
        } else {
            self.banked -= TICK_DURATION * ticks;
        }
        ticks
    }

    /// Bump the tick counter; call once per tick `begin_frame` returned
    pub fn next_tick(&mut self) -> Tick {
        self.tick += 1;
        self.tick
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn fps(&self) -> f32 {
        if self.avg_frame_secs > 0.0 {
            1.0 / self.avg_frame_secs
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!(
                "Paused at tick {} after {} frames ({:.0} fps)",
                self.tick,
                self.frame_count(),
                self.fps()
            );
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // No burst of ticks for the time spent paused
            self.banked = Duration::ZERO;
            log::info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
