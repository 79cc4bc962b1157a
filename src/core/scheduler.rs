//=========================================================================
// Frame Scheduler
//
// Liveness and pacing for the per-frame cycle.
//
// Responsibilities:
// - Track whether the frame loop is live (started, not torn down)
// - Supply elapsed time per frame through a `Clock`
// - Drive any `FrameStep` at a fixed rate for deterministic simulation
//
// Notes:
// The scheduler never owns a loop of its own. Hosts call `tick(dt)` once
// per frame and re-request the next frame only while it returns
// `TickControl::Continue`; after teardown the next tick returns
// `TickControl::Exit` without doing any work.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::time::Instant;

//=== External Crates =====================================================
use log::{debug, trace};

//=== TickControl =========================================================
//
// Each tick signals either to keep scheduling or to stop.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== FrameStep ===========================================================

/// Anything that advances by one frame of `dt` seconds.
pub trait FrameStep {
    fn tick(&mut self, dt: f32) -> TickControl;
}

//=== Clock ===============================================================

/// Elapsed-time source sampled once per frame.
pub trait Clock {
    /// Seconds since the previous call (never negative).
    fn delta(&mut self) -> f32;

    /// Forgets the previous sample so the next `delta` starts from zero.
    fn reset(&mut self) {}
}

/// Wall clock. The first call returns `0.0`.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last = Some(now);
        delta
    }

    fn reset(&mut self) {
        self.last = None;
    }
}

/// Clock that reports the same step every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    /// One step per tick at `tps` ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn from_tps(tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        Self::new((1.0 / tps) as f32)
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.step
    }
}

//=== FrameScheduler ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// Liveness flag and frame accounting for the controller.
#[derive(Debug)]
pub struct FrameScheduler {
    state: SchedulerState,
    frames: u64,
    elapsed: f64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            frames: 0,
            elapsed: 0.0,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Marks the loop live. Returns `false` if it already was.
    pub fn start(&mut self) -> bool {
        if self.state == SchedulerState::Running {
            return false;
        }
        debug!("Frame loop started");
        self.state = SchedulerState::Running;
        true
    }

    /// Marks the loop dead. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        debug!("Frame loop stopped after {} frames", self.frames);
        self.state = SchedulerState::Stopped;
        true
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    //--- Accounting -------------------------------------------------------

    /// Records a completed frame.
    pub fn record(&mut self, dt: f32) {
        self.frames += 1;
        if dt > 0.0 && dt.is_finite() {
            self.elapsed += f64::from(dt);
        }
        trace!("Frame {} done (dt = {})", self.frames, dt);
    }

    /// Frames completed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulated seconds since construction.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

//=== FixedStep ===========================================================

/// Headless driver: ticks a [`FrameStep`] with a constant `dt`.
///
/// Runs as fast as possible (no sleeping), which keeps simulations and
/// tests deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    tps: f64,
}

impl FixedStep {
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn new(tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        Self { tps }
    }

    pub fn dt(&self) -> f32 {
        (1.0 / self.tps) as f32
    }

    /// Ticks up to `max_frames` times, stopping early on
    /// [`TickControl::Exit`]. Returns the number of frames that ran.
    pub fn run<S: FrameStep>(&self, target: &mut S, max_frames: u64) -> u64 {
        let dt = self.dt();
        let mut ran = 0;

        while ran < max_frames {
            if target.tick(dt) == TickControl::Exit {
                debug!("Fixed-step run exited after {} frames", ran);
                break;
            }
            ran += 1;
        }

        ran
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
