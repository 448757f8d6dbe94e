use std::path::{Path, PathBuf};
use std::time::Duration;

use scenes::{Control, Scene, ScheduledInput};

/// High-level behaviour requested by the caller.
///
/// The render policy decides how far the scene is advanced and which frames
/// end up on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPolicy {
    /// Advance `ticks` times, then write a single PNG to `path`.
    Still { path: PathBuf, ticks: u64 },
    /// Write `frames` PNGs into `directory`, advancing `ticks_per_frame`
    /// between consecutive frames. The first frame shows the initial state.
    Sequence {
        directory: PathBuf,
        frames: u32,
        ticks_per_frame: u64,
    },
}

impl RenderPolicy {
    /// Ticks processed before the last frame when the scene never exits.
    pub fn total_ticks(&self) -> u64 {
        match self {
            RenderPolicy::Still { ticks, .. } => *ticks,
            RenderPolicy::Sequence {
                frames,
                ticks_per_frame,
                ..
            } => u64::from(frames.saturating_sub(1)).saturating_mul(*ticks_per_frame),
        }
    }
}

/// File name of frame `index` inside a sequence directory.
pub fn frame_path(directory: &Path, index: u32) -> PathBuf {
    directory.join(format!("frame_{index:04}.png"))
}

/// Snapshot of the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    pub elapsed: Duration,
    pub tick: u64,
}

/// Deterministic clock: every tick adds a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClock {
    interval: Duration,
    tick: u64,
}

impl SimulatedClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, tick: 0 }
    }

    pub fn sample(&self) -> TimeSample {
        let nanos = self.interval.as_nanos().saturating_mul(u128::from(self.tick));
        let elapsed = Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX));
        TimeSample {
            elapsed,
            tick: self.tick,
        }
    }

    pub fn advance(&mut self) -> TimeSample {
        self.tick = self.tick.saturating_add(1);
        self.sample()
    }
}

/// Feeds a scene its ticks and the inputs scheduled against them.
///
/// An input scheduled at tick `T` is delivered once exactly `T` ticks have
/// run, before the next tick or frame. Inputs sharing a tick keep the order
/// they were given in.
pub struct Timeline {
    events: Vec<ScheduledInput>,
    next: usize,
    clock: SimulatedClock,
}

impl Timeline {
    pub fn new(events: &[ScheduledInput], interval: Duration) -> Self {
        let mut events = events.to_vec();
        events.sort_by_key(|event| event.tick);
        Self {
            events,
            next: 0,
            clock: SimulatedClock::new(interval),
        }
    }

    pub fn sample(&self) -> TimeSample {
        self.clock.sample()
    }

    /// Delivers every input due at the current tick.
    pub fn deliver(&mut self, scene: &mut dyn Scene) -> Control {
        let now = self.clock.sample().tick;
        while let Some(event) = self.events.get(self.next) {
            if event.tick > now {
                break;
            }
            self.next += 1;
            tracing::debug!(tick = now, input = %event.input, "delivering input");
            if scene.handle_input(&event.input) == Control::Exit {
                return Control::Exit;
            }
        }
        Control::Continue
    }

    /// Runs `count` ticks, delivering due inputs around each one.
    pub fn run_ticks(&mut self, scene: &mut dyn Scene, count: u64) -> Control {
        for _ in 0..count {
            if self.deliver(scene) == Control::Exit {
                return Control::Exit;
            }
            scene.tick();
            let sample = self.clock.advance();
            tracing::trace!(
                tick = sample.tick,
                elapsed = ?sample.elapsed,
                "scene ticked"
            );
        }
        self.deliver(scene)
    }

    /// Inputs that were never delivered.
    pub fn pending(&self) -> &[ScheduledInput] {
        &self.events[self.next..]
    }
}

#[cfg(test)]
mod tests {
    use scenes::{Arrow, Frame, SceneInput, SceneKind, Viewport};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        ticks: u64,
        seen: Vec<(u64, SceneInput)>,
    }

    impl Scene for Recorder {
        fn kind(&self) -> SceneKind {
            SceneKind::Fan
        }

        fn default_size(&self) -> (u32, u32) {
            (1, 1)
        }

        fn tick(&mut self) {
            self.ticks += 1;
        }

        fn handle_input(&mut self, input: &SceneInput) -> Control {
            self.seen.push((self.ticks, *input));
            if *input == SceneInput::Escape {
                Control::Exit
            } else {
                Control::Continue
            }
        }

        fn frame(&self) -> Frame {
            Frame::new(daycycle::Rgb::BLACK, Viewport::unit())
        }
    }

    fn at(tick: u64, input: SceneInput) -> ScheduledInput {
        ScheduledInput { tick, input }
    }

    #[test]
    fn inputs_arrive_after_their_tick_count() {
        let events = [
            at(3, SceneInput::Arrow(Arrow::Right)),
            at(0, SceneInput::Key('d')),
            at(3, SceneInput::Arrow(Arrow::Left)),
        ];
        let mut timeline = Timeline::new(&events, Duration::from_millis(10));
        let mut scene = Recorder::default();
        assert_eq!(timeline.run_ticks(&mut scene, 5), Control::Continue);
        assert_eq!(
            scene.seen,
            vec![
                (0, SceneInput::Key('d')),
                (3, SceneInput::Arrow(Arrow::Right)),
                (3, SceneInput::Arrow(Arrow::Left)),
            ]
        );
        assert_eq!(timeline.sample().tick, 5);
        assert_eq!(timeline.sample().elapsed, Duration::from_millis(50));
    }

    #[test]
    fn exit_stops_before_the_next_tick() {
        let events = [at(2, SceneInput::Escape), at(4, SceneInput::Key('x'))];
        let mut timeline = Timeline::new(&events, Duration::from_millis(16));
        let mut scene = Recorder::default();
        assert_eq!(timeline.run_ticks(&mut scene, 10), Control::Exit);
        assert_eq!(scene.ticks, 2);
        assert_eq!(timeline.pending().len(), 1);
    }

    #[test]
    fn late_inputs_stay_pending() {
        let events = [at(7, SceneInput::Key('a'))];
        let mut timeline = Timeline::new(&events, Duration::from_millis(16));
        let mut scene = Recorder::default();
        timeline.run_ticks(&mut scene, 6);
        assert!(scene.seen.is_empty());
        assert_eq!(timeline.pending(), &events);
    }

    #[test]
    fn total_ticks_skips_the_initial_frame() {
        let policy = RenderPolicy::Sequence {
            directory: PathBuf::from("out"),
            frames: 4,
            ticks_per_frame: 10,
        };
        assert_eq!(policy.total_ticks(), 30);
        assert_eq!(
            frame_path(Path::new("out"), 12),
            PathBuf::from("out/frame_0012.png")
        );
    }
}
