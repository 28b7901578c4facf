//! Cancellable frame loop for a single element
//!
//! [`FrameDriver`] runs one [`ScrambleJob`] on a tokio interval and streams the
//! intermediate strings over a channel. It owns the task handle: starting a
//! new job aborts the old task, and so does dropping the driver, so a
//! superseded job can never deliver another frame.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::scramble::ScrambleJob;
use super::timing::frame_interval;
use crate::motion::MotionGate;

/// One emitted display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Which `start` call produced this frame
    pub generation: u64,
    pub text: String,
    /// Set on the final, resolved frame
    pub done: bool,
}

#[derive(Debug)]
pub struct FrameDriver {
    period: Duration,
    gate: MotionGate,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl FrameDriver {
    pub fn new(fps: u32, gate: MotionGate) -> Self {
        Self {
            period: frame_interval(fps),
            gate,
            generation: 0,
            handle: None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a frame loop is still alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start animating `job`, aborting whatever ran before.
    ///
    /// Jobs must be created against the tokio clock
    /// (`tokio::time::Instant::now().into_std()`) so that paused test time
    /// and the frame loop agree. Under reduced motion, or for a job that is
    /// already resolved, a single final frame is sent and no task is spawned.
    pub fn start(
        &mut self,
        mut job: ScrambleJob,
        mut rng: StdRng,
    ) -> mpsc::UnboundedReceiver<Frame> {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = mpsc::unbounded_channel();

        if self.gate.is_reduced() || job.is_done() {
            job.settle();
            let _ = tx.send(Frame {
                generation,
                text: job.display().to_string(),
                done: true,
            });
            return rx;
        }

        let period = self.period;
        debug!(generation, ?period, "Starting frame loop");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                let now = tokio::time::Instant::now().into_std();
                let more = job.advance(now, &mut rng);
                let frame = Frame {
                    generation,
                    text: job.display().to_string(),
                    done: !more,
                };
                if tx.send(frame).is_err() {
                    debug!(generation, "Frame receiver dropped, stopping loop");
                    break;
                }
                if !more {
                    break;
                }
            }
        }));
        rx
    }

    /// Abort the live loop, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!(generation = self.generation, "Aborting frame loop");
            }
            handle.abort();
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetic::alphabet::Alphabet;
    use rand::SeedableRng;

    fn now() -> std::time::Instant {
        tokio::time::Instant::now().into_std()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(8)
    }

    fn timed(target: &str, millis: u64) -> ScrambleJob {
        ScrambleJob::timed(
            target,
            Alphabet::glitch(),
            Duration::from_millis(millis),
            60,
            false,
            now(),
        )
    }

    async fn drain(rx: &mut mpsc::UnboundedReceiver<Frame>) -> Vec<Frame> {
        let mut frames = Vec::new();
        while let Some(frame) = rx.recv().await {
            frames.push(frame);
        }
        frames
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_exact_target() {
        let mut driver = FrameDriver::new(60, MotionGate::full());
        let mut rx = driver.start(timed("TRUST WITHOUT DRAMA", 200), rng());

        let frames = drain(&mut rx).await;
        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "TRUST WITHOUT DRAMA");
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
        // 200ms at 16ms per frame, plus the immediate first tick
        assert!(frames.len() >= 12 && frames.len() <= 15, "{} frames", frames.len());
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_aborts_previous_loop() {
        let mut driver = FrameDriver::new(60, MotionGate::full());
        let mut first = driver.start(timed("FIRST", 10_000), rng());
        let frame = first.recv().await.unwrap();
        assert_eq!(frame.generation, 1);

        let mut second = driver.start(timed("SECOND", 100), rng());
        let stale = drain(&mut first).await;
        assert!(stale.iter().all(|f| !f.done && f.generation == 1));

        let frames = drain(&mut second).await;
        assert!(frames.iter().all(|f| f.generation == 2));
        assert_eq!(frames.last().unwrap().text, "SECOND");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_loop() {
        let mut driver = FrameDriver::new(30, MotionGate::full());
        let mut rx = driver.start(timed("GONE", 10_000), rng());
        rx.recv().await.unwrap();
        drop(driver);

        let rest = drain(&mut rx).await;
        assert!(rest.iter().all(|f| !f.done));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reduced_motion_sends_single_final_frame() {
        let mut driver = FrameDriver::new(60, MotionGate::reduced());
        let mut rx = driver.start(timed("Simple • Quiet • True", 900), rng());
        let frames = drain(&mut rx).await;
        assert_eq!(
            frames,
            vec![Frame {
                generation: 1,
                text: "Simple • Quiet • True".to_string(),
                done: true,
            }]
        );
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_delivery() {
        let mut driver = FrameDriver::new(60, MotionGate::full());
        let mut rx = driver.start(timed("CANCELLED", 5_000), rng());
        rx.recv().await.unwrap();
        driver.cancel();
        let rest = drain(&mut rx).await;
        assert!(rest.iter().all(|f| !f.done));
    }
}
