use std::time::{Duration, Instant};

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

use archv_core::kinetic::{Phase, PhaseController, PhaseTimings, TransitionStyle};
use archv_core::{AppConfig, MotionGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Scramble in, scramble out toward blanks
    Scramble,
    /// Fade out and back in
    Fade,
    /// Swap with a short ghost layer
    Glitch,
}

impl StyleArg {
    fn timings(self, hold: Duration) -> PhaseTimings {
        let ms = Duration::from_millis;
        match self {
            StyleArg::Scramble => PhaseTimings::new(ms(400), hold, ms(240)),
            StyleArg::Fade => PhaseTimings::new(ms(300), hold, ms(250)),
            StyleArg::Glitch => PhaseTimings::new(ms(170), hold, ms(150)),
        }
    }

    fn style(self) -> TransitionStyle {
        match self {
            StyleArg::Scramble => TransitionStyle::scramble(),
            StyleArg::Fade => TransitionStyle::Fade,
            StyleArg::Glitch => TransitionStyle::Glitch,
        }
    }
}

pub async fn run(
    config: &AppConfig,
    items: Vec<String>,
    cycles: u32,
    hold_ms: u64,
    style: StyleArg,
    gate: MotionGate,
) -> Result<()> {
    let start = Instant::now();
    let mut controller = PhaseController::new(
        items,
        style.timings(Duration::from_millis(hold_ms)),
        style.style(),
        gate,
        start,
    )
    .with_poll_interval(Duration::from_millis(config.rotation.poll_interval_ms), start);

    if controller.is_static() {
        println!("static    [0] {}", controller.display());
        return Ok(());
    }

    let mut last = (controller.phase(), controller.active_index());
    print_transition(&controller, Duration::ZERO);

    let cycles = cycles.max(1);
    let mut completed = 0;
    while completed < cycles {
        let wait = controller.next_boundary_in(Instant::now()).unwrap_or_default();
        tokio::time::sleep(wait).await;

        let now = Instant::now();
        if let Some(index) = controller.update(now) {
            completed += 1;
            debug!(index, completed, "Rotation cycle completed");
        }

        let current = (controller.phase(), controller.active_index());
        if current != last {
            print_transition(&controller, now.saturating_duration_since(start));
            last = current;
        }
    }

    Ok(())
}

fn print_transition(controller: &PhaseController, at: Duration) {
    let index = controller.active_index();
    let item = controller.items().get(index).map(String::as_str).unwrap_or("");
    let marker = match controller.phase() {
        Phase::Entering => "→",
        Phase::Holding => "·",
        Phase::Exiting => "←",
    };
    println!(
        "{:>7}ms {} {:<9}[{}] {}",
        at.as_millis(),
        marker,
        controller.phase().label(),
        index,
        item
    );
}
