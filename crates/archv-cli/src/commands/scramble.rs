use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use crossterm::{
    cursor::MoveToColumn,
    execute,
    terminal::{Clear, ClearType},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use archv_core::kinetic::{Alphabet, FrameDriver, FrameWindowConfig, ScrambleJob};
use archv_core::{AppConfig, MotionGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScrambleModeArg {
    /// Random per-character frame windows
    Frame,
    /// Left-to-right reveal over a fixed duration
    Timed,
}

pub struct ScrambleArgs {
    pub text: String,
    pub mode: ScrambleModeArg,
    pub duration_ms: u64,
    pub shift: u32,
    pub alphabet: String,
    pub reverse: bool,
    pub from: Option<String>,
    pub fps: Option<u32>,
}

pub async fn run(config: &AppConfig, args: ScrambleArgs, gate: MotionGate) -> Result<()> {
    let alphabet = Alphabet::from_name(&args.alphabet);
    let mut rng = StdRng::from_entropy();

    let job = match args.mode {
        ScrambleModeArg::Frame => {
            let from = args.from.unwrap_or_else(|| alphabet.seed(&args.text));
            ScrambleJob::frame_window(
                &from,
                &args.text,
                alphabet,
                FrameWindowConfig::from(&config.scramble),
                &mut rng,
            )
        }
        ScrambleModeArg::Timed => ScrambleJob::timed(
            &args.text,
            alphabet,
            Duration::from_millis(args.duration_ms),
            args.shift,
            args.reverse,
            tokio::time::Instant::now().into_std(),
        ),
    };

    let fps = args.fps.unwrap_or(config.ui.animation_fps);
    let mut driver = FrameDriver::new(fps, gate);
    let mut frames = driver.start(job, rng);

    let mut stdout = io::stdout();
    let in_place = stdout.is_terminal();
    let mut count = 0u32;

    while let Some(frame) = frames.recv().await {
        count += 1;
        if in_place {
            execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            write!(stdout, "{}", frame.text)?;
            stdout.flush()?;
        } else {
            writeln!(stdout, "{}", frame.text)?;
        }
        if frame.done {
            break;
        }
    }

    if in_place {
        writeln!(stdout)?;
    }
    debug!(frames = count, "Scramble finished");
    Ok(())
}
