//! Kinetic text engine
//!
//! Deterministic, restartable, text-level transitions. Every component is
//! advanced by its owner with an explicit `Instant`, so the same inputs always
//! produce the same frames.
//!
//! # Layers
//!
//! ## Atoms
//! - `timing` - progress and interpolation over explicit instants
//! - `easing` - the curves behind the nav stow slide
//! - `alphabet` - filler character sets and the static seed
//!
//! ## Components
//! - `scramble` - per-character reveal jobs and their owning `ScrambleText`
//! - `rotation` - active index, repeat timer and countdown sampling
//! - `phase` - enter / hold / exit cycle for rotating content
//! - `marquee` - seam-free looping strips
//! - `spinner` - fixed-cadence frame cycling
//! - `bits` - a jittering bit matrix that dims once its message is decoded
//!
//! ## Scheduling
//! - `driver` - a cancellable tokio frame loop for a single element
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use archv_core::kinetic::{ScramblePreset, ScrambleText};
//! use archv_core::MotionGate;
//!
//! let mut text = ScrambleText::new(ScramblePreset::brand(), MotionGate::full());
//! text.reveal("ARCHV", Instant::now());
//! while text.tick(Instant::now()) {
//!     println!("{}", text.display());
//! }
//! ```

// Atoms
pub mod alphabet;
pub mod easing;
pub mod timing;

// Components
pub mod bits;
pub mod marquee;
pub mod phase;
pub mod rotation;
pub mod scramble;
pub mod spinner;

// Scheduling
pub mod driver;

pub use alphabet::Alphabet;
pub use bits::BitMatrix;
pub use driver::{Frame, FrameDriver};
pub use marquee::{ticker_row, LoopStrip, Marquee};
pub use phase::{Phase, PhaseController, PhaseTimings, TransitionStyle};
pub use rotation::RotationScheduler;
pub use scramble::{FrameWindowConfig, ScrambleJob, ScrambleMode, ScramblePreset, ScrambleText};
pub use spinner::Spinner;
