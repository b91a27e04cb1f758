//! Procedural analog clock face.
//!
//! Two pieces, run in order:
//!
//! | Piece | Runs | Does |
//! |-------|------|------|
//! | [`build`] | once | lays out body, ticks, mounts, ring and hands from a [`ClockConfig`] |
//! | [`step`] / [`HandAnimator`] | every frame | poses the hands for a [`TimeSample`] |
//!
//! Both are pure geometry: nothing here draws. The resulting
//! [`MeshList`](horologe_engine::scene::MeshList) is handed to whatever
//! [`SceneSink`](horologe_engine::scene::SceneSink) does the drawing.
//!
//! # Quick start
//!
//! ```rust
//! use horologe_face::{build, step, ClockConfig, FaceSide, HandKind, TimeSample};
//!
//! let config = ClockConfig::default().with_secondary_face(Some(-9));
//! let mut face = build(&config).unwrap();
//!
//! step(&config, &mut face, TimeSample::new(15, 0, 0).unwrap()).unwrap();
//!
//! let hour = face.hand(HandKind::Hour, FaceSide::Front).unwrap();
//! assert_eq!(hour.angle, std::f32::consts::FRAC_PI_2);
//! ```

pub mod animator;
pub mod builder;
pub mod config;
pub mod error;
pub mod hand;
pub mod sample;
pub mod tick;

pub use animator::{step, HandAnimator};
pub use builder::{build, FaceGeometry, FacePart, PartRole};
pub use config::{ClockConfig, FacePalette, HandSet, HourMotion, SecondaryHands};
pub use error::FaceError;
pub use hand::{FaceSide, Hand, HandKind};
pub use sample::TimeSample;
pub use tick::TickMark;
