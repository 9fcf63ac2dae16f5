//! Token Animation - movement animation policy for grid-based virtual tabletops.
//!
//! Every time a token moves, the host asks the policy whether and how fast
//! the movement is animated: skipped, capped to a maximum duration, scaled
//! to a custom speed, or left at the host's native timing. A modifier key
//! held while dropping a token forces the movement to conclude instantly,
//! and in-flight animations can be concluded in place across every client.
//!
//! # Example
//!
//! ```
//! use token_animation_lib::movement::{DisplacementRequest, Point};
//! use token_animation_lib::policy::{AnimationPolicy, PolicyDecision};
//! use token_animation_lib::settings::{MemorySettings, PolicyConfig, SettingKey, SettingValue};
//!
//! let mut settings = MemorySettings::with_defaults();
//! settings.set(SettingKey::DurationCap, SettingValue::Number(1000.0));
//!
//! // 20 grid spaces at the native 10 spaces/s take 2000ms.
//! let request = DisplacementRequest::new(Point::new(0.0, 0.0), Point::new(2000.0, 0.0), 100.0);
//! let decision = AnimationPolicy::native()
//!     .decide(Some(&request), &PolicyConfig::snapshot(&settings))
//!     .unwrap();
//!
//! assert_eq!(decision, PolicyDecision::CapAt(1000.0));
//! ```

pub mod cli;
pub mod conclude;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod executor;
pub mod movement;
pub mod policy;
pub mod settings;

pub use coordinator::MovementCoordinator;
pub use error::{AnimationError, AnimationResult, CliError};
pub use policy::{AnimationPolicy, PolicyDecision};
