//! Shared constants for the movement animation policy.
//!
//! # Organization
//!
//! - `speed` - Native animation speed of the host
//! - `fields` - Document fields that make a change positional
//! - `animation` - Naming of the host's movement animations

/// Native host speed values.
pub mod speed {
    /// Native token movement speed of the host, in grid spaces per second.
    ///
    /// Used by `AnimationPolicy::native`; hosts with another native speed
    /// pass their own to `AnimationPolicy::new`.
    pub const NATIVE_SPACES_PER_SECOND: f64 = 10.0;

    /// Milliseconds per second, used in every duration conversion.
    pub const MS_PER_SECOND: f64 = 1000.0;
}

/// Field names carried by entity update diffs.
pub mod fields {
    /// Horizontal position field.
    pub const X: &str = "x";

    /// Vertical position field.
    pub const Y: &str = "y";

    /// Fields whose presence in a pending change makes the change a move.
    pub const POSITIONAL: &[&str] = &[X, Y];
}

/// Host animation naming conventions.
pub mod animation {
    /// Prefix of every token animation name (`Token.<id>.<kind>`).
    pub const TOKEN_PREFIX: &str = "Token.";

    /// Suffix of token movement animation names.
    pub const MOVEMENT_SUFFIX: &str = ".animateMovement";
}
