//! Speed resolver.

use serde::Serialize;

use crate::settings::PolicyConfig;

/// Animation speed after applying the configured override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSpeed {
    spaces_per_second: f64,
    units_per_second: f64,
}

impl EffectiveSpeed {
    /// Resolves the speed for a grid of `grid_size` world units per space.
    ///
    /// A positive `config.speed_override` wins; anything else falls back to
    /// `default_spaces_per_second`, which the host guarantees to be positive.
    #[must_use]
    pub fn resolve(config: &PolicyConfig, grid_size: f64, default_spaces_per_second: f64) -> Self {
        let spaces_per_second = if config.speed_override > 0.0 {
            config.speed_override
        } else {
            default_spaces_per_second
        };

        Self {
            spaces_per_second,
            units_per_second: grid_size * spaces_per_second,
        }
    }

    /// Speed in grid spaces per second.
    #[must_use]
    pub const fn spaces_per_second(&self) -> f64 { self.spaces_per_second }

    /// Speed in world units per second.
    #[must_use]
    pub const fn units_per_second(&self) -> f64 { self.units_per_second }

    /// Returns `true` when this speed differs from the host default.
    ///
    /// Compared exactly: any override other than the default itself counts.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn differs_from(&self, default_spaces_per_second: f64) -> bool {
        self.spaces_per_second != default_spaces_per_second
    }
}
