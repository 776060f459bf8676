//! Cosmetic FX toggles and the environment gate in front of them.

use super::constants::{FALLBACK_CORES, FX_MIN_CORES};

/// User-facing FX toggles. Sub-options only matter once `enabled` is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FxConfig {
    pub enabled: bool,
    pub scanlines: bool,
    pub rgb_split_on_hover: bool,
    pub depth_fade: bool,
    pub min_cores: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            scanlines: true,
            rgb_split_on_hover: true,
            depth_fade: true,
            min_cores: FX_MIN_CORES,
        }
    }
}

/// What the browser tells us about the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FxEnvironment {
    pub reduced_motion: bool,
    /// `navigator.hardwareConcurrency`, if the browser exposes it.
    pub cores: Option<u32>,
}

impl FxEnvironment {
    pub fn cores_or_fallback(&self) -> u32 {
        match self.cores {
            Some(n) if n > 0 => n,
            _ => FALLBACK_CORES,
        }
    }
}

/// Effects that actually render this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectiveFx {
    pub active: bool,
    pub scanlines: bool,
    pub rgb_split_on_hover: bool,
    pub depth_fade: bool,
}

impl FxConfig {
    pub fn environment_allows(&self, env: &FxEnvironment) -> bool {
        !env.reduced_motion && env.cores_or_fallback() >= self.min_cores
    }

    pub fn effective(&self, env: &FxEnvironment) -> EffectiveFx {
        let active = self.enabled && self.environment_allows(env);
        EffectiveFx {
            active,
            scanlines: active && self.scanlines,
            rgb_split_on_hover: active && self.rgb_split_on_hover,
            depth_fade: active && self.depth_fade,
        }
    }
}
