//! Recognizer configuration
//!
//! Supports multiple profiles (debug, release) with different thresholds.
//! The configuration is handed to the recognizer by value and is fixed for
//! the lifetime of the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stationary samples before a long-press fires (about one second of touch input)
pub const DEFAULT_LONG_PRESS_THRESHOLD: u32 = 30;

/// Average pixels per sample a release must exceed to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 40;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("long_press_threshold must be at least 1 sample")]
    ZeroLongPressThreshold,

    #[error("swipe_threshold must not be negative (got {0})")]
    NegativeSwipeThreshold(i32),
}

/// Which detectors take part in recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledGestures {
    pub long_press: bool,
    pub swipe: bool,
    pub pinch: bool,
}

impl EnabledGestures {
    /// Every detector enabled
    pub fn all() -> Self {
        Self {
            long_press: true,
            swipe: true,
            pinch: true,
        }
    }

    /// Every detector disabled
    pub fn none() -> Self {
        Self {
            long_press: false,
            swipe: false,
            pinch: false,
        }
    }

    /// Returns true if at least one detector is enabled
    pub fn any(&self) -> bool {
        self.long_press || self.swipe || self.pinch
    }
}

impl Default for EnabledGestures {
    fn default() -> Self {
        Self::all()
    }
}

bitflags! {
    /// Legacy event-mask bits, for hosts that still select gestures by mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GestureMask: u32 {
        const LONG_PRESS = 0x10;
        const PINCH = 0x20;
        const SWIPE = 0x40;
    }
}

impl From<GestureMask> for EnabledGestures {
    fn from(mask: GestureMask) -> Self {
        Self {
            long_press: mask.contains(GestureMask::LONG_PRESS),
            swipe: mask.contains(GestureMask::SWIPE),
            pinch: mask.contains(GestureMask::PINCH),
        }
    }
}

impl From<EnabledGestures> for GestureMask {
    fn from(enabled: EnabledGestures) -> Self {
        let mut mask = GestureMask::empty();
        mask.set(GestureMask::LONG_PRESS, enabled.long_press);
        mask.set(GestureMask::SWIPE, enabled.swipe);
        mask.set(GestureMask::PINCH, enabled.pinch);
        mask
    }
}

/// Gesture recognizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Detectors taking part in recognition
    pub enabled: EnabledGestures,
    /// Stationary Move samples that must be exceeded before a long-press fires
    pub long_press_threshold: u32,
    /// Pixels per sample a swipe must exceed
    pub swipe_threshold: i32,
}

impl GestureConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources are layered in this order:
    /// 1. Built-in defaults
    /// 2. config/{profile}.toml
    /// 3. Environment variables with prefix GESTURE_ (e.g., GESTURE_ENABLED__PINCH=false)
    ///
    /// Config files are searched for next to the executable first, then in
    /// the current directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let dir = Self::find_config_dir().unwrap_or_else(|| PathBuf::from("config"));
        Self::load_from_dir(&dir, profile)
    }

    /// Loads a profile from an explicit config directory
    ///
    /// A missing profile file is not an error; defaults and environment
    /// overrides still apply.
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);

        let config = Config::builder()
            .add_source(File::from(profile_path.as_path()).required(false))
            // Nested fields use __ (GESTURE_ENABLED__SWIPE), the prefix a single _
            .add_source(
                Environment::with_prefix("GESTURE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        // Fields absent from every source fall back to serde defaults
        let config: GestureConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration using the GESTURE_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("GESTURE_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Checks thresholds for values no recognizer can work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_threshold == 0 {
            return Err(ConfigError::ZeroLongPressThreshold);
        }
        if self.swipe_threshold < 0 {
            return Err(ConfigError::NegativeSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }

    /// Builder method to select the enabled detectors
    pub fn with_enabled(mut self, enabled: impl Into<EnabledGestures>) -> Self {
        self.enabled = enabled.into();
        self
    }

    /// Builder method to set the long-press threshold in samples
    pub fn with_long_press_threshold(mut self, samples: u32) -> Self {
        self.long_press_threshold = samples;
        self
    }

    /// Builder method to derive the long-press threshold from a hold delay
    ///
    /// `sample_rate` is the expected number of Move samples per second while a
    /// finger rests on the screen.
    pub fn with_long_press_delay(mut self, delay: Duration, sample_rate: f64) -> Self {
        self.long_press_threshold = long_press_threshold_for(delay, sample_rate);
        self
    }

    /// Builder method to set the swipe velocity threshold
    pub fn with_swipe_threshold(mut self, pixels_per_sample: i32) -> Self {
        self.swipe_threshold = pixels_per_sample;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            enabled: EnabledGestures::all(),
            long_press_threshold: DEFAULT_LONG_PRESS_THRESHOLD,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Converts a hold delay into a stationary sample count, never below one
pub fn long_press_threshold_for(delay: Duration, sample_rate: f64) -> u32 {
    let samples = (delay.as_secs_f64() * sample_rate).round();
    if samples.is_finite() && samples >= 1.0 {
        samples.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
