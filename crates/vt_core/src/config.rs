use serde::{Deserialize, Serialize};

use crate::cell::Rgb;

/// Optional seed state for a `Controller`, analogous to a small persisted
/// options struct: everything here has a sensible zero value, and
/// `Controller::new` is equivalent to `Controller::with_config(rows, cols,
/// EngineConfig::default())`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial window title.
    #[serde(default)]
    pub title: String,
    /// Default foreground override, as set by `OSC 10`.
    #[serde(default)]
    pub default_fg: Option<Rgb>,
    /// Default background override, as set by `OSC 11`.
    #[serde(default)]
    pub default_bg: Option<Rgb>,
    /// Initial 256-color palette overrides (index -> RGB), as set by
    /// `OSC 4`.
    #[serde(default)]
    pub palette_overrides: Vec<(u8, Rgb)>,
}
