//! Design token registry for timing, easing, and spacing values.
//!
//! Tokens are loaded from an embedded TOML file and form a closed set fixed at
//! build time. Every animated or spaced element of the catalog screen reads its
//! values from here so transitions stay consistent across the screen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

/// Embedded design token definitions
const TOKENS_TOML: &str = include_str!("../data/tokens.toml");

/// Kind of design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Durations in milliseconds
    Timing,
    /// Cubic Bezier easing curves
    Easing,
    /// Spacing in terminal cells
    Spacing,
}

impl TokenKind {
    /// All token kinds in display order.
    pub const ALL: [Self; 3] = [Self::Timing, Self::Easing, Self::Spacing];

    /// Lowercase name used in token files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timing => "timing",
            Self::Easing => "easing",
            Self::Spacing => "spacing",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timing" => Ok(Self::Timing),
            "easing" => Ok(Self::Easing),
            "spacing" => Ok(Self::Spacing),
            other => Err(format!(
                "unknown token kind '{other}' (expected timing, easing or spacing)"
            )),
        }
    }
}

/// Cubic Bezier easing curve with control points `(x1, y1)` and `(x2, y2)`.
///
/// The curve runs from `(0, 0)` to `(1, 1)`. The x coordinates must stay in
/// `[0, 1]` so the curve is a function of time; the y coordinates may overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Easing {
    /// First control point x
    pub x1: f64,
    /// First control point y
    pub y1: f64,
    /// Second control point x
    pub x2: f64,
    /// Second control point y
    pub y2: f64,
}

impl Easing {
    /// Linear easing.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a curve from its four control values.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns true if the control points describe a valid timing function.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        in_unit(self.x1) && in_unit(self.x2) && self.y1.is_finite() && self.y2.is_finite()
    }

    /// Samples eased progress for linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`. The curve parameter is found by bisection,
    /// which always converges because x is monotonic for valid curves.
    #[must_use]
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = t;
        for _ in 0..32 {
            s = (lo + hi) / 2.0;
            let x = bezier(self.x1, self.x2, s);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
        }
        bezier(self.y1, self.y2, s)
    }
}

/// One coordinate of a cubic Bezier with fixed endpoints 0 and 1.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

impl From<[f64; 4]> for Easing {
    fn from(points: [f64; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }
}

impl From<Easing> for [f64; 4] {
    fn from(easing: Easing) -> Self {
        [easing.x1, easing.y1, easing.x2, easing.y2]
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// A resolved token value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Duration in milliseconds
    Timing(u32),
    /// Easing curve
    Easing(Easing),
    /// Spacing in cells
    Spacing(u16),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timing(ms) => write!(f, "{ms}ms"),
            Self::Easing(curve) => write!(f, "{curve}"),
            Self::Spacing(cells) => write!(f, "{cells}"),
        }
    }
}

/// Errors raised by the token registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// The requested token is not registered
    #[error("unknown {kind} token '{name}'")]
    UnknownToken {
        /// Kind that was queried
        kind: TokenKind,
        /// Name that was not found
        name: String,
    },
    /// A timing token is zero
    #[error("timing token '{name}' must be a positive duration")]
    InvalidTiming {
        /// Offending token name
        name: String,
    },
    /// An easing token has x control points outside `[0, 1]`
    #[error("easing token '{name}' is not a valid timing curve: {curve}")]
    InvalidEasing {
        /// Offending token name
        name: String,
        /// The rejected curve
        curve: Easing,
    },
    /// The token file could not be parsed
    #[error("failed to parse design tokens: {0}")]
    Parse(String),
}

/// Metadata about the token set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenMeta {
    /// Version of the token file
    pub version: String,
    /// Name of the token set
    pub name: String,
}

/// Root structure of the token TOML file
#[derive(Debug, Deserialize)]
struct TokenFile {
    meta: TokenMeta,
    #[serde(default)]
    timing: BTreeMap<String, u32>,
    #[serde(default)]
    easing: BTreeMap<String, Easing>,
    #[serde(default)]
    spacing: BTreeMap<String, u16>,
}

/// Immutable registry of named design tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    meta: TokenMeta,
    timing: BTreeMap<String, u32>,
    easing: BTreeMap<String, Easing>,
    spacing: BTreeMap<String, u16>,
}

impl DesignTokens {
    /// Loads the registry from the embedded token file.
    pub fn load() -> Result<Self, TokenError> {
        Self::from_toml(TOKENS_TOML)
    }

    /// Parses and validates a token file.
    pub fn from_toml(content: &str) -> Result<Self, TokenError> {
        let file: TokenFile =
            toml::from_str(content).map_err(|e| TokenError::Parse(e.to_string()))?;

        if let Some((name, _)) = file.timing.iter().find(|(_, ms)| **ms == 0) {
            return Err(TokenError::InvalidTiming { name: name.clone() });
        }

        if let Some((name, curve)) = file.easing.iter().find(|(_, curve)| !curve.is_valid()) {
            return Err(TokenError::InvalidEasing {
                name: name.clone(),
                curve: *curve,
            });
        }

        Ok(Self {
            meta: file.meta,
            timing: file.timing,
            easing: file.easing,
            spacing: file.spacing,
        })
    }

    /// Process-wide registry built from the embedded token file on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<DesignTokens> = OnceLock::new();
        SHARED.get_or_init(Self::default)
    }

    /// Looks up any token by kind and name.
    pub fn get(&self, kind: TokenKind, name: &str) -> Result<TokenValue, TokenError> {
        match kind {
            TokenKind::Timing => self.timing(name).map(TokenValue::Timing),
            TokenKind::Easing => self.easing(name).map(TokenValue::Easing),
            TokenKind::Spacing => self.spacing(name).map(TokenValue::Spacing),
        }
    }

    /// Duration in milliseconds for a timing token.
    pub fn timing(&self, name: &str) -> Result<u32, TokenError> {
        self.timing
            .get(name)
            .copied()
            .ok_or_else(|| unknown(TokenKind::Timing, name))
    }

    /// Timing token as a [`Duration`].
    pub fn duration(&self, name: &str) -> Result<Duration, TokenError> {
        self.timing(name).map(|ms| Duration::from_millis(u64::from(ms)))
    }

    /// Easing curve for an easing token.
    pub fn easing(&self, name: &str) -> Result<Easing, TokenError> {
        self.easing
            .get(name)
            .copied()
            .ok_or_else(|| unknown(TokenKind::Easing, name))
    }

    /// Spacing in cells for a spacing token.
    pub fn spacing(&self, name: &str) -> Result<u16, TokenError> {
        self.spacing
            .get(name)
            .copied()
            .ok_or_else(|| unknown(TokenKind::Spacing, name))
    }

    /// All registered tokens of one kind, sorted by name.
    #[must_use]
    pub fn entries(&self, kind: TokenKind) -> Vec<(&str, TokenValue)> {
        match kind {
            TokenKind::Timing => self
                .timing
                .iter()
                .map(|(name, ms)| (name.as_str(), TokenValue::Timing(*ms)))
                .collect(),
            TokenKind::Easing => self
                .easing
                .iter()
                .map(|(name, curve)| (name.as_str(), TokenValue::Easing(*curve)))
                .collect(),
            TokenKind::Spacing => self
                .spacing
                .iter()
                .map(|(name, cells)| (name.as_str(), TokenValue::Spacing(*cells)))
                .collect(),
        }
    }

    /// Name of the token set from metadata.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Token file version from metadata.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.meta.version
    }
}

fn unknown(kind: TokenKind, name: &str) -> TokenError {
    TokenError::UnknownToken {
        kind,
        name: name.to_string(),
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::load().expect("Failed to load embedded tokens.toml")
    }
}

/// Registered token names as constants for type safety
pub mod names {
    /// Shortest transition
    pub const TIMING_INSTANT: &str = "instant";
    /// Quick feedback transitions
    pub const TIMING_FAST: &str = "fast";
    /// Default transition, used for tab selection
    pub const TIMING_STANDARD: &str = "standard";
    /// Slow reveal transitions
    pub const TIMING_SLOW: &str = "slow";
    /// Long ambient orbit loop
    pub const TIMING_ORBITAL_LONG: &str = "orbitalLong";
    /// How long the refresh indicator stays visible
    pub const TIMING_REFRESH: &str = "refresh";

    /// Default curve, used for tab selection
    pub const EASING_STANDARD: &str = "standard";
    /// Entering elements
    pub const EASING_DECELERATE: &str = "decelerate";
    /// Leaving elements
    pub const EASING_ACCELERATE: &str = "accelerate";
    /// Ambient orbit loop
    pub const EASING_ORBITAL: &str = "orbital";

    /// Gap between item cards
    pub const SPACING_CARD_GAP: &str = "cardGap";
    /// Gap between sections
    pub const SPACING_SECTION_GAP: &str = "sectionGap";
    /// Inner card padding
    pub const SPACING_SM: &str = "sm";
}
