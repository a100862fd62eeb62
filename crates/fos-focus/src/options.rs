//! Per-call options and their serialisable configuration form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strategy for deciding whether an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayCheck {
    /// Computed visibility plus client rects; detached nodes are hidden
    #[default]
    Full,
    /// Computed visibility plus an explicit `display: none` ancestor walk;
    /// detached nodes can be reported visible
    LegacyFull,
    /// `Full`, and additionally hidden when the bounding box is 0x0
    NonZeroArea,
    /// Never hidden; no style or geometry queries at all
    None,
}

impl DisplayCheck {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::LegacyFull => "legacy-full",
            Self::NonZeroArea => "non-zero-area",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DisplayCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "legacy-full" => Ok(Self::LegacyFull),
            "non-zero-area" => Ok(Self::NonZeroArea),
            "none" => Ok(Self::None),
            other => Err(format!("unknown display check {other:?}")),
        }
    }
}

/// Answer of a shadow-root accessor for one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowLookup<N> {
    /// The element hosts this shadow root
    Attached(N),
    /// The element hosts a shadow root the accessor cannot hand out
    Undisclosed,
    /// No shadow root
    Absent,
}

/// Custom shadow-root accessor
pub type ShadowRootFn<'a, N> = dyn Fn(N) -> ShadowLookup<N> + 'a;

/// How traversal treats shadow roots
pub enum ShadowRootPolicy<'a, N> {
    /// Light DOM only
    Disabled,
    /// Enter open shadow roots through the native accessor
    Open,
    /// Enter open roots, then ask the callback (e.g. for closed roots)
    Custom(&'a ShadowRootFn<'a, N>),
}

impl<N> ShadowRootPolicy<'_, N> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl<N> Default for ShadowRootPolicy<'_, N> {
    fn default() -> Self {
        Self::Disabled
    }
}

impl<N> Clone for ShadowRootPolicy<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ShadowRootPolicy<'_, N> {}

impl<N> fmt::Debug for ShadowRootPolicy<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Open => f.write_str("Open"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for one call into the engine
#[derive(Debug)]
pub struct FocusOptions<'a, N> {
    /// Consider the root element(s) themselves as candidates
    pub include_container: bool,
    pub display_check: DisplayCheck,
    pub shadow_roots: ShadowRootPolicy<'a, N>,
}

impl<N> Default for FocusOptions<'_, N> {
    fn default() -> Self {
        Self {
            include_container: false,
            display_check: DisplayCheck::Full,
            shadow_roots: ShadowRootPolicy::Disabled,
        }
    }
}

impl<N> Clone for FocusOptions<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for FocusOptions<'_, N> {}

impl<'a, N> FocusOptions<'a, N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_container(mut self, include: bool) -> Self {
        self.include_container = include;
        self
    }

    pub fn with_display_check(mut self, check: DisplayCheck) -> Self {
        self.display_check = check;
        self
    }

    /// Enter open shadow roots through the native accessor
    pub fn with_open_shadow_roots(mut self) -> Self {
        self.shadow_roots = ShadowRootPolicy::Open;
        self
    }

    /// Enter shadow roots through a caller-supplied accessor
    pub fn with_shadow_root_fn(mut self, accessor: &'a ShadowRootFn<'a, N>) -> Self {
        self.shadow_roots = ShadowRootPolicy::Custom(accessor);
        self
    }
}

/// Serialisable subset of [`FocusOptions`]
///
/// Field names accept both snake_case and the camelCase spelling used
/// by script-facing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    #[serde(alias = "includeContainer")]
    pub include_container: bool,
    #[serde(alias = "displayCheck")]
    pub display_check: DisplayCheck,
    /// `true` enables traversal of open shadow roots
    #[serde(alias = "getShadowRoot")]
    pub get_shadow_root: bool,
}

impl FocusConfig {
    /// Per-call options described by this configuration
    pub fn options<'a, N>(&self) -> FocusOptions<'a, N> {
        FocusOptions {
            include_container: self.include_container,
            display_check: self.display_check,
            shadow_roots: if self.get_shadow_root {
                ShadowRootPolicy::Open
            } else {
                ShadowRootPolicy::Disabled
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_check_round_trip_names() {
        for check in [
            DisplayCheck::Full,
            DisplayCheck::LegacyFull,
            DisplayCheck::NonZeroArea,
            DisplayCheck::None,
        ] {
            assert_eq!(check.as_str().parse::<DisplayCheck>(), Ok(check));
        }
        assert!("partial".parse::<DisplayCheck>().is_err());
    }

    #[test]
    fn test_defaults() {
        let options: FocusOptions<'_, u32> = FocusOptions::default();
        assert!(!options.include_container);
        assert_eq!(options.display_check, DisplayCheck::Full);
        assert!(!options.shadow_roots.is_enabled());
    }

    #[test]
    fn test_config_to_options() {
        let config = FocusConfig {
            include_container: true,
            display_check: DisplayCheck::NonZeroArea,
            get_shadow_root: true,
        };
        let options: FocusOptions<'_, u32> = config.options();
        assert!(options.include_container);
        assert_eq!(options.display_check, DisplayCheck::NonZeroArea);
        assert!(matches!(options.shadow_roots, ShadowRootPolicy::Open));
    }

    #[test]
    fn test_custom_policy_debug() {
        let accessor = |_: u32| ShadowLookup::<u32>::Undisclosed;
        let options: FocusOptions<'_, u32> = FocusOptions::new().with_shadow_root_fn(&accessor);
        assert_eq!(format!("{:?}", options.shadow_roots), "Custom(..)");
    }
}
