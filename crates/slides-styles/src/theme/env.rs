//! Terminal capability queries used by the default-theme fallback.
//!
//! The resolver only needs two answers: is colour output disabled, and is the
//! background dark. Both sit behind [`TerminalProbe`] so tests can fix them
//! without touching the real environment.

use super::adaptive::{detect_color_mode, ColorMode};

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// The two terminal capability queries the theme fallback consumes.
pub trait TerminalProbe {
    /// True when the environment asks for no colour output.
    fn colors_disabled(&self) -> bool;

    /// True when the terminal background is dark.
    fn has_dark_background(&self) -> bool;
}

// === Real implementations ===

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Probe backed by environment variables and terminal background detection.
///
/// Colour is disabled when `NO_COLOR` is set to a non-empty value, or when
/// `CLICOLOR=0` and `CLICOLOR_FORCE` does not force it back on. The
/// background check goes through [`detect_color_mode`].
#[derive(Debug, Default, Clone)]
pub struct SystemProbe<E: EnvReader = RealEnv> {
    env: E,
}

impl SystemProbe<RealEnv> {
    pub fn new() -> Self {
        Self { env: RealEnv }
    }
}

impl<E: EnvReader> SystemProbe<E> {
    /// Create a probe reading variables from `env`.
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    fn color_forced(&self) -> bool {
        self.env
            .var("CLICOLOR_FORCE")
            .is_some_and(|v| !v.is_empty() && v != "0")
    }
}

impl<E: EnvReader> TerminalProbe for SystemProbe<E> {
    fn colors_disabled(&self) -> bool {
        if self.env.var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return true;
        }
        self.env.var("CLICOLOR").as_deref() == Some("0") && !self.color_forced()
    }

    fn has_dark_background(&self) -> bool {
        detect_color_mode() == ColorMode::Dark
    }
}

// === Mock implementations for testing ===

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Probe with fixed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockProbe {
    colors_disabled: bool,
    dark_background: bool,
}

impl MockProbe {
    /// Colour enabled, dark background.
    pub fn dark() -> Self {
        Self {
            colors_disabled: false,
            dark_background: true,
        }
    }

    /// Colour enabled, light background.
    pub fn light() -> Self {
        Self {
            colors_disabled: false,
            dark_background: false,
        }
    }

    /// Colour disabled. The background answer is irrelevant but set to dark.
    pub fn no_color() -> Self {
        Self {
            colors_disabled: true,
            dark_background: true,
        }
    }
}

impl TerminalProbe for MockProbe {
    fn colors_disabled(&self) -> bool {
        self.colors_disabled
    }

    fn has_dark_background(&self) -> bool {
        self.dark_background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::adaptive::{reset_theme_detector, set_theme_detector};
    use serial_test::serial;

    fn probe(env: MockEnv) -> SystemProbe<MockEnv> {
        SystemProbe::with_env(env)
    }

    #[test]
    fn test_empty_env_allows_color() {
        assert!(!probe(MockEnv::new()).colors_disabled());
    }

    #[test]
    fn test_no_color_disables() {
        assert!(probe(MockEnv::new().with_var("NO_COLOR", "1")).colors_disabled());
        assert!(probe(MockEnv::new().with_var("NO_COLOR", "yes")).colors_disabled());
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        assert!(!probe(MockEnv::new().with_var("NO_COLOR", "")).colors_disabled());
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(probe(MockEnv::new().with_var("CLICOLOR", "0")).colors_disabled());
        assert!(!probe(MockEnv::new().with_var("CLICOLOR", "1")).colors_disabled());
    }

    #[test]
    fn test_clicolor_force_overrides_clicolor() {
        let env = MockEnv::new()
            .with_var("CLICOLOR", "0")
            .with_var("CLICOLOR_FORCE", "1");
        assert!(!probe(env).colors_disabled());

        let env = MockEnv::new()
            .with_var("CLICOLOR", "0")
            .with_var("CLICOLOR_FORCE", "0");
        assert!(probe(env).colors_disabled());
    }

    #[test]
    fn test_clicolor_force_does_not_override_no_color() {
        let env = MockEnv::new()
            .with_var("NO_COLOR", "1")
            .with_var("CLICOLOR_FORCE", "1");
        assert!(probe(env).colors_disabled());
    }

    #[test]
    #[serial]
    fn test_dark_background_follows_detector() {
        let probe = probe(MockEnv::new());

        set_theme_detector(|| ColorMode::Dark);
        assert!(probe.has_dark_background());

        set_theme_detector(|| ColorMode::Light);
        assert!(!probe.has_dark_background());

        reset_theme_detector();
    }

    #[test]
    fn test_mock_probe_answers() {
        assert!(MockProbe::no_color().colors_disabled());
        assert!(!MockProbe::light().has_dark_background());
        assert!(MockProbe::dark().has_dark_background());
    }
}
