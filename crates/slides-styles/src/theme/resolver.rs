//! Turning a theme identifier into renderer options.

use std::borrow::Cow;

use super::env::{SystemProbe, TerminalProbe};
use super::fetch::{HttpFetcher, ThemeFetcher};
use super::options::RendererOptions;
use super::preset::Preset;

/// The JSON style bundled with the binary, used when nothing else applies.
pub const DEFAULT_THEME: &[u8] = include_bytes!("../../assets/theme.json");

/// Resolves theme identifiers into [`RendererOptions`].
///
/// Resolution never fails. Identifiers are tried in order:
///
/// 1. an exact preset name (`ascii`, `light`, `dark`, `notty`, `pink`,
///    `dracula`, `tokyo-night`);
/// 2. an `http://` or `https://` URL, fetched with the [`ThemeFetcher`];
/// 3. an existing filesystem path, handed over as a style file;
/// 4. anything else falls back to [`default_options`](Self::default_options).
///
/// A failed fetch also lands on the default. Every result has syntax
/// highlighting enabled.
///
/// ```rust
/// use slides_styles::{MockFetcher, MockProbe, Preset, StyleSource, ThemeResolver};
///
/// let resolver = ThemeResolver::with_parts(MockFetcher::failing("offline"), MockProbe::light());
///
/// let opts = resolver.resolve("dracula");
/// assert_eq!(opts.style(), &StyleSource::Preset(Preset::Dracula));
///
/// let opts = resolver.resolve("https://example.com/theme.json");
/// assert_eq!(opts.style(), &StyleSource::Preset(Preset::Light));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeResolver<F = HttpFetcher, P = SystemProbe> {
    fetcher: F,
    probe: P,
    default_theme: Cow<'static, [u8]>,
}

impl ThemeResolver {
    /// A resolver that fetches over HTTP and probes the real terminal.
    pub fn new() -> Self {
        Self::with_parts(HttpFetcher::new(), SystemProbe::new())
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ThemeFetcher, P: TerminalProbe> ThemeResolver<F, P> {
    pub fn with_parts(fetcher: F, probe: P) -> Self {
        Self {
            fetcher,
            probe,
            default_theme: Cow::Borrowed(DEFAULT_THEME),
        }
    }

    /// Replaces the embedded JSON style used by the dark-background fallback.
    pub fn with_default_theme(mut self, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.default_theme = bytes.into();
        self
    }

    /// Resolves `theme` into renderer options.
    pub fn resolve(&self, theme: &str) -> RendererOptions {
        if let Some(preset) = Preset::from_name(theme) {
            tracing::debug!(theme, "using built-in style");
            return RendererOptions::preset(preset);
        }

        if theme.starts_with("http://") || theme.starts_with("https://") {
            return self.resolve_url(theme);
        }

        if std::fs::metadata(theme).is_ok() {
            tracing::debug!(theme, "using style file");
            return RendererOptions::file(theme);
        }

        tracing::debug!(theme, "theme not recognised, using default");
        self.default_options()
    }

    fn resolve_url(&self, url: &str) -> RendererOptions {
        match self.fetcher.fetch(url) {
            Ok(fetched) => {
                if !fetched.is_success() {
                    tracing::warn!(
                        url,
                        status = fetched.status,
                        "theme server answered with an error status, using its body anyway"
                    );
                }
                RendererOptions::json(fetched.body)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "failed to fetch theme, using default");
                self.default_options()
            }
        }
    }

    /// The default-theme fallback.
    ///
    /// - colour disabled by the environment: the `notty` preset;
    /// - light background: the `light` preset;
    /// - otherwise: the embedded JSON style.
    pub fn default_options(&self) -> RendererOptions {
        if self.probe.colors_disabled() {
            tracing::debug!("colour disabled, using notty style");
            return RendererOptions::preset(Preset::Notty);
        }
        if !self.probe.has_dark_background() {
            tracing::debug!("light background, using light style");
            return RendererOptions::preset(Preset::Light);
        }
        RendererOptions::json(self.default_theme.clone())
    }
}

/// Resolves `theme` with a [`ThemeResolver::new`] resolver.
///
/// URL identifiers block on the network.
pub fn select_theme(theme: &str) -> RendererOptions {
    ThemeResolver::new().resolve(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::env::{MockEnv, MockProbe};
    use crate::theme::fetch::MockFetcher;
    use crate::theme::options::{Formatter, StyleSource};
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    fn resolver(probe: MockProbe) -> ThemeResolver<MockFetcher, MockProbe> {
        ThemeResolver::with_parts(MockFetcher::ok(r#"{"from":"network"}"#), probe)
    }

    fn embedded() -> StyleSource {
        StyleSource::Json(Cow::Borrowed(DEFAULT_THEME))
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` under a debug-level subscriber and returns what it logged.
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_every_preset_resolves_by_name() {
        let resolver = resolver(MockProbe::dark());
        for preset in Preset::ALL {
            let opts = resolver.resolve(preset.as_str());
            assert_eq!(opts.style(), &StyleSource::Preset(preset));
            assert_eq!(opts.formatter(), Formatter::Terminal256);
        }
        assert!(resolver.fetcher.requests().is_empty());
    }

    #[test]
    fn test_empty_identifier_falls_back() {
        let opts = resolver(MockProbe::dark()).resolve("");
        assert_eq!(opts.style(), &embedded());
        assert_eq!(opts.formatter(), Formatter::Terminal256);
    }

    #[test]
    fn test_unknown_identifier_falls_back() {
        let opts = resolver(MockProbe::light()).resolve("no-such-theme-or-file");
        assert_eq!(opts.style(), &StyleSource::Preset(Preset::Light));
    }

    #[test]
    fn test_fallback_no_color_selects_notty() {
        let opts = resolver(MockProbe::no_color()).default_options();
        assert_eq!(opts.style(), &StyleSource::Preset(Preset::Notty));
        assert_eq!(opts.formatter(), Formatter::Terminal256);
    }

    #[test]
    fn test_fallback_light_background_selects_light() {
        let opts = resolver(MockProbe::light()).default_options();
        assert_eq!(opts.style(), &StyleSource::Preset(Preset::Light));
    }

    #[test]
    fn test_fallback_dark_background_selects_embedded() {
        let opts = resolver(MockProbe::dark()).default_options();
        assert_eq!(opts.style(), &embedded());
    }

    #[test]
    fn test_fallback_with_env_probe() {
        let probe = SystemProbe::with_env(MockEnv::new().with_var("NO_COLOR", "1"));
        let resolver = ThemeResolver::with_parts(MockFetcher::ok("{}"), probe);
        assert_eq!(
            resolver.resolve("").style(),
            &StyleSource::Preset(Preset::Notty)
        );
    }

    #[test]
    fn test_custom_default_theme() {
        let opts = resolver(MockProbe::dark())
            .with_default_theme(b"{}".as_slice())
            .resolve("");
        assert_eq!(opts.style(), &StyleSource::Json(Cow::Borrowed(b"{}".as_slice())));
    }

    #[test]
    fn test_url_uses_fetched_body() {
        let resolver = resolver(MockProbe::dark());
        let opts = resolver.resolve("https://example.com/theme.json");
        assert_eq!(
            opts.style(),
            &StyleSource::Json(Cow::Owned(br#"{"from":"network"}"#.to_vec()))
        );
        assert_eq!(resolver.fetcher.requests(), vec!["https://example.com/theme.json"]);
    }

    #[test]
    fn test_http_prefix_also_fetches() {
        let resolver = resolver(MockProbe::dark());
        resolver.resolve("http://example.com/theme.json");
        assert_eq!(resolver.fetcher.requests().len(), 1);
    }

    #[test]
    fn test_url_fetch_failure_falls_back() {
        let resolver =
            ThemeResolver::with_parts(MockFetcher::failing("connection refused"), MockProbe::dark());
        let opts = resolver.resolve("http://localhost:1/theme.json");
        assert_eq!(opts.style(), &embedded());

        let resolver =
            ThemeResolver::with_parts(MockFetcher::failing("connection refused"), MockProbe::light());
        let opts = resolver.resolve("http://localhost:1/theme.json");
        assert_eq!(opts.style(), &StyleSource::Preset(Preset::Light));
    }

    #[test]
    fn test_error_status_body_is_passed_through() {
        let resolver =
            ThemeResolver::with_parts(MockFetcher::with_status(404, "not found"), MockProbe::dark());
        let opts = resolver.resolve("https://example.com/missing.json");
        assert_eq!(
            opts.style(),
            &StyleSource::Json(Cow::Owned(b"not found".to_vec()))
        );
    }

    #[test]
    fn test_fetch_failure_is_logged_as_warning() {
        let resolver =
            ThemeResolver::with_parts(MockFetcher::failing("connection refused"), MockProbe::dark());
        let logs = capture_logs(|| {
            resolver.resolve("https://example.com/theme.json");
        });
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("failed to fetch theme, using default"), "{}", logs);
        assert!(logs.contains("connection refused"), "{}", logs);
    }

    #[test]
    fn test_error_status_is_logged_as_warning() {
        let resolver =
            ThemeResolver::with_parts(MockFetcher::with_status(503, "busy"), MockProbe::dark());
        let logs = capture_logs(|| {
            resolver.resolve("https://example.com/theme.json");
        });
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("status=503"), "{}", logs);
    }

    #[test]
    fn test_successful_fetch_logs_no_warning() {
        let logs = capture_logs(|| {
            resolver(MockProbe::dark()).resolve("https://example.com/theme.json");
        });
        assert!(!logs.contains("WARN"), "{}", logs);
    }

    #[test]
    fn test_fallbacks_are_logged_at_debug() {
        let logs = capture_logs(|| {
            resolver(MockProbe::light()).resolve("no-such-theme");
        });
        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(logs.contains("theme not recognised, using default"), "{}", logs);
        assert!(logs.contains("light background, using light style"), "{}", logs);

        let logs = capture_logs(|| {
            resolver(MockProbe::no_color()).resolve("");
        });
        assert!(logs.contains("colour disabled, using notty style"), "{}", logs);
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let resolver = resolver(MockProbe::dark());
        let opts = resolver.resolve("HTTPS://example.com/theme.json");
        assert!(resolver.fetcher.requests().is_empty());
        assert_eq!(opts.style(), &embedded());
    }

    #[test]
    fn test_existing_file_is_used_without_reading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, "not json at all").unwrap();

        let opts = resolver(MockProbe::dark()).resolve(path.to_str().unwrap());
        assert_eq!(opts.style(), &StyleSource::File(path));
        assert_eq!(opts.formatter(), Formatter::Terminal256);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let opts = resolver(MockProbe::light()).resolve(path.to_str().unwrap());
        assert_eq!(opts.style(), &StyleSource::Preset(Preset::Light));
    }

    #[test]
    fn test_embedded_theme_is_json_object() {
        let value: serde_json::Value = serde_json::from_slice(DEFAULT_THEME).unwrap();
        assert!(value.is_object());
        assert!(value.get("document").is_some());
        assert!(value.get("code_block").is_some());
    }
}
