//! System probe contracts for environment samples read at mount time.

/// Host service exposing point-in-time samples of the browsing environment.
///
/// Both samples are snapshots, not subscriptions: the portfolio view reads the
/// viewport width once when it mounts to pick its collapsed page size, and the theme
/// boot path reads the color-scheme preference once when no stored theme exists.
pub trait SystemProbe {
    /// Returns whether the operating system currently prefers a dark color scheme.
    fn prefers_dark_color_scheme(&self) -> bool;

    /// Returns the current viewport width in CSS pixels, when one can be measured.
    fn viewport_width(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy)]
/// Probe returning fixed samples, for tests and unsupported targets.
pub struct FixedSystemProbe {
    /// Sample returned by [`SystemProbe::prefers_dark_color_scheme`].
    pub prefers_dark: bool,
    /// Sample returned by [`SystemProbe::viewport_width`].
    pub width: Option<f64>,
}

impl Default for FixedSystemProbe {
    fn default() -> Self {
        Self {
            prefers_dark: false,
            width: None,
        }
    }
}

impl FixedSystemProbe {
    /// Builds a probe reporting a light scheme and the given viewport width.
    pub fn with_width(width: f64) -> Self {
        Self {
            prefers_dark: false,
            width: Some(width),
        }
    }
}

impl SystemProbe for FixedSystemProbe {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn viewport_width(&self) -> Option<f64> {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_probe_reports_configured_samples() {
        let probe = FixedSystemProbe {
            prefers_dark: true,
            width: Some(1280.0),
        };
        assert!(probe.prefers_dark_color_scheme());
        assert_eq!(probe.viewport_width(), Some(1280.0));
    }

    #[test]
    fn default_probe_is_light_with_unknown_width() {
        let probe = FixedSystemProbe::default();
        assert!(!probe.prefers_dark_color_scheme());
        assert_eq!(probe.viewport_width(), None);
    }
}
