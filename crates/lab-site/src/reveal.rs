//! Scroll-triggered reveal.
//!
//! Sections fade in the first time enough of them is visible. The browser
//! side reports intersection ratios; [`RevealObserver`] turns them into a
//! single "entered the viewport" notification.

/// Fraction of a section that must be visible before it is revealed.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Fires once, the first time the observed ratio reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealObserver {
    threshold: f32,
    revealed: bool,
}

impl RevealObserver {
    /// Threshold is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), revealed: false }
    }

    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection ratio. Returns true only for the call that reveals.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.revealed || ratio.is_nan() || ratio < self.threshold || ratio <= 0.0 {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// HTML attributes wiring an element to the reveal script.
///
/// `delay_ms` staggers cards within a section. An element whose observer has
/// already fired is emitted with the `revealed` class, and the script leaves
/// it alone.
#[must_use]
pub fn reveal_attrs(observer: &RevealObserver, delay_ms: u32) -> String {
    let mut attrs = format!(r#"data-reveal data-reveal-threshold="{}""#, observer.threshold());
    if observer.is_revealed() {
        attrs.push_str(r#" class="revealed""#);
    }
    if delay_ms > 0 {
        attrs.push_str(&format!(r#" style="--reveal-delay:{delay_ms}ms""#));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut observer = RevealObserver::default();
        assert!(!observer.observe(0.1));
        assert!(observer.observe(0.3));
        assert!(!observer.observe(0.9));
        assert!(!observer.observe(0.0));
        assert!(observer.is_revealed());
    }

    #[test]
    fn test_ignores_nan_and_zero() {
        let mut observer = RevealObserver::new(0.0);
        assert!(!observer.observe(f32::NAN));
        assert!(!observer.observe(0.0));
        assert!(observer.observe(0.01));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealObserver::new(4.0).threshold(), 1.0);
        assert_eq!(RevealObserver::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_attrs() {
        let observer = RevealObserver::default();
        assert_eq!(reveal_attrs(&observer, 0), r#"data-reveal data-reveal-threshold="0.3""#);
        assert!(reveal_attrs(&observer, 200).contains("--reveal-delay:200ms"));
    }

    #[test]
    fn test_attrs_after_reveal() {
        let mut observer = RevealObserver::default();
        assert!(!reveal_attrs(&observer, 0).contains("revealed"));
        observer.observe(1.0);
        assert_eq!(
            reveal_attrs(&observer, 0),
            r#"data-reveal data-reveal-threshold="0.3" class="revealed""#
        );
    }
}
