//! Scroll Parallax
//!
//! Pure mappings from the window scroll offset to hero transforms.
//! Inputs outside a map's domain clamp to the nearest output endpoint.

use serde::Serialize;

/// Linear interpolation from an input range to an output range
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Map `x`, clamping to the output range
    pub fn apply(&self, x: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        let span = in_end - in_start;
        if span == 0.0 || x.is_nan() {
            return out_start;
        }

        let t = ((x - in_start) / span).clamp(0.0, 1.0);
        out_start + t * (out_end - out_start)
    }
}

/// Derived hero properties for one scroll position
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeroFrame {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl HeroFrame {
    /// Inline CSS for the animated element
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}px) scale({:.3}); opacity: {:.3};",
            self.translate_y, self.scale, self.opacity
        )
    }
}

impl Default for HeroFrame {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// A set of scroll-driven maps applied to a hero block
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeroParallax {
    pub offset: Option<LinearMap>,
    pub opacity: Option<LinearMap>,
    pub scale: Option<LinearMap>,
}

impl HeroParallax {
    /// Inner page hero: drifts down 150px and fades out over the first 300px
    pub const fn inner_page() -> Self {
        Self {
            offset: Some(LinearMap::new((0.0, 500.0), (0.0, 150.0))),
            opacity: Some(LinearMap::new((0.0, 300.0), (1.0, 0.0))),
            scale: None,
        }
    }

    /// Full-viewport video hero on the home page
    pub const fn video_hero() -> Self {
        Self {
            offset: Some(LinearMap::new((0.0, 500.0), (0.0, 200.0))),
            opacity: Some(LinearMap::new((0.0, 300.0), (1.0, 0.0))),
            scale: None,
        }
    }

    /// Home page logo: shrinks and dims but never disappears
    pub const fn logo() -> Self {
        Self {
            offset: None,
            opacity: Some(LinearMap::new((0.0, 300.0), (1.0, 0.5))),
            scale: Some(LinearMap::new((0.0, 300.0), (1.0, 0.8))),
        }
    }

    /// Compute the frame for a scroll offset
    pub fn frame(&self, scroll_y: f64) -> HeroFrame {
        let rest = HeroFrame::default();
        HeroFrame {
            translate_y: self.offset.map_or(rest.translate_y, |m| m.apply(scroll_y)),
            opacity: self.opacity.map_or(rest.opacity, |m| m.apply(scroll_y)),
            scale: self.scale.map_or(rest.scale, |m| m.apply(scroll_y)),
        }
    }
}

/// Entrance delay for the `index`-th item of a staggered grid
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let ms = u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(u64::from(step_ms));
    format!("animation-delay: {ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_page_endpoints() {
        let hero = HeroParallax::inner_page();
        assert_eq!(hero.frame(0.0).translate_y, 0.0);
        assert_eq!(hero.frame(500.0).translate_y, 150.0);
        assert_eq!(hero.frame(250.0).translate_y, 75.0);
        assert_eq!(hero.frame(0.0).opacity, 1.0);
        assert_eq!(hero.frame(150.0).opacity, 0.5);
        assert_eq!(hero.frame(300.0).opacity, 0.0);
    }

    #[test]
    fn test_clamps_outside_domain() {
        let hero = HeroParallax::video_hero();
        assert_eq!(hero.frame(1200.0).translate_y, 200.0);
        assert_eq!(hero.frame(-40.0).translate_y, 0.0);
        assert_eq!(hero.frame(900.0).opacity, 0.0);
    }

    #[test]
    fn test_logo_profile() {
        let frame = HeroParallax::logo().frame(300.0);
        assert_eq!(frame.translate_y, 0.0);
        assert!((frame.scale - 0.8).abs() < 1e-9);
        assert!((frame.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_map() {
        let map = LinearMap::new((10.0, 10.0), (3.0, 7.0));
        assert_eq!(map.apply(10.0), 3.0);
        assert_eq!(LinearMap::new((0.0, 1.0), (0.0, 1.0)).apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_style_and_stagger() {
        let style = HeroFrame::default().style();
        assert_eq!(style, "transform: translateY(0.00px) scale(1.000); opacity: 1.000;");
        assert_eq!(stagger_delay(3, 100), "animation-delay: 300ms;");
    }
}
