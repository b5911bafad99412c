//! Scroll-linked motion and reveal transitions
//!
//! All functions here are pure. The site re-evaluates them on every scroll
//! or resize notification and on every reveal-state change.

use std::fmt;

/// Normalized scroll progress of a tracked element, always within `[0, 1]`.
///
/// Progress is 0 when the element's top edge meets the viewport top and 1
/// when its bottom edge reaches the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamps into `[0, 1]`. NaN maps to the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Progress of `scroll_y` through the document range `[start, end]`.
    ///
    /// An empty range behaves like a step at `start`.
    pub fn from_bounds(scroll_y: f64, start: f64, end: f64) -> Self {
        let length = end - start;
        if length <= 0.0 {
            return if scroll_y >= start { Self::END } else { Self::START };
        }
        Self::new((scroll_y - start) / length)
    }

    /// Progress from a viewport-relative bounding rect, as reported by
    /// `getBoundingClientRect()`.
    pub fn from_rect(rect_top: f64, rect_height: f64) -> Self {
        // The element's document start sits `rect_top` below the current
        // scroll position, so scroll - start == -rect_top.
        Self::from_bounds(-rect_top, 0.0, rect_height)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Linear map of `t` from `[in_lo, in_hi]` into `[out_lo, out_hi]`, clamped
/// to the input range.
pub fn interpolate(t: f64, (in_lo, in_hi): (f64, f64), (out_lo, out_hi): (f64, f64)) -> f64 {
    if in_hi <= in_lo {
        return if t >= in_hi { out_hi } else { out_lo };
    }
    let ratio = ((t - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * ratio
}

/// Parallax scale of the hero image, `[1, 1.3]`.
pub fn image_scale(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), (0.0, 1.0), (1.0, 1.3))
}

/// Vertical offset of the hero text, `[0, 100]` px.
pub fn text_offset_y(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), (0.0, 1.0), (0.0, 100.0))
}

/// Opacity of the hero text: fully opaque through the first half, fading
/// out linearly over the second.
pub fn text_opacity(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), (0.5, 1.0), (1.0, 0.0))
}

/// Visual parameters of the hero section for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub image_scale: f64,
    pub text_offset_y: f64,
    pub text_opacity: f64,
}

impl HeroFrame {
    pub fn from_progress(progress: ScrollProgress) -> Self {
        Self {
            image_scale: image_scale(progress),
            text_offset_y: text_offset_y(progress),
            text_opacity: text_opacity(progress),
        }
    }

    pub fn image_style(&self) -> String {
        format!("transform: scale({:.4});", self.image_scale)
    }

    pub fn text_style(&self) -> String {
        format!(
            "transform: translateY({:.2}px); opacity: {:.4};",
            self.text_offset_y, self.text_opacity
        )
    }
}

impl Default for HeroFrame {
    fn default() -> Self {
        Self::from_progress(ScrollProgress::START)
    }
}

/// Timing function of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Strong deceleration used for the philosophy lines.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({}, {}, {}, {})", a, b, c, d),
        }
    }
}

/// Timing of a hidden → visible transition, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// CSS `transition` value covering `properties`
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|prop| {
                format!(
                    "{} {}s {} {}s",
                    prop,
                    millis(self.duration),
                    self.easing,
                    millis(self.delay)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(0.8)
    }
}

/// Rounds seconds to whole milliseconds so accumulated stagger error
/// (`3 * 0.1`) does not leak into CSS.
fn millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Default sibling stagger
pub const STAGGER_DEFAULT: f64 = 0.15;
/// Stagger between philosophy lines
pub const STAGGER_PHILOSOPHY: f64 = 0.1;
/// Stagger between showcase cards
pub const STAGGER_SHOWCASE: f64 = 0.2;

/// Start offset of the `index`-th sibling.
pub fn stagger_delay(index: usize, interval: f64) -> f64 {
    index as f64 * interval
}

/// Vertical displacement of a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f64),
    /// Relative to the element's own height
    Percent(f64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Px(v) => write!(f, "{}px", v),
            Offset::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// One visual state of a revealable element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    pub translate_y: Offset,
    pub scale: f64,
}

impl Variant {
    pub const VISIBLE: Variant = Variant {
        opacity: 1.0,
        translate_y: Offset::Px(0.0),
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}) scale({});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Hidden and visible states of a reveal animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantPair {
    pub hidden: Variant,
    pub visible: Variant,
}

impl VariantPair {
    pub const FADE_IN_UP: VariantPair = VariantPair {
        hidden: Variant {
            opacity: 0.0,
            translate_y: Offset::Px(60.0),
            scale: 1.0,
        },
        visible: Variant::VISIBLE,
    };

    pub const FADE_IN: VariantPair = VariantPair {
        hidden: Variant {
            opacity: 0.0,
            translate_y: Offset::Px(0.0),
            scale: 1.0,
        },
        visible: Variant::VISIBLE,
    };

    /// Slides up from below a clipping parent.
    pub const RISE_FROM_MASK: VariantPair = VariantPair {
        hidden: Variant {
            opacity: 0.0,
            translate_y: Offset::Percent(100.0),
            scale: 1.0,
        },
        visible: Variant::VISIBLE,
    };

    pub const SOFT_RISE: VariantPair = VariantPair {
        hidden: Variant {
            opacity: 0.0,
            translate_y: Offset::Px(40.0),
            scale: 1.0,
        },
        visible: Variant::VISIBLE,
    };

    pub fn current(&self, revealed: bool) -> &Variant {
        if revealed {
            &self.visible
        } else {
            &self.hidden
        }
    }

    /// Inline style for the current state, including the transition that
    /// animates into it.
    pub fn style(&self, revealed: bool, transition: &Transition) -> String {
        format!(
            "{} transition: {};",
            self.current(revealed).css(),
            transition.css(&["opacity", "transform"])
        )
    }
}
