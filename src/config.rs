//! Skeleton configuration.
//!
//! A [`Configuration`] describes what the overlay looks like (type, tint),
//! whether it animates, and how it transitions out on hide. One
//! configuration is shared by a whole traversal through [`SharedConfig`].

use std::sync::Arc;
use std::time::Duration;

/// Configuration shared by every node of one traversal.
pub type SharedConfig = Arc<Configuration>;

/// RGBA color packed as `0xRRGGBBAA`.
pub type Rgba = u32;

/// Default tint ("clouds" light gray).
pub const DEFAULT_TINT: Rgba = 0xEC_F0_F1_FF;

/// Default animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

// =============================================================================
// SkeletonType
// =============================================================================

/// Overlay shape fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkeletonType {
    #[default]
    Solid,
    Gradient,
}

// =============================================================================
// Animation
// =============================================================================

/// Direction of a sliding gradient animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideDirection {
    #[default]
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
}

/// Overlay animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Opacity pulse, the default for solid overlays.
    Pulse { duration: Duration },
    /// Sliding highlight, the usual pairing for gradient overlays.
    Sliding {
        direction: SlideDirection,
        duration: Duration,
    },
}

impl Animation {
    pub const fn pulse() -> Self {
        Self::Pulse {
            duration: DEFAULT_ANIMATION_DURATION,
        }
    }

    pub const fn sliding(direction: SlideDirection) -> Self {
        Self::Sliding {
            direction,
            duration: DEFAULT_ANIMATION_DURATION,
        }
    }

    /// Duration of one animation cycle.
    pub const fn duration(&self) -> Duration {
        match self {
            Self::Pulse { duration } | Self::Sliding { duration, .. } => *duration,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::pulse()
    }
}

// =============================================================================
// Transition
// =============================================================================

/// How an overlay appears and goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    #[default]
    None,
    CrossDissolve(Duration),
}

// =============================================================================
// Configuration
// =============================================================================

/// Immutable overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    /// Overlay fill type.
    pub kind: SkeletonType,
    /// Primary tint.
    pub tint: Rgba,
    /// Secondary tint for gradients. `None` derives it from `tint`.
    pub secondary: Option<Rgba>,
    /// Whether overlays animate once laid out.
    pub animated: bool,
    /// Animation used when `animated` is set.
    pub animation: Animation,
    /// Transition used when the overlay is shown or removed.
    pub transition: Transition,
}

impl Configuration {
    /// Static solid overlay with the default tint.
    pub const SOLID: Self = Self {
        kind: SkeletonType::Solid,
        tint: DEFAULT_TINT,
        secondary: None,
        animated: false,
        animation: Animation::pulse(),
        transition: Transition::None,
    };

    /// Static gradient overlay with the default tint.
    pub const GRADIENT: Self = Self {
        kind: SkeletonType::Gradient,
        tint: DEFAULT_TINT,
        secondary: None,
        animated: false,
        animation: Animation::sliding(SlideDirection::LeftRight),
        transition: Transition::None,
    };

    /// Solid overlay with a custom tint.
    pub fn solid(tint: Rgba) -> Self {
        Self { tint, ..Self::SOLID }
    }

    /// Gradient overlay with a custom tint.
    pub fn gradient(tint: Rgba) -> Self {
        Self {
            tint,
            ..Self::GRADIENT
        }
    }

    /// Enable animation with the current animation kind.
    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }

    /// Set the animation and enable it.
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self.animated = true;
        self
    }

    /// Set the secondary gradient tint.
    pub fn with_secondary(mut self, secondary: Rgba) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Set the transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Colors the overlay is drawn with.
    ///
    /// Solid overlays use one color; gradients use the tint and a lighter
    /// companion unless one was set explicitly.
    pub fn colors(&self) -> smallvec::SmallVec<[Rgba; 2]> {
        match self.kind {
            SkeletonType::Solid => smallvec::smallvec![self.tint],
            SkeletonType::Gradient => {
                let second = self.secondary.unwrap_or_else(|| lighten(self.tint));
                smallvec::smallvec![self.tint, second]
            }
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::SOLID
    }
}

/// Move each color channel halfway towards white, keeping alpha.
fn lighten(color: Rgba) -> Rgba {
    let channel = |shift: u32| {
        let c = (color >> shift) & 0xFF;
        (c + (0xFF - c) / 2) << shift
    };
    channel(24) | channel(16) | channel(8) | (color & 0xFF)
}
