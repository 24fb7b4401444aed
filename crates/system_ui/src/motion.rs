//! One-shot entrance animations for shared primitives.
//!
//! A [`Motion`] wrapper mounts its children in the `initial` frame of a
//! [`MotionVariants`] set and flips to the `animate` frame once the browser
//! has painted the initial state, letting a CSS transition carry the change.
//! The flip happens once; nothing re-hides the element afterwards.
//! [`StaggerConfig`] derives per-child delays so a group of siblings reveals
//! in document order.

use leptos::*;
use serde::Serialize;

use crate::primitives::merge_layout_class;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// A visual state an element can rest in.
pub struct MotionFrame {
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Vertical offset from the element's layout position, in CSS pixels.
    pub offset_y_px: i32,
}

impl MotionFrame {
    /// Fully visible at the layout position.
    pub const REST: Self = Self {
        opacity: 1.0,
        offset_y_px: 0,
    };

    /// Transparent, shifted vertically by `offset_y_px`.
    pub const fn hidden(offset_y_px: i32) -> Self {
        Self {
            opacity: 0.0,
            offset_y_px,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// CSS timing functions available to transitions.
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Decelerating curve.
    #[default]
    EaseOut,
    /// Symmetric curve.
    EaseInOut,
}

impl Easing {
    /// CSS timing-function keyword.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
/// Timing of the move from the initial to the animated frame.
pub struct MotionTransition {
    /// Transition length in milliseconds. Zero disables the transition.
    pub duration_ms: u32,
    /// Wait before the transition starts, in milliseconds.
    pub delay_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl MotionTransition {
    /// Transition of `duration_ms` with no delay.
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    fn css(self) -> String {
        if self.duration_ms == 0 {
            return "none".to_string();
        }
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        );
        format!("opacity {timing}, transform {timing}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mount animation phase of a [`Motion`] element.
pub enum MotionPhase {
    /// Rendered in the initial frame.
    Hidden,
    /// Rendered in the animated frame. Terminal.
    Visible,
}

impl MotionPhase {
    /// Stable token used by the `data-ui-motion-phase` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Initial and final visual state plus the transition between them.
pub struct MotionVariants {
    /// Frame rendered on mount.
    pub initial: MotionFrame,
    /// Frame the element settles in.
    pub animate: MotionFrame,
    /// Timing of the change.
    pub transition: MotionTransition,
}

impl MotionVariants {
    /// Opacity-only fade in.
    pub const fn fade(duration_ms: u32) -> Self {
        Self {
            initial: MotionFrame::hidden(0),
            animate: MotionFrame::REST,
            transition: MotionTransition::new(duration_ms),
        }
    }

    /// Fade in while sliding from `offset_y_px` to the layout position.
    ///
    /// Positive offsets slide up from below, negative ones drop in from above.
    pub const fn fade_slide(offset_y_px: i32, duration_ms: u32) -> Self {
        Self {
            initial: MotionFrame::hidden(offset_y_px),
            animate: MotionFrame::REST,
            transition: MotionTransition::new(duration_ms),
        }
    }

    /// No animation: the element mounts in its final frame.
    pub const fn instant() -> Self {
        Self {
            initial: MotionFrame::REST,
            animate: MotionFrame::REST,
            transition: MotionTransition::new(0),
        }
    }

    /// Same variants starting after `delay_ms`.
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    /// Whether mounting this element produces any visible change.
    pub fn is_static(&self) -> bool {
        self.transition.duration_ms == 0 || self.initial == self.animate
    }

    /// Inline CSS for the element in `phase`.
    pub fn style_for(&self, phase: MotionPhase) -> String {
        let frame = match phase {
            MotionPhase::Hidden if !self.is_static() => self.initial,
            _ => self.animate,
        };
        let transition = if self.is_static() {
            "none".to_string()
        } else {
            self.transition.css()
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            frame.opacity, frame.offset_y_px, transition
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Order in which a staggered group reveals.
pub enum StaggerDirection {
    /// First to last.
    #[default]
    Forward,
    /// Last to first.
    Reverse,
    /// From the middle child outward.
    FromCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Per-child delay schedule for a group of sibling [`Motion`] elements.
pub struct StaggerConfig {
    /// Delay between consecutive children, in milliseconds.
    pub delay_ms: u32,
    /// Reveal order.
    pub direction: StaggerDirection,
}

impl StaggerConfig {
    /// Forward stagger with `delay_ms` between children.
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            direction: StaggerDirection::Forward,
        }
    }

    /// Reveal from the last child to the first.
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Reveal from the middle child outward.
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Delay for the child at `index` in a group of `total`.
    pub fn delay_for_index(&self, index: usize, total: usize) -> u32 {
        let step = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => index.abs_diff(total / 2),
        };
        u32::try_from(step)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.delay_ms)
    }
}

#[component]
/// Wraps children in an element that plays `variants` once on mount.
pub fn Motion(
    variants: MotionVariants,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let start = if variants.is_static() {
        MotionPhase::Visible
    } else {
        MotionPhase::Hidden
    };
    let phase = create_rw_signal(start);

    if start == MotionPhase::Hidden {
        // Two frames: the first lets the browser commit the hidden styles.
        request_animation_frame(move || {
            request_animation_frame(move || phase.set(MotionPhase::Visible));
        });
    }

    view! {
        <div
            class=merge_layout_class("ui-motion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="motion"
            data-ui-slot=ui_slot
            data-ui-motion-phase=move || phase.get().token()
            style=move || variants.style_for(phase.get())
        >
            {children()}
        </div>
    }
}
