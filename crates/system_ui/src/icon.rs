//! Centralized icon catalog for the shared primitives.
//!
//! Glyphs are a subset of the Lucide stroke icons (24px grid, 2px stroke) so
//! components never embed raw SVG strings of their own.

use leptos::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon identifiers.
pub enum IconName {
    /// Five-point star.
    Star,
    /// Heart outline.
    Heart,
    /// Lightning bolt.
    Zap,
    /// Circled checkmark, used for success feedback.
    CheckCircle,
    /// Circled "i", used for informational feedback.
    Info,
    /// Warning triangle.
    AlertTriangle,
    /// Circled exclamation mark, used for errors.
    AlertCircle,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Zap => "zap",
            Self::CheckCircle => "check-circle",
            Self::Info => "info",
            Self::AlertTriangle => "alert-triangle",
            Self::AlertCircle => "alert-circle",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Self::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Self::CheckCircle => {
                r#"<path d="M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z"/><path d="m9 12 2 2 4-4"/>"#
            }
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::AlertTriangle => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            Self::AlertCircle => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px icon for dense badges.
    Xs,
    /// 16px icon for buttons and alerts.
    #[default]
    Sm,
    /// 20px icon for card titles.
    Md,
    /// 24px icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Fills the glyph with the current colour instead of outlining it.
    #[prop(optional)]
    filled: bool,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            data-filled=if filled { "true" } else { "false" }
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill=if filled { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_svg_markup() {
        for icon in [
            IconName::Star,
            IconName::Heart,
            IconName::Zap,
            IconName::CheckCircle,
            IconName::Info,
            IconName::AlertTriangle,
            IconName::AlertCircle,
        ] {
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "{} has no markup", icon.token());
            assert!(body.ends_with("/>"), "{} is not self-closing", icon.token());
        }
    }

    #[test]
    fn sizes_scale_monotonically() {
        assert!(IconSize::Xs.px() < IconSize::Sm.px());
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert!(IconSize::Md.px() < IconSize::Lg.px());
        assert_eq!(IconSize::default(), IconSize::Sm);
    }
}
