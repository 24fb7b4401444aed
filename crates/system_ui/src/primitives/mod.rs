//! Shared control, feedback, data-display, and layout primitives.

use leptos::ev::MouseEvent;
use leptos::*;
use serde::Serialize;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod feedback;
mod layout;

pub use controls::Button;
pub use data_display::{
    Badge, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Heading, Text,
};
pub use feedback::{Alert, AlertDescription, AlertTitle};
pub use layout::{Cluster, Grid, Stack};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared button variants.
pub enum ButtonVariant {
    /// Solid primary action button.
    #[default]
    Primary,
    /// Muted secondary action.
    Secondary,
    /// Destructive action.
    Destructive,
    /// Bordered, transparent action.
    Outline,
    /// Borderless action that only tints on hover.
    Ghost,
    /// Inline text link styled as a button.
    Link,
}

impl ButtonVariant {
    /// Stable token used by the `data-ui-variant` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Regular button.
    #[default]
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Stable token used by the `data-ui-size` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Badge variants.
pub enum BadgeVariant {
    /// Solid primary badge.
    #[default]
    Default,
    /// Muted badge.
    Secondary,
    /// Destructive badge.
    Destructive,
    /// Bordered badge.
    Outline,
}

impl BadgeVariant {
    /// Stable token used by the `data-ui-variant` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Alert variants.
pub enum AlertVariant {
    /// Neutral alert, optionally tinted with a [`Tone`].
    #[default]
    Default,
    /// Destructive alert. Ignores tone tinting.
    Destructive,
}

impl AlertVariant {
    /// Stable token used by the `data-ui-variant` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Colour family used to tint badges and alerts.
pub enum Tone {
    /// No tint; the variant decides the colours.
    #[default]
    Neutral,
    /// Green family.
    Green,
    /// Blue family.
    Blue,
    /// Yellow family.
    Yellow,
    /// Red family.
    Red,
}

impl Tone {
    /// Stable token used by the `data-ui-tone` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Card surface treatments.
pub enum CardSurface {
    /// Plain bordered card.
    #[default]
    Standard,
    /// Translucent, blurred, borderless card with a deep shadow.
    Frosted,
    /// Frosted card that lifts and scales on hover.
    Interactive,
}

impl CardSurface {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Frosted => "frosted",
            Self::Interactive => "interactive",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared text roles.
pub enum TextRole {
    /// Gradient page title.
    Display,
    /// Section title.
    Title,
    /// Group heading inside a section.
    Subtitle,
    /// Lead paragraph under a title.
    Lead,
    /// Body text.
    #[default]
    Body,
    /// Small label text.
    Label,
    /// Emphasized value text.
    Value,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Lead => "lead",
            Self::Body => "body",
            Self::Label => "label",
            Self::Value => "value",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Muted text.
    Muted,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
    /// Extra large gap, used between page sections.
    Xl,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Responsive column counts for [`Grid`].
///
/// `md` and `lg` apply from the medium and large breakpoints upward; when
/// absent the smaller breakpoint's count carries over.
pub struct GridColumns {
    /// Columns below the medium breakpoint.
    pub base: u8,
    /// Columns from the medium breakpoint.
    pub md: Option<u8>,
    /// Columns from the large breakpoint.
    pub lg: Option<u8>,
}

impl GridColumns {
    /// Fixed column count at every breakpoint.
    pub const fn fixed(columns: u8) -> Self {
        Self {
            base: columns,
            md: None,
            lg: None,
        }
    }

    /// Single column that widens from the medium breakpoint.
    pub const fn responsive(base: u8, md: u8) -> Self {
        Self {
            base,
            md: Some(md),
            lg: None,
        }
    }

    /// Adds a large-breakpoint column count.
    pub const fn with_lg(self, lg: u8) -> Self {
        Self {
            lg: Some(lg),
            ..self
        }
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self::fixed(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Column span of a grid child at the medium and large breakpoints.
pub struct GridSpan {
    /// Span from the medium breakpoint.
    pub md: u8,
    /// Span from the large breakpoint.
    pub lg: u8,
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn count_token(value: Option<u8>) -> Option<String> {
    value.map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_optional_layout_class() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("showcase-card")),
            "ui-card showcase-card"
        );
    }

    #[test]
    fn variant_tokens_match_dom_contract() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ButtonVariant::Ghost.token(), "ghost");
        assert_eq!(ButtonSize::default().token(), "default");
        assert_eq!(BadgeVariant::Outline.token(), "outline");
        assert_eq!(AlertVariant::Destructive.token(), "destructive");
        assert_eq!(Tone::Yellow.token(), "yellow");
    }

    #[test]
    fn grid_columns_carry_breakpoints() {
        let columns = GridColumns::responsive(1, 2).with_lg(3);
        assert_eq!(columns.base, 1);
        assert_eq!(columns.md, Some(2));
        assert_eq!(columns.lg, Some(3));
        assert_eq!(GridColumns::default(), GridColumns::fixed(1));
    }

    #[test]
    fn serializes_tokens_in_kebab_case() {
        let value = serde_json::to_value(ButtonVariant::Destructive).expect("serialize");
        assert_eq!(value, serde_json::json!("destructive"));
    }
}
