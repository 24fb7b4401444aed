//! Literal sample content rendered by the showcase page.
//!
//! Everything here is `'static` data; [`crate::compose_page`] walks these
//! tables in declaration order.

use serde::Serialize;
use system_ui::{AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, IconName, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One cell of the button grid.
pub struct ButtonSpec {
    /// Caption and button text.
    pub label: &'static str,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
}

impl ButtonSpec {
    const fn new(label: &'static str, variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            label,
            variant,
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A button carrying a leading icon.
pub struct IconButtonSpec {
    /// Button text.
    pub label: &'static str,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
    /// Leading glyph.
    pub icon: IconName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Categorical classification of an alert, driving its styling.
pub enum Severity {
    /// Completed action.
    Success,
    /// Neutral information.
    Info,
    /// Needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl Severity {
    /// Alert variant used for this severity.
    pub const fn variant(self) -> AlertVariant {
        match self {
            Self::Error => AlertVariant::Destructive,
            Self::Success | Self::Info | Self::Warning => AlertVariant::Default,
        }
    }

    /// Colour family tinting the alert. Errors use the destructive variant instead.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Success => Tone::Green,
            Self::Info => Tone::Blue,
            Self::Warning => Tone::Yellow,
            Self::Error => Tone::Neutral,
        }
    }

    /// Leading glyph for the alert.
    pub const fn icon(self) -> IconName {
        match self {
            Self::Success => IconName::CheckCircle,
            Self::Info => IconName::Info,
            Self::Warning => IconName::AlertTriangle,
            Self::Error => IconName::AlertCircle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One alert sample.
pub struct AlertSpec {
    /// Severity driving icon and colours.
    pub severity: Severity,
    /// Headline.
    pub title: &'static str,
    /// Body copy.
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
/// How a badge is styled: a library variant or a tinted status colour.
pub enum BadgeStyle {
    /// One of the widget library's badge variants.
    Variant(BadgeVariant),
    /// Status badge tinted with a colour family.
    Tinted(Tone),
}

impl BadgeStyle {
    /// Variant and tone handed to the badge primitive.
    pub const fn widget_props(self) -> (BadgeVariant, Tone) {
        match self {
            Self::Variant(variant) => (variant, Tone::Neutral),
            Self::Tinted(tone) => (BadgeVariant::Default, tone),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One badge sample.
pub struct BadgeSpec {
    /// Badge text.
    pub label: &'static str,
    /// Styling selector.
    pub style: BadgeStyle,
}

impl BadgeSpec {
    const fn variant(label: &'static str, variant: BadgeVariant) -> Self {
        Self {
            label,
            style: BadgeStyle::Variant(variant),
        }
    }

    const fn tinted(label: &'static str, tone: Tone) -> Self {
        Self {
            label,
            style: BadgeStyle::Tinted(tone),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A titled group of badges.
pub struct BadgeGroup {
    /// Group heading.
    pub title: &'static str,
    /// Badges in display order.
    pub badges: &'static [BadgeSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Heading and lead copy for a page section.
pub struct SectionCopy {
    /// Section heading.
    pub title: &'static str,
    /// Lead paragraph.
    pub description: &'static str,
}

/// Page title.
pub const PAGE_TITLE: &str = "Shadcn/UI Showcase";

/// Tagline under the page title.
pub const PAGE_TAGLINE: &str =
    "Explore beautiful, accessible, and customizable components built with Radix UI and Tailwind CSS";

pub const BUTTONS_COPY: SectionCopy = SectionCopy {
    title: "Button Components",
    description: "Versatile button variants for every use case",
};

pub const ALERTS_COPY: SectionCopy = SectionCopy {
    title: "Alert Components",
    description: "Contextual feedback messages for user actions",
};

pub const BADGES_COPY: SectionCopy = SectionCopy {
    title: "Badge Components",
    description: "Small status descriptors for UI elements",
};

pub const CARDS_COPY: SectionCopy = SectionCopy {
    title: "Card Components",
    description: "Flexible containers for grouping related content",
};

/// Labelled button grid, one cell per entry.
pub const BUTTON_GRID: [ButtonSpec; 8] = [
    ButtonSpec::new("Primary", ButtonVariant::Primary, ButtonSize::Default),
    ButtonSpec::new("Secondary", ButtonVariant::Secondary, ButtonSize::Default),
    ButtonSpec::new("Destructive", ButtonVariant::Destructive, ButtonSize::Default),
    ButtonSpec::new("Outline", ButtonVariant::Outline, ButtonSize::Default),
    ButtonSpec::new("Ghost", ButtonVariant::Ghost, ButtonSize::Default),
    ButtonSpec::new("Link", ButtonVariant::Link, ButtonSize::Default),
    ButtonSpec::new("Small", ButtonVariant::Primary, ButtonSize::Sm),
    ButtonSpec::new("Large", ButtonVariant::Primary, ButtonSize::Lg),
];

/// Centered row of icon buttons under the grid.
pub const ICON_BUTTONS: [IconButtonSpec; 3] = [
    IconButtonSpec {
        label: "With Icon",
        variant: ButtonVariant::Primary,
        size: ButtonSize::Default,
        icon: IconName::Star,
    },
    IconButtonSpec {
        label: "Like",
        variant: ButtonVariant::Outline,
        size: ButtonSize::Default,
        icon: IconName::Heart,
    },
    IconButtonSpec {
        label: "Action",
        variant: ButtonVariant::Secondary,
        size: ButtonSize::Default,
        icon: IconName::Zap,
    },
];

pub const ALERTS: [AlertSpec; 4] = [
    AlertSpec {
        severity: Severity::Success,
        title: "Success!",
        body: "Your changes have been saved successfully.",
    },
    AlertSpec {
        severity: Severity::Info,
        title: "Information",
        body: "This is some helpful information for you.",
    },
    AlertSpec {
        severity: Severity::Warning,
        title: "Warning",
        body: "Please review your settings before continuing.",
    },
    AlertSpec {
        severity: Severity::Error,
        title: "Error",
        body: "Something went wrong. Please try again.",
    },
];

const DEFAULT_BADGES: [BadgeSpec; 4] = [
    BadgeSpec::variant("Default", BadgeVariant::Default),
    BadgeSpec::variant("Secondary", BadgeVariant::Secondary),
    BadgeSpec::variant("Destructive", BadgeVariant::Destructive),
    BadgeSpec::variant("Outline", BadgeVariant::Outline),
];

const STATUS_BADGES: [BadgeSpec; 4] = [
    BadgeSpec::tinted("Active", Tone::Green),
    BadgeSpec::tinted("Pending", Tone::Yellow),
    BadgeSpec::tinted("Inactive", Tone::Red),
    BadgeSpec::tinted("New", Tone::Blue),
];

pub const BADGE_GROUPS: [BadgeGroup; 2] = [
    BadgeGroup {
        title: "Default Variants",
        badges: &DEFAULT_BADGES,
    },
    BadgeGroup {
        title: "Status Examples",
        badges: &STATUS_BADGES,
    },
];

/// Product card literals.
pub mod product {
    use super::*;

    pub const TITLE: &str = "Product Card";
    pub const DESCRIPTION: &str =
        "A beautiful product showcase card with all the essential information.";
    pub const HEADER_BADGE: BadgeSpec = BadgeSpec::tinted("New", Tone::Green);
    pub const PRICE_LABEL: &str = "Price";
    pub const PRICE: &str = "$99.99";
    pub const RATING_LABEL: &str = "Rating";
    pub const RATING_STARS: u8 = 5;
    pub const ACTION: ButtonSpec =
        ButtonSpec::new("Add to Cart", ButtonVariant::Primary, ButtonSize::Default);
}

/// Statistics card literals.
pub mod statistics {
    use super::*;

    pub const TITLE: &str = "Statistics";
    pub const DESCRIPTION: &str = "Key metrics and performance indicators.";
    /// Metric label and the badge showing its value.
    pub const METRICS: [(&str, BadgeSpec); 3] = [
        (
            "Total Users",
            BadgeSpec::variant("1,234", BadgeVariant::Secondary),
        ),
        ("Active Sessions", BadgeSpec::tinted("456", Tone::Blue)),
        ("Conversion Rate", BadgeSpec::tinted("12.3%", Tone::Green)),
    ];
    pub const ACTION: ButtonSpec =
        ButtonSpec::new("View Details", ButtonVariant::Outline, ButtonSize::Default);
}

/// Quick actions card literals.
pub mod quick_actions {
    use super::*;

    pub const TITLE: &str = "Quick Actions";
    pub const TITLE_ICON: IconName = IconName::Zap;
    pub const DESCRIPTION: &str = "Common tasks and shortcuts for productivity.";
    pub const ACTIONS: [IconButtonSpec; 4] = [
        IconButtonSpec {
            label: "Favorite",
            variant: ButtonVariant::Outline,
            size: ButtonSize::Sm,
            icon: IconName::Star,
        },
        IconButtonSpec {
            label: "Like",
            variant: ButtonVariant::Outline,
            size: ButtonSize::Sm,
            icon: IconName::Heart,
        },
        IconButtonSpec {
            label: "Boost",
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Sm,
            icon: IconName::Zap,
        },
        IconButtonSpec {
            label: "Delete",
            variant: ButtonVariant::Destructive,
            size: ButtonSize::Sm,
            icon: IconName::AlertCircle,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_documented_palette() {
        assert_eq!(Severity::Success.tone(), Tone::Green);
        assert_eq!(Severity::Info.tone(), Tone::Blue);
        assert_eq!(Severity::Warning.tone(), Tone::Yellow);
        assert_eq!(Severity::Error.variant(), AlertVariant::Destructive);
        for severity in [Severity::Success, Severity::Info, Severity::Warning] {
            assert_eq!(severity.variant(), AlertVariant::Default);
        }
    }

    #[test]
    fn button_grid_covers_every_variant_and_size() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Destructive,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
        ] {
            assert!(BUTTON_GRID.iter().any(|spec| spec.variant == variant));
        }
        for size in [ButtonSize::Default, ButtonSize::Sm, ButtonSize::Lg] {
            assert!(BUTTON_GRID.iter().any(|spec| spec.size == size));
        }
    }

    #[test]
    fn tinted_badges_render_on_default_variant() {
        assert_eq!(
            BadgeStyle::Tinted(Tone::Red).widget_props(),
            (BadgeVariant::Default, Tone::Red)
        );
        assert_eq!(
            BadgeStyle::Variant(BadgeVariant::Outline).widget_props(),
            (BadgeVariant::Outline, Tone::Neutral)
        );
    }

    #[test]
    fn badge_groups_split_variants_from_status() {
        let [variants, status] = BADGE_GROUPS;
        assert!(variants
            .badges
            .iter()
            .all(|badge| matches!(badge.style, BadgeStyle::Variant(_))));
        assert!(status
            .badges
            .iter()
            .all(|badge| matches!(badge.style, BadgeStyle::Tinted(_))));
    }
}
