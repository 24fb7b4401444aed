//! Framework-free render tree for the showcase page and the composer that
//! builds it from the literal catalog.

use serde::Serialize;
use system_ui::{
    AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, CardSurface, GridColumns, GridSpan,
    IconName, LayoutGap, LayoutJustify, MotionVariants, StaggerConfig, TextRole, Tone,
};

use crate::catalog::{
    self, AlertSpec, BadgeSpec, ButtonSpec, IconButtonSpec, SectionCopy, Severity,
};
use crate::config::{MotionConfig, ShowcaseConfig, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Top-level page sections, in document order.
pub enum SectionKind {
    /// Button variants and sizes.
    Buttons,
    /// Severity-styled alerts.
    Alerts,
    /// Variant and status badges.
    Badges,
    /// Hand-authored sample cards.
    Cards,
}

impl SectionKind {
    /// Every section in the order it appears on the page.
    pub const ORDER: [Self; 4] = [Self::Buttons, Self::Alerts, Self::Badges, Self::Cards];

    /// Stable token used for DOM ids and styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Alerts => "alerts",
            Self::Badges => "badges",
            Self::Cards => "cards",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// The whole showcase page.
pub struct Page {
    /// Colour scheme requested for the page root.
    pub theme: ThemeMode,
    /// Title block above the sections.
    pub header: PageHeader,
    /// Entrance animation of the section container itself.
    pub container_motion: MotionVariants,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl Page {
    /// Section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Visits every node of every section depth-first, in document order.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        for section in &self.sections {
            section.walk(visit);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Page title block.
pub struct PageHeader {
    pub title: &'static str,
    pub tagline: &'static str,
    pub motion: MotionVariants,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One top-level section: heading copy, body, and its reveal animation.
pub struct Section {
    pub kind: SectionKind,
    pub title: &'static str,
    pub description: &'static str,
    pub motion: MotionVariants,
    pub body: Vec<Node>,
}

impl Section {
    /// Visits every node of the body depth-first, in document order.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        for node in &self.body {
            node.walk(visit);
        }
    }

    /// Every button in the section, including those nested in cards.
    pub fn buttons(&self) -> Vec<&ButtonNode> {
        let mut buttons = Vec::new();
        for node in &self.body {
            node.collect_buttons(&mut buttons);
        }
        buttons
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "node")]
/// A node of the render tree.
pub enum Node {
    /// Vertical stack.
    Stack { gap: LayoutGap, children: Vec<Node> },
    /// Wrapping horizontal row.
    Cluster {
        gap: LayoutGap,
        justify: LayoutJustify,
        children: Vec<Node>,
    },
    /// Responsive grid.
    Grid {
        columns: GridColumns,
        gap: LayoutGap,
        children: Vec<Node>,
    },
    /// Caption placed above a single child.
    Labeled { label: &'static str, child: Box<Node> },
    /// Label on the left, value on the right.
    Metric { label: &'static str, value: Box<Node> },
    /// Plain text run.
    Text { role: TextRole, text: &'static str },
    /// Row of filled stars.
    Rating { stars: u8 },
    Button(ButtonNode),
    Alert(AlertNode),
    Badge(BadgeNode),
    Card(CardNode),
}

impl Node {
    /// Visits this node and then its descendants, in document order.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        match self {
            Self::Stack { children, .. }
            | Self::Cluster { children, .. }
            | Self::Grid { children, .. } => {
                for child in children {
                    child.walk(visit);
                }
            }
            Self::Labeled { child, .. } => child.walk(visit),
            Self::Metric { value, .. } => value.walk(visit),
            Self::Card(card) => {
                if let Some(badge) = &card.header_badge {
                    visit(&Node::Badge(badge.clone()));
                }
                for child in card.content.iter().chain(card.footer.iter()) {
                    child.walk(visit);
                }
            }
            Self::Text { .. }
            | Self::Rating { .. }
            | Self::Button(_)
            | Self::Alert(_)
            | Self::Badge(_) => {}
        }
    }

    fn collect_buttons<'a>(&'a self, into: &mut Vec<&'a ButtonNode>) {
        match self {
            Self::Button(button) => into.push(button),
            Self::Stack { children, .. }
            | Self::Cluster { children, .. }
            | Self::Grid { children, .. } => {
                for child in children {
                    child.collect_buttons(into);
                }
            }
            Self::Labeled { child, .. } => child.collect_buttons(into),
            Self::Metric { value, .. } => value.collect_buttons(into),
            Self::Card(card) => {
                for child in card.content.iter().chain(card.footer.iter()) {
                    child.collect_buttons(into);
                }
            }
            Self::Text { .. } | Self::Rating { .. } | Self::Alert(_) | Self::Badge(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonNode {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub icon: Option<IconName>,
    pub full_width: bool,
}

impl From<ButtonSpec> for ButtonNode {
    fn from(spec: ButtonSpec) -> Self {
        Self {
            label: spec.label,
            variant: spec.variant,
            size: spec.size,
            icon: None,
            full_width: false,
        }
    }
}

impl From<IconButtonSpec> for ButtonNode {
    fn from(spec: IconButtonSpec) -> Self {
        Self {
            label: spec.label,
            variant: spec.variant,
            size: spec.size,
            icon: Some(spec.icon),
            full_width: false,
        }
    }
}

impl ButtonNode {
    fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertNode {
    pub severity: Severity,
    pub variant: AlertVariant,
    pub tone: Tone,
    pub icon: IconName,
    pub title: &'static str,
    pub body: &'static str,
}

impl From<AlertSpec> for AlertNode {
    fn from(spec: AlertSpec) -> Self {
        Self {
            severity: spec.severity,
            variant: spec.severity.variant(),
            tone: spec.severity.tone(),
            icon: spec.severity.icon(),
            title: spec.title,
            body: spec.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeNode {
    pub label: &'static str,
    pub variant: BadgeVariant,
    pub tone: Tone,
}

impl From<BadgeSpec> for BadgeNode {
    fn from(spec: BadgeSpec) -> Self {
        let (variant, tone) = spec.style.widget_props();
        Self {
            label: spec.label,
            variant,
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A card with header, content, and footer slots.
pub struct CardNode {
    pub title: &'static str,
    pub title_icon: Option<IconName>,
    /// Badge shown next to the title.
    pub header_badge: Option<BadgeNode>,
    pub description: &'static str,
    pub surface: CardSurface,
    pub span: Option<GridSpan>,
    pub content: Vec<Node>,
    /// Empty when the card has no footer.
    pub footer: Vec<Node>,
}

/// Builds the showcase page from the literal catalog.
///
/// Pure and infallible: the same configuration always yields an identical tree.
pub fn compose_page(config: &ShowcaseConfig) -> Page {
    let motion = &config.motion;
    let stagger = StaggerConfig::new(if motion.enabled { motion.stagger_ms } else { 0 });
    let total = SectionKind::ORDER.len();

    let sections = SectionKind::ORDER
        .into_iter()
        .enumerate()
        .map(|(index, kind)| {
            let reveal = section_motion(motion).with_delay(stagger.delay_for_index(index, total));
            compose_section(kind, reveal)
        })
        .collect();

    Page {
        theme: config.theme,
        header: PageHeader {
            title: catalog::PAGE_TITLE,
            tagline: catalog::PAGE_TAGLINE,
            motion: header_motion(motion),
        },
        container_motion: container_motion(motion),
        sections,
    }
}

fn header_motion(motion: &MotionConfig) -> MotionVariants {
    if !motion.enabled {
        return MotionVariants::instant();
    }
    MotionVariants::fade_slide(motion.header_offset_px, motion.header_duration_ms)
}

fn container_motion(motion: &MotionConfig) -> MotionVariants {
    if !motion.enabled {
        return MotionVariants::instant();
    }
    MotionVariants::fade(motion.container_fade_ms)
}

fn section_motion(motion: &MotionConfig) -> MotionVariants {
    if !motion.enabled {
        return MotionVariants::instant();
    }
    MotionVariants::fade_slide(motion.section_offset_px, motion.section_duration_ms)
}

fn compose_section(kind: SectionKind, motion: MotionVariants) -> Section {
    let (copy, body) = match kind {
        SectionKind::Buttons => (catalog::BUTTONS_COPY, buttons_body()),
        SectionKind::Alerts => (catalog::ALERTS_COPY, alerts_body()),
        SectionKind::Badges => (catalog::BADGES_COPY, badges_body()),
        SectionKind::Cards => (catalog::CARDS_COPY, cards_body()),
    };
    let SectionCopy { title, description } = copy;
    Section {
        kind,
        title,
        description,
        motion,
        body,
    }
}

/// Untitled frosted card wrapping a whole section body.
fn frame(content: Vec<Node>) -> Node {
    Node::Card(CardNode {
        title: "",
        title_icon: None,
        header_badge: None,
        description: "",
        surface: CardSurface::Frosted,
        span: None,
        content,
        footer: Vec::new(),
    })
}

fn buttons_body() -> Vec<Node> {
    let grid = Node::Grid {
        columns: GridColumns::responsive(2, 4),
        gap: LayoutGap::Md,
        children: catalog::BUTTON_GRID
            .into_iter()
            .map(|spec| Node::Labeled {
                label: spec.label,
                child: Box::new(Node::Button(ButtonNode::from(spec).full_width())),
            })
            .collect(),
    };
    let icon_row = Node::Cluster {
        gap: LayoutGap::Md,
        justify: LayoutJustify::Center,
        children: catalog::ICON_BUTTONS
            .into_iter()
            .map(|spec| Node::Button(spec.into()))
            .collect(),
    };
    vec![frame(vec![Node::Stack {
        gap: LayoutGap::Lg,
        children: vec![grid, icon_row],
    }])]
}

fn alerts_body() -> Vec<Node> {
    vec![Node::Grid {
        columns: GridColumns::responsive(1, 2),
        gap: LayoutGap::Lg,
        children: catalog::ALERTS
            .into_iter()
            .map(|spec| Node::Alert(spec.into()))
            .collect(),
    }]
}

fn badges_body() -> Vec<Node> {
    let groups = catalog::BADGE_GROUPS
        .into_iter()
        .map(|group| Node::Stack {
            gap: LayoutGap::Md,
            children: vec![
                Node::Text {
                    role: TextRole::Subtitle,
                    text: group.title,
                },
                Node::Cluster {
                    gap: LayoutGap::Sm,
                    justify: LayoutJustify::Start,
                    children: group
                        .badges
                        .iter()
                        .map(|badge| Node::Badge((*badge).into()))
                        .collect(),
                },
            ],
        })
        .collect();
    vec![frame(vec![Node::Grid {
        columns: GridColumns::responsive(1, 2),
        gap: LayoutGap::Lg,
        children: groups,
    }])]
}

fn cards_body() -> Vec<Node> {
    vec![Node::Grid {
        columns: GridColumns::responsive(1, 2).with_lg(3),
        gap: LayoutGap::Lg,
        children: vec![
            Node::Card(product_card()),
            Node::Card(statistics_card()),
            Node::Card(quick_actions_card()),
        ],
    }]
}

fn metric_row(label: &'static str, value: Node) -> Node {
    Node::Metric {
        label,
        value: Box::new(value),
    }
}

fn product_card() -> CardNode {
    use crate::catalog::product;

    CardNode {
        title: product::TITLE,
        title_icon: None,
        header_badge: Some(product::HEADER_BADGE.into()),
        description: product::DESCRIPTION,
        surface: CardSurface::Interactive,
        span: None,
        content: vec![Node::Stack {
            gap: LayoutGap::Sm,
            children: vec![
                metric_row(
                    product::PRICE_LABEL,
                    Node::Text {
                        role: TextRole::Value,
                        text: product::PRICE,
                    },
                ),
                metric_row(
                    product::RATING_LABEL,
                    Node::Rating {
                        stars: product::RATING_STARS,
                    },
                ),
            ],
        }],
        footer: vec![Node::Button(ButtonNode::from(product::ACTION).full_width())],
    }
}

fn statistics_card() -> CardNode {
    use crate::catalog::statistics;

    CardNode {
        title: statistics::TITLE,
        title_icon: None,
        header_badge: None,
        description: statistics::DESCRIPTION,
        surface: CardSurface::Interactive,
        span: None,
        content: vec![Node::Stack {
            gap: LayoutGap::Md,
            children: statistics::METRICS
                .into_iter()
                .map(|(label, badge)| metric_row(label, Node::Badge(badge.into())))
                .collect(),
        }],
        footer: vec![Node::Button(
            ButtonNode::from(statistics::ACTION).full_width(),
        )],
    }
}

fn quick_actions_card() -> CardNode {
    use crate::catalog::quick_actions;

    CardNode {
        title: quick_actions::TITLE,
        title_icon: Some(quick_actions::TITLE_ICON),
        header_badge: None,
        description: quick_actions::DESCRIPTION,
        surface: CardSurface::Interactive,
        span: Some(GridSpan { md: 2, lg: 1 }),
        content: vec![Node::Grid {
            columns: GridColumns::fixed(2),
            gap: LayoutGap::Sm,
            children: quick_actions::ACTIONS
                .into_iter()
                .map(|spec| Node::Button(spec.into()))
                .collect(),
        }],
        footer: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page() -> Page {
        compose_page(&ShowcaseConfig::default())
    }

    #[test]
    fn sections_follow_document_order() {
        let kinds: Vec<SectionKind> = page().sections.iter().map(|section| section.kind).collect();
        assert_eq!(kinds, SectionKind::ORDER.to_vec());
    }

    #[test]
    fn every_grid_button_renders_once_with_its_variant_and_size() {
        let page = page();
        let buttons = page
            .section(SectionKind::Buttons)
            .expect("buttons section")
            .buttons();

        for spec in catalog::BUTTON_GRID {
            let matching: Vec<_> = buttons
                .iter()
                .filter(|button| button.label == spec.label && button.icon.is_none())
                .collect();
            assert_eq!(matching.len(), 1, "{} rendered {} times", spec.label, matching.len());
            assert_eq!(matching[0].variant, spec.variant);
            assert_eq!(matching[0].size, spec.size);
            assert!(matching[0].full_width);
        }
    }

    #[test]
    fn grid_cells_are_captioned_with_the_button_label() {
        let page = page();
        let mut captions = Vec::new();
        page.section(SectionKind::Buttons)
            .expect("buttons section")
            .walk(&mut |node| {
                if let Node::Labeled { label, child } = node {
                    if let Node::Button(button) = child.as_ref() {
                        assert_eq!(*label, button.label);
                        captions.push(*label);
                    }
                }
            });
        assert_eq!(
            captions,
            vec!["Primary", "Secondary", "Destructive", "Outline", "Ghost", "Link", "Small", "Large"]
        );
    }

    #[test]
    fn alerts_carry_literal_text_and_severity_styling() {
        let page = page();
        let mut alerts = Vec::new();
        page.section(SectionKind::Alerts)
            .expect("alerts section")
            .walk(&mut |node| {
                if let Node::Alert(alert) = node {
                    alerts.push(alert.clone());
                }
            });

        assert_eq!(alerts.len(), catalog::ALERTS.len());
        for (alert, spec) in alerts.iter().zip(catalog::ALERTS) {
            assert_eq!(alert.title, spec.title);
            assert_eq!(alert.body, spec.body);
            assert_eq!(alert.severity, spec.severity);
        }
        assert_eq!(alerts[0].tone, Tone::Green);
        assert_eq!(alerts[1].tone, Tone::Blue);
        assert_eq!(alerts[2].tone, Tone::Yellow);
        assert_eq!(alerts[3].variant, AlertVariant::Destructive);
        assert_eq!(alerts[3].icon, IconName::AlertCircle);
    }

    #[test]
    fn composing_twice_is_structurally_identical() {
        let first = page();
        let second = page();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_value(&first).expect("serialize"),
            serde_json::to_value(&second).expect("serialize")
        );
    }

    #[test]
    fn sections_reveal_one_stagger_step_apart() {
        let config = ShowcaseConfig::default();
        let delays: Vec<u32> = compose_page(&config)
            .sections
            .iter()
            .map(|section| section.motion.transition.delay_ms)
            .collect();
        let step = config.motion.stagger_ms;
        assert_eq!(delays, vec![0, step, step * 2, step * 3]);
    }

    #[test]
    fn section_motion_fades_and_slides_up() {
        let page = page();
        let motion = page.sections[0].motion;
        assert_eq!(motion.initial.opacity, 0.0);
        assert_eq!(motion.initial.offset_y_px, 20);
        assert_eq!(motion.animate.opacity, 1.0);
        assert_eq!(motion.animate.offset_y_px, 0);
        assert_eq!(motion.transition.duration_ms, 500);
        assert_eq!(page.header.motion.initial.offset_y_px, -20);
        assert_eq!(page.header.motion.transition.duration_ms, 600);
    }

    #[test]
    fn disabled_motion_renders_everything_in_place() {
        let mut config = ShowcaseConfig::default();
        config.motion.enabled = false;
        let page = compose_page(&config);
        assert!(page.header.motion.is_static());
        assert!(page.container_motion.is_static());
        assert!(page.sections.iter().all(|section| section.motion.is_static()));
    }

    #[test]
    fn quick_actions_card_spans_two_medium_columns() {
        let card = quick_actions_card();
        assert_eq!(card.span, Some(GridSpan { md: 2, lg: 1 }));
        assert!(card.footer.is_empty());
        assert_eq!(card.title_icon, Some(IconName::Zap));
    }

    #[test]
    fn tree_serializes_with_tagged_nodes() {
        let value = serde_json::to_value(page()).expect("serialize");
        assert_eq!(value["sections"][0]["kind"], "buttons");
        assert_eq!(value["sections"][1]["body"][0]["node"], "grid");
        assert_eq!(value["sections"][1]["body"][0]["children"][3]["title"], "Error");
    }
}
