use pretty_assertions::assert_eq;
use showcase::{
    compose_page, parse_overrides_from_query, BadgeNode, CardNode, Node, Page, SectionKind,
    ShowcaseConfig, ThemeMode,
};
use system_ui::{BadgeVariant, ButtonSize, ButtonVariant, Tone};

fn default_page() -> Page {
    compose_page(&ShowcaseConfig::default())
}

fn cards(page: &Page) -> Vec<CardNode> {
    let mut cards = Vec::new();
    page.section(SectionKind::Cards)
        .expect("cards section")
        .walk(&mut |node| {
            if let Node::Card(card) = node {
                cards.push(card.clone());
            }
        });
    cards
}

fn badges_in(page: &Page, kind: SectionKind) -> Vec<BadgeNode> {
    let mut badges = Vec::new();
    page.section(kind).expect("section").walk(&mut |node| {
        if let Node::Badge(badge) = node {
            badges.push(badge.clone());
        }
    });
    badges
}

#[test]
fn page_has_expected_entry_counts() {
    let page = default_page();

    let mut grid_buttons = 0;
    page.section(SectionKind::Buttons)
        .expect("buttons section")
        .walk(&mut |node| {
            if let Node::Labeled { child, .. } = node {
                if matches!(child.as_ref(), Node::Button(_)) {
                    grid_buttons += 1;
                }
            }
        });
    assert_eq!(grid_buttons, 8);

    let mut alerts = 0;
    page.walk(&mut |node| {
        if matches!(node, Node::Alert(_)) {
            alerts += 1;
        }
    });
    assert_eq!(alerts, 4);

    let badges = badges_in(&page, SectionKind::Badges);
    assert_eq!(badges.len(), 8);
    assert_eq!(
        badges
            .iter()
            .filter(|badge| badge.tone == Tone::Neutral)
            .count(),
        4
    );
    assert_eq!(
        badges
            .iter()
            .filter(|badge| badge.tone != Tone::Neutral)
            .count(),
        4
    );

    let titles: Vec<&str> = cards(&page).iter().map(|card| card.title).collect();
    assert_eq!(titles, vec!["Product Card", "Statistics", "Quick Actions"]);
}

#[test]
fn header_and_section_copy_match_literals() {
    let page = default_page();
    assert_eq!(page.header.title, "Shadcn/UI Showcase");
    assert!(page.header.tagline.starts_with("Explore beautiful, accessible"));

    let titles: Vec<&str> = page.sections.iter().map(|section| section.title).collect();
    assert_eq!(
        titles,
        vec![
            "Button Components",
            "Alert Components",
            "Badge Components",
            "Card Components"
        ]
    );
    assert_eq!(
        page.sections[2].description,
        "Small status descriptors for UI elements"
    );
}

#[test]
fn status_badges_use_documented_colours() {
    let page = default_page();
    let status: Vec<(&str, Tone)> = badges_in(&page, SectionKind::Badges)
        .into_iter()
        .filter(|badge| badge.tone != Tone::Neutral)
        .map(|badge| (badge.label, badge.tone))
        .collect();
    assert_eq!(
        status,
        vec![
            ("Active", Tone::Green),
            ("Pending", Tone::Yellow),
            ("Inactive", Tone::Red),
            ("New", Tone::Blue),
        ]
    );

    let variants: Vec<BadgeVariant> = badges_in(&page, SectionKind::Badges)
        .into_iter()
        .take(4)
        .map(|badge| badge.variant)
        .collect();
    assert_eq!(
        variants,
        vec![
            BadgeVariant::Default,
            BadgeVariant::Secondary,
            BadgeVariant::Destructive,
            BadgeVariant::Outline,
        ]
    );
}

#[test]
fn product_card_fields() {
    let page = default_page();
    let product = cards(&page).remove(0);
    assert_eq!(
        product.description,
        "A beautiful product showcase card with all the essential information."
    );
    assert_eq!(
        product.header_badge,
        Some(BadgeNode {
            label: "New",
            variant: BadgeVariant::Default,
            tone: Tone::Green,
        })
    );

    let mut metrics = Vec::new();
    let mut stars = None;
    Node::Card(product.clone()).walk(&mut |node| match node {
        Node::Metric { label, .. } => metrics.push(*label),
        Node::Rating { stars: count } => stars = Some(*count),
        Node::Text { text, .. } => metrics.push(*text),
        _ => {}
    });
    assert_eq!(metrics, vec!["Price", "$99.99", "Rating"]);
    assert_eq!(stars, Some(5));

    match product.footer.as_slice() {
        [Node::Button(button)] => {
            assert_eq!(button.label, "Add to Cart");
            assert!(button.full_width);
        }
        other => panic!("unexpected product footer: {other:?}"),
    }
}

#[test]
fn statistics_card_metrics() {
    let page = default_page();
    let statistics = cards(&page).remove(1);
    let mut rows = Vec::new();
    for node in &statistics.content {
        node.walk(&mut |node| {
            if let Node::Metric { label, value } = node {
                if let Node::Badge(badge) = value.as_ref() {
                    rows.push((*label, badge.label, badge.tone));
                }
            }
        });
    }
    assert_eq!(
        rows,
        vec![
            ("Total Users", "1,234", Tone::Neutral),
            ("Active Sessions", "456", Tone::Blue),
            ("Conversion Rate", "12.3%", Tone::Green),
        ]
    );
}

#[test]
fn quick_actions_are_small_icon_buttons() {
    let page = default_page();
    let cards_section = page.section(SectionKind::Cards).expect("cards section");
    let quick: Vec<(&str, ButtonVariant)> = cards_section
        .buttons()
        .into_iter()
        .filter(|button| button.size == ButtonSize::Sm)
        .map(|button| {
            assert!(button.icon.is_some(), "{} has no icon", button.label);
            (button.label, button.variant)
        })
        .collect();
    assert_eq!(
        quick,
        vec![
            ("Favorite", ButtonVariant::Outline),
            ("Like", ButtonVariant::Outline),
            ("Boost", ButtonVariant::Secondary),
            ("Delete", ButtonVariant::Destructive),
        ]
    );
}

#[test]
fn url_overrides_flow_into_the_page() {
    let config =
        ShowcaseConfig::default().with_overrides(parse_overrides_from_query("?theme=light&reduced-motion=1"));
    let page = compose_page(&config);
    assert_eq!(page.theme, ThemeMode::Light);
    assert!(page
        .sections
        .iter()
        .all(|section| section.motion.transition.delay_ms == 0 && section.motion.is_static()));
}
