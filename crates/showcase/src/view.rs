//! Leptos binding: renders a composed [`Page`] through `system_ui` primitives.

use leptos::*;
use system_ui::prelude::*;

use crate::config::ShowcaseConfig;
use crate::page::{compose_page, AlertNode, ButtonNode, CardNode, Node, Page, Section};

#[component]
/// The full showcase page: title block plus the staggered component sections.
pub fn ShowcasePage(
    /// Motion timings and theme. Defaults to the built-in configuration.
    #[prop(optional)]
    config: ShowcaseConfig,
) -> impl IntoView {
    let Page {
        theme,
        header,
        container_motion,
        sections,
    } = compose_page(&config);

    view! {
        <main class="showcase-root" data-ui-theme=theme.token()>
            <div class="showcase-container">
                <Motion variants=header.motion ui_slot="page-header">
                    <header class="showcase-header">
                        <Heading role=TextRole::Display>{header.title}</Heading>
                        <Text role=TextRole::Lead tone=TextTone::Secondary>
                            {header.tagline}
                        </Text>
                    </header>
                </Motion>
                <Motion variants=container_motion ui_slot="sections">
                    <Stack gap=LayoutGap::Xl>
                        {sections.into_iter().map(render_section).collect_view()}
                    </Stack>
                </Motion>
            </div>
        </main>
    }
}

fn render_section(section: Section) -> View {
    let Section {
        kind,
        title,
        description,
        motion,
        body,
    } = section;

    view! {
        <Motion variants=motion ui_slot="section">
            <section
                id=format!("section-{}", kind.token())
                class="showcase-section"
                data-section=kind.token()
                aria-label=title
            >
                <Stack gap=LayoutGap::Lg>
                    <div class="showcase-section-heading">
                        <Heading role=TextRole::Title>{title}</Heading>
                        <Text tone=TextTone::Secondary>{description}</Text>
                    </div>
                    {render_nodes(body)}
                </Stack>
            </section>
        </Motion>
    }
    .into_view()
}

fn render_nodes(nodes: Vec<Node>) -> View {
    nodes.into_iter().map(render_node).collect_view()
}

fn render_node(node: Node) -> View {
    match node {
        Node::Stack { gap, children } => {
            view! { <Stack gap>{render_nodes(children)}</Stack> }.into_view()
        }
        Node::Cluster {
            gap,
            justify,
            children,
        } => view! { <Cluster gap justify>{render_nodes(children)}</Cluster> }.into_view(),
        Node::Grid {
            columns,
            gap,
            children,
        } => view! { <Grid columns gap>{render_nodes(children)}</Grid> }.into_view(),
        Node::Labeled { label, child } => view! {
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Label tone=TextTone::Secondary>{label}</Heading>
                {render_node(*child)}
            </Stack>
        }
        .into_view(),
        Node::Metric { label, value } => view! {
            <Cluster justify=LayoutJustify::Between ui_slot="metric">
                <Text role=TextRole::Label tone=TextTone::Secondary>{label}</Text>
                {render_node(*value)}
            </Cluster>
        }
        .into_view(),
        Node::Text { role, text } => view! { <Text role>{text}</Text> }.into_view(),
        Node::Rating { stars } => view! {
            <span
                class="showcase-rating"
                role="img"
                aria-label=format!("Rated {stars} stars")
            >
                {(0..stars)
                    .map(|_| view! { <Icon icon=IconName::Star filled=true /> })
                    .collect_view()}
            </span>
        }
        .into_view(),
        Node::Button(button) => render_button(button),
        Node::Alert(alert) => render_alert(alert),
        Node::Badge(badge) => view! {
            <Badge variant=badge.variant tone=badge.tone>{badge.label}</Badge>
        }
        .into_view(),
        Node::Card(card) => render_card(card),
    }
}

fn render_button(button: ButtonNode) -> View {
    let ButtonNode {
        label,
        variant,
        size,
        icon,
        full_width,
    } = button;

    view! {
        <Button variant size full_width leading_icon=icon>
            {label}
        </Button>
    }
    .into_view()
}

fn render_alert(alert: AlertNode) -> View {
    let AlertNode {
        variant,
        tone,
        icon,
        title,
        body,
        ..
    } = alert;

    view! {
        <Alert variant tone icon>
            <AlertTitle>{title}</AlertTitle>
            <AlertDescription>{body}</AlertDescription>
        </Alert>
    }
    .into_view()
}

fn render_card(card: CardNode) -> View {
    let CardNode {
        title,
        title_icon,
        header_badge,
        description,
        surface,
        span,
        content,
        footer,
    } = card;

    let header = (!title.is_empty()).then(|| {
        view! {
            <CardHeader>
                <Cluster justify=LayoutJustify::Between>
                    <CardTitle icon=title_icon>{title}</CardTitle>
                    {header_badge.map(|badge| render_node(Node::Badge(badge)))}
                </Cluster>
                <CardDescription>{description}</CardDescription>
            </CardHeader>
        }
    });
    let footer = (!footer.is_empty()).then(|| {
        view! { <CardFooter>{render_nodes(footer)}</CardFooter> }
    });

    view! {
        <Card surface span>
            {header}
            <CardContent>{render_nodes(content)}</CardContent>
            {footer}
        </Card>
    }
    .into_view()
}
