use super::*;

#[component]
/// Shared card surface grouping a header, content, and footer slot.
pub fn Card(
    #[prop(default = CardSurface::Standard)] surface: CardSurface,
    #[prop(optional_no_strip)] span: Option<GridSpan>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-surface=surface.token()
            data-ui-span-md=count_token(span.map(|span| span.md))
            data-ui-span-lg=count_token(span.map(|span| span.lg))
        >
            {children()}
        </article>
    }
}

#[component]
/// Card header slot holding the title, description, and header accessories.
pub fn CardHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-card-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
        >
            {children()}
        </header>
    }
}

#[component]
/// Card title with an optional leading icon.
pub fn CardTitle(
    #[prop(optional_no_strip)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3
            class=merge_layout_class("ui-card-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-title"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Md /> })}
            {children()}
        </h3>
    }
}

#[component]
/// Supporting copy under a card title.
pub fn CardDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-card-description", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-description"
        >
            {children()}
        </p>
    }
}

#[component]
/// Card body slot.
pub fn CardContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Card footer slot, usually holding actions.
pub fn CardFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-card-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-footer"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let children = children();
    match role {
        TextRole::Display => view! {
            <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot
                data-ui-variant=role.token() data-ui-tone=tone.token()>
                {children}
            </h1>
        }
        .into_view(),
        TextRole::Title => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot
                data-ui-variant=role.token() data-ui-tone=tone.token()>
                {children}
            </h2>
        }
        .into_view(),
        _ => view! {
            <h4 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot
                data-ui-variant=role.token() data-ui-tone=tone.token()>
                {children}
            </h4>
        }
        .into_view(),
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}
