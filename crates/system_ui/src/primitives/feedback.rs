use super::*;

#[component]
/// Contextual feedback callout with an optional leading icon.
///
/// `tone` tints the default variant; the destructive variant always uses the
/// destructive palette.
pub fn Alert(
    #[prop(default = AlertVariant::Default)] variant: AlertVariant,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tone = match variant {
        AlertVariant::Destructive => Tone::Neutral,
        AlertVariant::Default => tone,
    };

    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
            data-ui-tone=tone.token()
            data-ui-has-icon=bool_token(icon.is_some())
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </div>
    }
}

#[component]
/// Alert headline slot.
pub fn AlertTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h5
            class=merge_layout_class("ui-alert-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="alert-title"
        >
            {children()}
        </h5>
    }
}

#[component]
/// Alert body slot.
pub fn AlertDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert-description", layout_class)
            data-ui-primitive="true"
            data-ui-kind="alert-description"
        >
            {children()}
        </div>
    }
}
