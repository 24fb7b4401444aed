use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use showcase::{parse_overrides_from_query, ShowcaseConfig, ShowcasePage};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Shadcn/UI Showcase" />
        <Meta
            name="description"
            content="Buttons, alerts, badges, and cards rendered from shared UI primitives."
        />

        <Router>
            <Routes>
                <Route path="" view=ShowcaseEntry />
                <Route path="/*any" view=ShowcaseEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    view! { <ShowcasePage config=current_config() /> }
}

/// Embedded configuration with any overrides requested in the page URL.
pub fn current_config() -> ShowcaseConfig {
    let config = ShowcaseConfig::embedded();
    match current_query() {
        Some(query) => config.with_overrides(parse_overrides_from_query(&query)),
        None => config,
    }
}

fn current_query() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        window.location().search().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_use_the_embedded_config() {
        assert_eq!(current_config(), ShowcaseConfig::embedded());
    }
}
