//! Static component showcase page.
//!
//! [`compose_page`] turns the literal [`catalog`] into a framework-free
//! [`Page`] tree; [`ShowcasePage`] renders that tree through the shared
//! `system_ui` primitives with a staggered entrance animation per section.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod catalog;
mod config;
mod page;
mod view;

pub use config::{
    parse_overrides_from_query, ConfigError, MotionConfig, QueryOverrides, ShowcaseConfig,
    ThemeMode,
};
pub use page::{
    compose_page, AlertNode, BadgeNode, ButtonNode, CardNode, Node, Page, PageHeader, Section,
    SectionKind,
};
pub use view::ShowcasePage;
