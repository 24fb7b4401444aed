//! Shared UI primitive library for the component showcase.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, the
//! one-shot entrance animation wrapper, and the stable `data-ui-*` DOM
//! contract consumed by the site stylesheet. Pages compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
pub mod motion;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use motion::{
    Easing, Motion, MotionFrame, MotionPhase, MotionTransition, MotionVariants, StaggerConfig,
    StaggerDirection,
};
pub use primitives::{
    Alert, AlertDescription, AlertTitle, AlertVariant, Badge, BadgeVariant, Button, ButtonSize,
    ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardSurface,
    CardTitle, Cluster, Grid, GridColumns, GridSpan, Heading, LayoutAlign, LayoutGap,
    LayoutJustify, Stack, Text, TextRole, TextTone, Tone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Alert, AlertDescription, AlertTitle, AlertVariant, Badge, BadgeVariant, Button,
        ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
        CardSurface, CardTitle, Cluster, Grid, GridColumns, GridSpan, Heading, Icon, IconName,
        IconSize, LayoutAlign, LayoutGap, LayoutJustify, Motion, MotionVariants, Stack,
        StaggerConfig, Text, TextRole, TextTone, Tone,
    };
}
