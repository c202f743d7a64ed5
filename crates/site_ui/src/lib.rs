//! Shared UI primitive library for the portfolio site pages.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the site CSS layers. Pages compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation, EmptyState, Grid, Heading,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton, NavShell, OverlayScreen,
    PageSection, Panel, Stack, StatTile, Surface, SurfaceVariant, Tab, TabList, Text, TextRole,
    TextTone,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation, EmptyState, Grid,
        Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton, NavShell,
        OverlayScreen, PageSection, Panel, Stack, StatTile, Surface, SurfaceVariant, Tab, TabList,
        Text, TextRole, TextTone,
    };
}
