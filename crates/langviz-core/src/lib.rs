// File: crates/langviz-core/src/lib.rs
// Summary: Core library entry point; exports stats model, theming, badge cache, and chart rendering.

pub mod badge;
pub mod bars;
pub mod format;
pub mod languages;
pub mod pie;
pub mod renderer;
pub mod scale;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;

pub use badge::{Badge, BadgeCache, BadgeError, BadgeTransport, HttpBadgeTransport};
pub use bars::{HORIZONTAL_TOP_N, VERTICAL_TOP_N};
pub use format::format_value;
pub use languages::{LanguageMeta, LanguageTable, MetaLookup};
pub use pie::PIE_TOP_N;
pub use renderer::ChartRenderer;
pub use stats::{with_other_bucket, BreakdownFn, StatEntry, StatValue};
pub use text::TextPainter;
pub use theme::Theme;
