//! # lacquer
//!
//! A layered theming and widget-styling engine for desktop UI toolkits.
//!
//! lacquer turns semantic style requests ("a PRIMARY button, MID shade")
//! into registered toolkit-native styles, deterministically: equivalent
//! requests collapse onto one canonical key, each distinct key registers
//! exactly one native style per process lifetime, and two different visual
//! intents can never collide on a name.
//!
//! ## Core Systems
//!
//! - **[`color`]** — Color values: hex parsing, HSL, WCAG contrast math
//! - **[`tokens`]** — Design tokens: color families with derived shade
//!   scales, typography, spacing, borders; TOML theme loading
//! - **[`style`]** — Style engine internals: canonical key builder, style
//!   cache, composed specs, backend abstraction, per-family resolvers
//! - **[`engine`]** — The [`engine::StyleEngine`] facade: one explicitly
//!   owned instance per process, created at bootstrap
//! - **[`factory`]** — Widget factory: builds widget descriptors with
//!   resolved style handles attached

// Foundation
pub mod color;

// Token system
pub mod tokens;

// Style engine
pub mod style;

// Facade and its primary client
pub mod engine;
pub mod factory;
