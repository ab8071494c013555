//! heartbloom renders a small three-screen greeting experience: a tree of pulsing heart leaves,
//! a birthday card, and a letter, with a generated poem and a generated reassurance line.
//!
//! # Pieces
//!
//! 1. **Canopy**: [`generate`] samples a heart-shaped leaf cloud cropped above a trunk line;
//!    [`LandingCanopy`] memoizes it so re-renders never reshuffle the tree.
//! 2. **Content**: [`ContentRequestController`] owns the poem and reassurance [`ContentSlot`]s,
//!    requests each at most once, falls back to fixed text on any [`ServiceError`], and lets the
//!    reassurance be re-requested with the newest request winning.
//! 3. **Navigation**: [`ViewStateMachine`] holds the current [`ViewState`] and the five legal
//!    edges between screens.
//! 4. **Session**: [`Session`] wires the three together; entering a screen ensures its slot.
//!
//! Text comes from any [`TextFetchService`]; [`GeminiTextService`] is the HTTP implementation.
//! Rendering helpers produce an SVG/PNG of the tree ([`landing_svg`], [`rasterize_svg`]) and a
//! plain-text screen ([`render_screen`]).
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod canopy;
mod config;
mod content;
mod foundation;
mod render;
mod service;
mod session;
mod view;

pub use canopy::cache::LandingCanopy;
pub use canopy::generator::{
    CanopyParams, JITTER_HALF_WIDTH, LEAF_OPACITY_RANGE, LEAF_SIZE_RANGE, LeafPoint,
    MAX_ANIMATION_DELAY_SECS, RADIAL_BIAS_EXPONENT, generate, heart_curve,
};
pub use config::{API_KEY_VARS, BloomConfig, ENDPOINT_VAR, MODEL_VAR, RECIPIENT_VAR};
pub use content::controller::ContentRequestController;
pub use content::prompts::{DEFAULT_RECIPIENT, Prompts};
pub use content::slot::{ContentSlot, SlotKind, SlotStatus};
pub use foundation::core::{BezPath, Canvas, Point, Vec2};
pub use foundation::error::{BloomError, BloomResult};
pub use foundation::rng::{RandomSource, Rng64};
pub use render::prose::{APOLOGY_LETTER, GREETING_BODY, LANDING_TITLE};
pub use render::raster::{MAX_DIM, RasterFrame, rasterize_svg, write_png};
pub use render::svg::{BACKGROUND, LEAF_FILL, TRUNK_STROKE, landing_svg, leaf_path, trunk_paths};
pub use render::terminal::{LOADING_MARK, render_screen};
pub use service::config::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ServiceConfig,
};
pub use service::gemini::GeminiTextService;
pub use service::{ServiceError, TextFetchService, UnconfiguredTextService};
pub use session::{Session, SessionSnapshot, SlotSnapshot};
pub use view::machine::{Transition, ViewAction, ViewState, ViewStateMachine, next_state};
