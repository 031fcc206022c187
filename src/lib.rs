//! ChiliStation is a headless, deterministic model of the ChiliStation landing page.
//!
//! The page is laid out into a [`Document`], mounted as an [`App`], and driven by explicit
//! input ([`App::click`], [`App::wheel`]) and time ([`App::tick`]):
//!
//! - clicking the heading toggles the reveal: the page palette fades to chili red while a
//!   marker disk grows from the click point, and the decorative canvases mount
//! - text tagged animatable fades and slides in as it scrolls into view, and back out when
//!   scrolled above its trigger
//! - wheel input is smoothed before it moves the page
//!
//! A [`Session`] replays a scripted interaction frame by frame; [`CpuRenderer`] turns each
//! [`FrameState`] into pixels.
#![forbid(unsafe_code)]

mod app;
mod assets;
mod canvas;
mod controllers;
mod foundation;
mod page;
mod render;
mod scroll;
mod session;

pub(crate) mod animation;

pub use crate::foundation::core::{
    Fps, Palette, Point, Rect, Rgba8, Size, Vec2, Viewport,
};
pub use crate::foundation::error::{ChiliError, ChiliResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::registry::{register_plugins, scroll_trigger_enabled};
pub use crate::animation::trigger::{
    ScrollTrigger, ToggleAction, ToggleActions, TriggerCallback, TriggerPosition,
};
pub use crate::animation::tween::{Direction, Lerp, Tween, TweenEvent};
pub use crate::app::{App, AppOpts};
pub use crate::assets::sequence::ImageSequenceStore;
pub use crate::canvas::sequence::SectionCanvas;
pub use crate::controllers::reveal::{RevealController, RevealTimings};
pub use crate::controllers::scroll_fade::{FadeInSpec, FadeState, ScrollFadeController};
pub use crate::page::config::{
    BlockRole, CanvasDetails, PageConfig, SECTION_COUNT, SectionSpec, TextBlock,
};
pub use crate::page::document::{Document, Element, ElementId, ElementKind, InlineStyle};
pub use crate::page::marker::{GrowMarker, MarkerStyle};
pub use crate::page::theme::PageTheme;
pub use crate::render::cpu::{CpuRenderer, CpuRendererOpts, FrameRGBA};
pub use crate::render::frame::{CanvasState, FrameState, MarkerState, TextState};
pub use crate::scroll::smooth::{ScrollHost, SmoothScroll, SmoothingOpts};
pub use crate::session::playback::{Session, SessionStats};
pub use crate::session::script::{Script, ScriptAction, ScriptEvent};
