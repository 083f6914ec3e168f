//! Core of the pinboard editor: an infinite, pannable and zoomable board of
//! pins joined by styled lines, with evidence cards floating in the same
//! world space.
//!
//! The crate is headless. A host (browser shell, CLI, or test) feeds raw
//! pointer, wheel, and key events into [`engine::Editor`], carries out the
//! returned [`engine::Action`]s, and draws from [`render::plan`]. Cases are
//! saved and loaded through [`codec`]; periodic snapshots go through
//! [`autosave`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor session: gesture handling, commands, persistence hooks |
//! | [`scene`] | Pins, lines, and cards with referential integrity |
//! | [`evidence`] | Evidence card types and the create/edit form |
//! | [`viewport`] | Zoom/pan state and screen/world conversion |
//! | [`hit`] | Zoom-aware hit-testing of pins and lines |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`codec`] | Case file format, obfuscation, lenient loading |
//! | [`autosave`] | Snapshot slot stores and the auto-save timer |
//! | [`image`] | Image files to data URLs |
//! | [`render`] | Backend-agnostic display list |
//! | [`config`] | Editor tuning and its variable-based overrides |
//! | [`consts`] | Shared constants (zoom limits, pick radii, colors) |

pub mod autosave;
pub mod codec;
pub mod config;
pub mod consts;
pub mod engine;
pub mod evidence;
pub mod hit;
pub mod image;
pub mod input;
pub mod render;
pub mod scene;
pub mod viewport;
