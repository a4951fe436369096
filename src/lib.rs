//! Backend for the assistant widget suite: a Gemini-backed chat widget and an
//! offline unit-conversion widget.
//!
//! Features are registered behind the plugin system in `core::features` and
//! exposed to the presentation layer through the plain request/response
//! command functions in `api::commands`.

pub mod api;
pub mod core;
pub mod shared;
