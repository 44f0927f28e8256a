//! Marble solitaire (workspace facade crate).
//!
//! This package keeps the public `marble_solitaire::{core,view,controller,types}`
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use marble_solitaire_controller as controller;
pub use marble_solitaire_core as core;
pub use marble_solitaire_types as types;
pub use marble_solitaire_view as view;
