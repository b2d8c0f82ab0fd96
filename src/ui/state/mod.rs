// SPDX-License-Identifier: MPL-2.0
//! Transient interaction state shared by the scene.

pub mod drag;
pub mod entrance;

pub use drag::DragState;
pub use entrance::Entrance;
