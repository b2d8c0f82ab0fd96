// SPDX-License-Identifier: MPL-2.0
//! UI composition: the scene state machine, per-gesture state, and the
//! canvas renderer.

pub mod scene;
pub mod stage;
pub mod state;
