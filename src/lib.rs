// SPDX-License-Identifier: MPL-2.0
//! `iced_moon` is a single-screen demo built with the Iced GUI framework.
//!
//! It fetches a moon image over HTTPS, floats it into view with an ease-in
//! entrance animation, reveals a caption, and then lets the user drag the
//! image around the window.

pub mod app;
pub mod error;
pub mod media;
pub mod remote;
pub mod test_utils;
pub mod ui;
