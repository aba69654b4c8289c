#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Barnsley fern renderer
//!
//! The Barnsley fern is the classic example of an iterated function
//! system: four affine contractions of the plane, each chosen at
//! random with a fixed probability, applied over and over to a single
//! wandering point.  One transform squashes the point onto the stem,
//! one grows the main frond, and two mirror the point into the left
//! and right leaflets.  The wandering point never settles, but the
//! set of places it visits converges on the fern.
//!
//! Rather than plotting each visit directly, this crate accumulates
//! visits into a density grid, one cell per output pixel.  After the
//! walk finishes, each cell's count is normalized against a fixed
//! ceiling and pushed through a transfer function that turns density
//! into color, so sparse edges stay visible while the dense spine
//! saturates.  The result is written out as a plain-text PPM.

pub mod color;
pub mod error;
pub mod fern;
pub mod plane;
pub mod render;

pub use color::{grayscale, greenscale, Color, BLACK, GREEN, WHITE};
pub use error::FernError;
pub use fern::FernRenderer;
pub use plane::FernPlane;
pub use render::{render, render_threaded};
