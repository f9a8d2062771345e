// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure types with no dependency on the GUI toolkit.
//!
//! - [`gallery`] - Artwork records, the non-empty gallery, and the index controller

pub mod gallery;
