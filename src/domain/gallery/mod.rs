// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! An [`Artwork`] is generic over its image handle `I` and its label type `L`,
//! so the same gallery can hold asset identifiers in the catalog and resolved
//! renderer handles in the UI. A [`Gallery`] is guaranteed non-empty, which lets
//! [`GalleryController`] hand out the current artwork without an `Option`.

mod controller;

pub use controller::GalleryController;

use std::fmt;

/// One displayable gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork<I, L> {
    pub image: I,
    pub title: L,
    pub location: L,
    pub year: L,
}

impl<I, L> Artwork<I, L> {
    #[must_use]
    pub fn new(image: I, title: L, location: L, year: L) -> Self {
        Self {
            image,
            title,
            location,
            year,
        }
    }
}

/// Error raised when a gallery cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The artwork list has no elements.
    Empty,
}

impl GalleryError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::Empty => "error-gallery-empty",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "Gallery must contain at least one artwork"),
        }
    }
}

impl std::error::Error for GalleryError {}

/// Ordered, non-empty, immutable sequence of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery<I, L> {
    artworks: Vec<Artwork<I, L>>,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl<I, L> Gallery<I, L> {
    /// Builds a gallery from an ordered list of artworks.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `artworks` is empty.
    pub fn new(artworks: Vec<Artwork<I, L>>) -> Result<Self, GalleryError> {
        if artworks.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { artworks })
    }

    /// Number of artworks, always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Artwork<I, L>> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork<I, L>> {
        self.artworks.iter()
    }

    /// Converts every image handle, keeping order and length.
    pub fn map_images<J>(self, mut f: impl FnMut(I) -> J) -> Gallery<J, L> {
        Gallery {
            artworks: self
                .artworks
                .into_iter()
                .map(|artwork| Artwork {
                    image: f(artwork.image),
                    title: artwork.title,
                    location: artwork.location,
                    year: artwork.year,
                })
                .collect(),
        }
    }
}
