// SPDX-License-Identifier: MPL-2.0
//! Current-artwork pointer with wraparound navigation.

use super::{Artwork, Gallery, GalleryError};

/// Tracks which artwork of a [`Gallery`] is on screen.
///
/// The index always satisfies `0 <= current_index < gallery.len()`. Navigation
/// wraps in both directions, so the first and last artworks are neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryController<I, L> {
    gallery: Gallery<I, L>,
    current_index: usize,
}

#[allow(clippy::len_without_is_empty)]
impl<I, L> GalleryController<I, L> {
    /// Creates a controller positioned on the first artwork.
    #[must_use]
    pub fn new(gallery: Gallery<I, L>) -> Self {
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// Builds the gallery and the controller in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `artworks` is empty.
    pub fn from_artworks(artworks: Vec<Artwork<I, L>>) -> Result<Self, GalleryError> {
        Gallery::new(artworks).map(Self::new)
    }

    #[must_use]
    pub fn current(&self) -> &Artwork<I, L> {
        &self.gallery.artworks[self.current_index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery<I, L> {
        &self.gallery
    }

    /// Moves to the next artwork, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }

    /// Moves to the previous artwork, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.len();
        self.current_index = (self.current_index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller(len: usize) -> GalleryController<usize, usize> {
        let artworks = (0..len).map(|i| Artwork::new(i, i, i, i)).collect();
        GalleryController::from_artworks(artworks).expect("non-empty gallery")
    }

    #[test]
    fn starts_on_first_artwork() {
        let controller = controller(3);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current().image, 0);
    }

    #[test]
    fn empty_list_fails_with_empty_gallery() {
        let result = GalleryController::<u8, u8>::from_artworks(Vec::new());
        assert_eq!(result, Err(GalleryError::Empty));
    }

    #[test]
    fn three_artwork_walkthrough() {
        let artworks = vec![
            Artwork::new("A", "A", "", ""),
            Artwork::new("B", "B", "", ""),
            Artwork::new("C", "C", "", ""),
        ];
        let mut controller = GalleryController::from_artworks(artworks).unwrap();

        assert_eq!(controller.current().title, "A");
        controller.next();
        assert_eq!(controller.current().title, "B");
        controller.next();
        assert_eq!(controller.current().title, "C");
        controller.next();
        assert_eq!(controller.current().title, "A");
        controller.previous();
        assert_eq!(controller.current().title, "C");
    }

    #[test]
    fn single_artwork_stays_put() {
        let mut controller = controller(1);
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.previous();
        assert_eq!(controller.current_index(), 0);
    }

    proptest! {
        #[test]
        fn k_next_calls_land_on_k_mod_n(n in 1usize..16, k in 0usize..64) {
            let mut controller = controller(n);
            for _ in 0..k {
                controller.next();
            }
            prop_assert_eq!(controller.current_index(), k % n);
        }

        #[test]
        fn k_previous_calls_land_on_n_minus_k_mod_n(n in 1usize..16, k in 0usize..64) {
            let mut controller = controller(n);
            for _ in 0..k {
                controller.previous();
            }
            prop_assert_eq!(controller.current_index(), (n - (k % n)) % n);
        }

        #[test]
        fn next_and_previous_cancel_out(n in 1usize..16, start in 0usize..16) {
            let mut controller = controller(n);
            for _ in 0..start {
                controller.next();
            }
            let before = controller.current_index();

            controller.next();
            controller.previous();
            prop_assert_eq!(controller.current_index(), before);

            controller.previous();
            controller.next();
            prop_assert_eq!(controller.current_index(), before);
        }

        #[test]
        fn n_next_calls_complete_a_cycle(n in 1usize..16, start in 0usize..16) {
            let mut controller = controller(n);
            for _ in 0..start {
                controller.previous();
            }
            let before = controller.current_index();
            for _ in 0..n {
                controller.next();
            }
            prop_assert_eq!(controller.current_index(), before);
        }

        #[test]
        fn index_stays_in_bounds(n in 1usize..16, moves in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut controller = controller(n);
            for forward in moves {
                if forward {
                    controller.next();
                } else {
                    controller.previous();
                }
                prop_assert!(controller.current_index() < n);
                prop_assert_eq!(controller.current().image, controller.current_index());
            }
        }
    }
}
