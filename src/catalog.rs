// SPDX-License-Identifier: MPL-2.0
//! Built-in artwork catalog.
//!
//! Images are SVG files embedded from `assets/artworks/`; titles, locations and
//! years are Fluent message keys resolved by [`I18n`](crate::i18n::fluent::I18n)
//! at render time.

use crate::domain::gallery::{Artwork, Gallery};
use crate::error::Result;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkFiles;

/// File name of an embedded artwork image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageAsset(pub &'static str);

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Fluent message key of a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelKey(pub &'static str);

impl LabelKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

/// Artwork record as provided by the catalog.
pub type CatalogArtwork = Artwork<ImageAsset, LabelKey>;

const ENTRIES: [(&str, &str, &str, &str); 3] = [
    (
        "loch_ness.svg",
        "artwork-loch-ness-title",
        "artwork-loch-ness-location",
        "artwork-loch-ness-year",
    ),
    (
        "mount_everest.svg",
        "artwork-mount-everest-title",
        "artwork-mount-everest-location",
        "artwork-mount-everest-year",
    ),
    (
        "great_wall.svg",
        "artwork-great-wall-title",
        "artwork-great-wall-location",
        "artwork-great-wall-year",
    ),
];

/// Returns the artworks in display order.
#[must_use]
pub fn artworks() -> Vec<CatalogArtwork> {
    ENTRIES
        .iter()
        .map(|&(image, title, location, year)| {
            Artwork::new(
                ImageAsset(image),
                LabelKey(title),
                LabelKey(location),
                LabelKey(year),
            )
        })
        .collect()
}

/// Builds the gallery shown at startup.
pub fn gallery() -> Result<Gallery<ImageAsset, LabelKey>> {
    Ok(Gallery::new(artworks())?)
}

/// Returns the raw SVG bytes of an embedded image, if present.
#[must_use]
pub fn image_bytes(asset: ImageAsset) -> Option<Cow<'static, [u8]>> {
    ArtworkFiles::get(asset.0).map(|file| file.data)
}
