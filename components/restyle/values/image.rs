/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Image references held by computed styles.

/// A handle to an image the loader has started fetching.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ImageHandle {
    /// Loader-assigned identity of the image resource.
    pub id: u64,
    /// The URL the image was requested from.
    pub url: String,
}

/// An image referenced from style.
///
/// The cascade never loads anything: it records a `Pending` placeholder that
/// the resolver turns into a `Loaded` handle when it finalizes the style.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum StyleImage {
    /// An image that has not been handed to the loader yet.
    Pending(String),
    /// An image the loader knows about.
    Loaded(ImageHandle),
}

impl StyleImage {
    /// Whether the image still has to be requested.
    pub fn is_pending(&self) -> bool {
        matches!(*self, StyleImage::Pending(..))
    }

    /// The URL of the image.
    pub fn url(&self) -> &str {
        match *self {
            StyleImage::Pending(ref url) => url,
            StyleImage::Loaded(ref handle) => &handle.url,
        }
    }
}

/// The image loading collaborator.
///
/// Requests are fire-and-forget: when the load completes the embedder
/// invalidates style on its own, the resolver never waits.
pub trait ImageLoader {
    /// Starts loading (or looks up) the image at `url`.
    fn request_image(&self, url: &str) -> ImageHandle;
}

/// Resolves a pending image through `loader`. Loaded images are returned
/// unchanged, and without a loader the placeholder is kept.
pub fn resolve_pending(image: &mut StyleImage, loader: Option<&dyn ImageLoader>) -> bool {
    let Some(loader) = loader else {
        return false;
    };
    let handle = match *image {
        StyleImage::Pending(ref url) => loader.request_image(url),
        StyleImage::Loaded(..) => return false,
    };
    *image = StyleImage::Loaded(handle);
    true
}
