//! Enlarged-image overlay.
//!
//! The page links two kinds of thumbnails to the same click handler: post
//! images carry their url in `data-src` and open with rounded corners, profile
//! photos carry it in `data-image-url` and open as a circle. Both go through
//! [`ModalVariant`] so the pairing lives in one place.

use log::error;

use crate::FeedError;

pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background-color: rgba(0, 0, 0, 0.8); display: flex; justify-content: center; \
    align-items: center; z-index: 1000;";
pub const CLOSE_STYLE: &str = "position: absolute; top: 20px; right: 20px; color: white; \
    font-size: 24px; cursor: pointer;";
pub const CLOSE_LABEL: &str = "X";
pub const IMAGE_ALT: &str = "Imagem ampliada";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageShape {
    Rounded,
    Circular,
}

impl ImageShape {
    pub fn border_radius(&self) -> &'static str {
        match self {
            ImageShape::Rounded => "8px",
            ImageShape::Circular => "50%",
        }
    }

    pub fn image_style(&self) -> String {
        format!(
            "max-width: 93%; max-height: 93%; border-radius: {};",
            self.border_radius()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    DataSrc,
    DataImageUrl,
}

impl UrlSource {
    pub fn attribute(&self) -> &'static str {
        match self {
            UrlSource::DataSrc => "data-src",
            UrlSource::DataImageUrl => "data-image-url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalVariant {
    pub shape: ImageShape,
    pub source: UrlSource,
}

impl ModalVariant {
    pub const POST_IMAGE: ModalVariant = ModalVariant {
        shape: ImageShape::Rounded,
        source: UrlSource::DataSrc,
    };
    pub const PROFILE_PHOTO: ModalVariant = ModalVariant {
        shape: ImageShape::Circular,
        source: UrlSource::DataImageUrl,
    };

    /// Picks the variant from whichever url attribute the element carries.
    /// Falls back to the post image variant so a missing url is reported
    /// against `data-src`.
    pub fn detect<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        [Self::POST_IMAGE, Self::PROFILE_PHOTO]
            .into_iter()
            .find(|v| present(lookup(v.source.attribute())))
            .unwrap_or(Self::POST_IMAGE)
    }

    /// Reads the url the way [`ModalVariant::detect`] would but opens it with `shape`.
    pub fn with_shape<L>(shape: ImageShape, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        Self {
            shape,
            source: Self::detect(lookup).source,
        }
    }

    pub fn resolve_url<L>(&self, lookup: L) -> Result<String, FeedError>
    where
        L: Fn(&str) -> Option<String>,
    {
        lookup(self.source.attribute())
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(FeedError::MissingImageUrl)
    }
}

fn present(v: Option<String>) -> bool {
    v.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Everything needed to draw one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub image_url: String,
    pub shape: ImageShape,
    pub overlay_style: &'static str,
    pub image_style: String,
    pub image_alt: &'static str,
    pub close_style: &'static str,
    pub close_label: &'static str,
}

impl OverlayView {
    pub fn new(image_url: impl Into<String>, shape: ImageShape) -> Self {
        Self {
            image_url: image_url.into(),
            shape,
            overlay_style: OVERLAY_STYLE,
            image_style: shape.image_style(),
            image_alt: IMAGE_ALT,
            close_style: CLOSE_STYLE,
            close_label: CLOSE_LABEL,
        }
    }
}

/// Puts overlay views on the page and takes them off again.
pub trait OverlayHost {
    type Mounted;

    fn mount(&self, view: &OverlayView) -> Result<Self::Mounted, FeedError>;
    fn unmount(&self, mounted: Self::Mounted);
}

/// A mounted overlay. Dropping it removes the node it added.
pub struct Overlay<H: OverlayHost> {
    host: H,
    mounted: Option<H::Mounted>,
}

impl<H: OverlayHost> Overlay<H> {
    pub fn open(host: H, view: &OverlayView) -> Result<Self, FeedError> {
        let mounted = host.mount(view)?;
        Ok(Self {
            host,
            mounted: Some(mounted),
        })
    }

    pub fn is_open(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            self.host.unmount(mounted);
        }
    }
}

impl<H: OverlayHost> Drop for Overlay<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Opens the overlay for an element, or logs and returns `None` when the
/// element has no image url.
pub fn open_image_modal<H, L>(
    host: H,
    variant: ModalVariant,
    lookup: L,
) -> Result<Option<Overlay<H>>, FeedError>
where
    H: OverlayHost,
    L: Fn(&str) -> Option<String>,
{
    let url = match variant.resolve_url(lookup) {
        Ok(url) => url,
        Err(e) => {
            error!("{e} (attribute `{}`)", variant.source.attribute());
            return Ok(None);
        }
    };
    Overlay::open(host, &OverlayView::new(url, variant.shape)).map(Some)
}
