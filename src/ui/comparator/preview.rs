// SPDX-License-Identifier: MPL-2.0
//! Render handles for payloads, rebuilt only when the payload changes.

use crate::domain::enhancement::ImagePayload;
use iced::widget::image::Handle;
use iced::Size;
use std::io::Cursor;
use std::sync::Arc;

/// An image handle tied to the payload bytes it was built from.
///
/// A new handle means a new GPU upload, so views must not create one per
/// frame; [`ImagePreview::sync`] keeps the existing handle while the source
/// bytes are the same allocation.
#[derive(Debug, Clone, Default)]
pub struct ImagePreview {
    source: Option<Arc<[u8]>>,
    handle: Option<Handle>,
    dimensions: Option<Size>,
}

impl ImagePreview {
    /// Points the preview at `payload`, rebuilding the handle if needed.
    pub fn sync(&mut self, payload: Option<&ImagePayload>) {
        let Some(payload) = payload else {
            *self = Self::default();
            return;
        };

        let bytes = payload.bytes_arc();
        let unchanged = self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &bytes));
        if unchanged {
            return;
        }

        self.handle = Some(Handle::from_bytes(bytes.to_vec()));
        self.dimensions = read_dimensions(&bytes);
        self.source = Some(bytes);
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Pixel size read from the image header, if the format is recognized.
    #[must_use]
    pub fn dimensions(&self) -> Option<Size> {
        self.dimensions
    }
}

#[allow(clippy::cast_precision_loss)]
fn read_dimensions(bytes: &[u8]) -> Option<Size> {
    let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()?;
    Some(Size::new(width as f32, height as f32))
}
