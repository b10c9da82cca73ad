/// Upload manager
///
/// Owns the selected image and its preview. A new selection first sits in
/// `pending` while its preview is derived in the background; only the
/// preview for the most recent selection is allowed to land.

use super::data::{PickedFile, Preview, SelectedImage};
use super::workflow::RequestToken;

#[derive(Debug, Default)]
pub struct UploadManager {
    pending: Option<(RequestToken, PickedFile)>,
    selected: Option<SelectedImage>,
}

impl UploadManager {
    /// Start a selection. The previous image stays visible until the
    /// preview for this one arrives.
    pub fn select(&mut self, token: RequestToken, file: PickedFile) {
        self.pending = Some((token, file));
    }

    /// Complete the pending selection if `token` still identifies it.
    ///
    /// Returns false (and drops the preview) when a newer selection or a
    /// clear happened in the meantime.
    pub fn preview_ready(&mut self, token: RequestToken, preview: Preview) -> bool {
        match self.pending.take() {
            Some((pending_token, file)) if pending_token == token => {
                self.selected = Some(SelectedImage { file, preview });
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Remove the selected image and any pending selection
    pub fn clear(&mut self) {
        self.pending = None;
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Name of the file whose preview is still being prepared
    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_ref().map(|(_, file)| file.name.as_str())
    }
}
