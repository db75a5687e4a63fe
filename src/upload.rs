use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub const DEFAULT_USER_TITLE: &str = "My Video";

/// A file handed over by the picker or a drop. Native drops carry a path;
/// some sources hand the bytes over directly instead.
#[derive(Clone, Debug)]
pub struct FileOffer {
    pub name: String,
    pub media_type: String,
    pub path: Option<PathBuf>,
    pub bytes: Option<Arc<[u8]>>,
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode {name}: {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },
    #[error("no readable contents in {name}")]
    EmptyOffer { name: String },
}

/// Declared media type for a picked file, from its extension. Drops carry
/// their own declared type; the picker path has only the name to go on.
pub fn media_type_for_name(name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UploadStage {
    #[default]
    Idle,
    PreviewReady,
    Shown,
}

#[derive(Clone, Debug)]
pub enum UploadEvent {
    /// A file arrived via the picker or a drop onto the drop zone.
    FileOffered(FileOffer),
    /// The offered file's bytes were read and decoded.
    PreviewDecoded,
    /// The "Show in grid" control was activated with the typed title.
    ConfirmPressed { typed_title: String },
    DragEntered,
    DragLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadEffect {
    /// Read and decode the offer off the UI thread.
    BeginRead(FileOffer),
    /// Give the user tile its default title and the built-in avatar.
    ApplyTileDefaults,
    /// Override the user tile title with the trimmed typed text.
    SetTileTitle(String),
    /// Hide the splash region, show the grid, scroll to its top.
    RevealGrid,
}

impl PartialEq for FileOffer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.media_type == other.media_type
    }
}

/// The upload flow: Idle until a preview decodes, PreviewReady until the
/// visitor confirms, Shown afterwards. There is no way back to Idle; a new
/// file in a later stage just rewrites the preview in place.
#[derive(Debug, Default)]
pub struct UploadMachine {
    pub stage: UploadStage,
    pub has_preview: bool,
    pub drop_active: bool,
}

impl UploadMachine {
    pub fn confirm_enabled(&self) -> bool {
        self.has_preview
    }

    pub fn grid_revealed(&self) -> bool {
        self.stage == UploadStage::Shown
    }

    pub fn on_event(&mut self, event: UploadEvent) -> Vec<UploadEffect> {
        match event {
            UploadEvent::FileOffered(offer) => {
                self.drop_active = false;
                if offer.media_type.starts_with("image/") {
                    vec![UploadEffect::BeginRead(offer)]
                } else {
                    // Non-image files are dropped without a message.
                    Vec::new()
                }
            }
            UploadEvent::PreviewDecoded => {
                self.has_preview = true;
                if self.stage == UploadStage::Idle {
                    self.stage = UploadStage::PreviewReady;
                }
                vec![UploadEffect::ApplyTileDefaults]
            }
            UploadEvent::ConfirmPressed { typed_title } => {
                // The control is disabled until a preview exists, but guard
                // anyway in case the event arrives some other way.
                if !self.has_preview {
                    return Vec::new();
                }
                self.stage = UploadStage::Shown;
                let mut effects = Vec::new();
                let trimmed = typed_title.trim();
                if !trimmed.is_empty() {
                    effects.push(UploadEffect::SetTileTitle(trimmed.to_owned()));
                }
                effects.push(UploadEffect::RevealGrid);
                effects
            }
            UploadEvent::DragEntered => {
                self.drop_active = true;
                Vec::new()
            }
            UploadEvent::DragLeft => {
                self.drop_active = false;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(media_type: &str) -> FileOffer {
        FileOffer {
            name: "holiday.png".into(),
            media_type: media_type.into(),
            path: Some(PathBuf::from("/tmp/holiday.png")),
            bytes: None,
        }
    }

    #[test]
    fn media_type_follows_the_extension() {
        assert_eq!(media_type_for_name("holiday.PNG"), "image/png");
        assert_eq!(media_type_for_name("clip.jpeg"), "image/jpeg");
        assert_eq!(media_type_for_name("notes.txt"), "application/octet-stream");
        assert_eq!(media_type_for_name("no-extension"), "application/octet-stream");
    }

    #[test]
    fn non_image_offer_is_ignored() {
        let mut machine = UploadMachine::default();
        let effects = machine.on_event(UploadEvent::FileOffered(offer("application/pdf")));
        assert!(effects.is_empty());
        assert_eq!(machine.stage, UploadStage::Idle);
        assert!(!machine.confirm_enabled());
    }

    #[test]
    fn image_offer_starts_a_read() {
        let mut machine = UploadMachine::default();
        let effects = machine.on_event(UploadEvent::FileOffered(offer("image/png")));
        assert_eq!(effects, vec![UploadEffect::BeginRead(offer("image/png"))]);
        // Still Idle until the bytes decode.
        assert_eq!(machine.stage, UploadStage::Idle);
    }

    #[test]
    fn decoded_preview_enables_confirmation_with_defaults() {
        let mut machine = UploadMachine::default();
        machine.on_event(UploadEvent::FileOffered(offer("image/png")));
        let effects = machine.on_event(UploadEvent::PreviewDecoded);
        assert_eq!(effects, vec![UploadEffect::ApplyTileDefaults]);
        assert_eq!(machine.stage, UploadStage::PreviewReady);
        assert!(machine.confirm_enabled());
    }

    #[test]
    fn premature_confirm_is_a_no_op() {
        let mut machine = UploadMachine::default();
        let effects = machine.on_event(UploadEvent::ConfirmPressed {
            typed_title: "Sneaky".into(),
        });
        assert!(effects.is_empty());
        assert_eq!(machine.stage, UploadStage::Idle);
    }

    #[test]
    fn confirm_with_typed_title_overrides_default() {
        let mut machine = UploadMachine::default();
        machine.on_event(UploadEvent::PreviewDecoded);
        let effects = machine.on_event(UploadEvent::ConfirmPressed {
            typed_title: "  Vakantie 2025  ".into(),
        });
        assert_eq!(
            effects,
            vec![
                UploadEffect::SetTileTitle("Vakantie 2025".into()),
                UploadEffect::RevealGrid,
            ]
        );
        assert_eq!(machine.stage, UploadStage::Shown);
    }

    #[test]
    fn confirm_with_blank_title_keeps_default() {
        let mut machine = UploadMachine::default();
        machine.on_event(UploadEvent::PreviewDecoded);
        let effects = machine.on_event(UploadEvent::ConfirmPressed {
            typed_title: "   ".into(),
        });
        assert_eq!(effects, vec![UploadEffect::RevealGrid]);
    }

    #[test]
    fn reupload_after_showing_stays_shown() {
        let mut machine = UploadMachine::default();
        machine.on_event(UploadEvent::PreviewDecoded);
        machine.on_event(UploadEvent::ConfirmPressed {
            typed_title: String::new(),
        });
        assert_eq!(machine.stage, UploadStage::Shown);

        machine.on_event(UploadEvent::FileOffered(offer("image/jpeg")));
        machine.on_event(UploadEvent::PreviewDecoded);
        assert_eq!(machine.stage, UploadStage::Shown);
    }

    #[test]
    fn drag_events_only_toggle_the_highlight() {
        let mut machine = UploadMachine::default();
        assert!(machine.on_event(UploadEvent::DragEntered).is_empty());
        assert!(machine.drop_active);
        assert!(machine.on_event(UploadEvent::DragLeft).is_empty());
        assert!(!machine.drop_active);
        assert_eq!(machine.stage, UploadStage::Idle);
    }

    #[test]
    fn dropping_a_file_clears_the_highlight() {
        let mut machine = UploadMachine::default();
        machine.on_event(UploadEvent::DragEntered);
        machine.on_event(UploadEvent::FileOffered(offer("image/png")));
        assert!(!machine.drop_active);
    }
}
