use std::sync::mpsc::{self, Receiver, Sender};

use egui::{ColorImage, Context};
use tokio::runtime::{Builder, Runtime};

use crate::assets::{Pools, USER_AVATAR};
use crate::grid::{Grid, PLACEHOLDER_TILE_COUNT};
use crate::loader::{self, ListKind, ListMessage};
use crate::prefs::{self, Prefs, ThemeMode};
use crate::upload::{
    DEFAULT_USER_TITLE, FileOffer, PreviewError, UploadEffect, UploadEvent, UploadMachine,
    media_type_for_name,
};

use super::textures::{self, AssetTextures};
use super::theme;

/// The tile reserved for the visitor's own video. Only the upload flow
/// writes here; its thumbnail lives in the texture cache's user slot.
pub struct UserTile {
    pub title: String,
    pub avatar: Option<crate::assets::MediaAsset>,
}

/// Result of one background preview read, sent back to the UI thread.
pub struct PreviewMessage {
    pub name: String,
    pub result: Result<ColorImage, PreviewError>,
}

pub struct AppState {
    pub pools: Pools,
    pub grid: Grid,
    pub user_tile: UserTile,
    pub upload: UploadMachine,
    pub prefs: Prefs,
    pub theme: ThemeMode,
    pub status: String,
    pub title_input: String,
    pub textures: AssetTextures,
    pub runtime: Runtime,
    theme_resolved: bool,
    scroll_grid_to_top: bool,
    list_tx: Sender<ListMessage>,
    list_rx: Receiver<ListMessage>,
    preview_tx: Sender<PreviewMessage>,
    preview_rx: Receiver<PreviewMessage>,
}

impl AppState {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = prefs::load_or_default();
        let runtime = Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to start tokio runtime");
        let (list_tx, list_rx) = mpsc::channel();
        let (preview_tx, preview_rx) = mpsc::channel();

        let pools = Pools::builtin();
        let mut grid = Grid::with_placeholders(PLACEHOLDER_TILE_COUNT);
        grid.populate(&pools, &mut rand::rng());

        let state = Self {
            pools,
            grid,
            user_tile: UserTile {
                title: DEFAULT_USER_TITLE.to_owned(),
                avatar: None,
            },
            upload: UploadMachine::default(),
            prefs,
            theme: ThemeMode::default(),
            status: String::from("Ready."),
            title_input: String::new(),
            textures: AssetTextures::new(),
            runtime,
            theme_resolved: false,
            scroll_grid_to_top: false,
            list_tx,
            list_rx,
            preview_tx,
            preview_rx,
        };
        state.spawn_list_loads(&cc.egui_ctx);
        state
    }

    /// The persisted choice beats the OS preference, which is only known
    /// once input starts flowing, so resolution waits for the first frame.
    pub fn resolve_initial_theme(&mut self, ctx: &Context) {
        if self.theme_resolved {
            return;
        }
        self.theme_resolved = true;
        let system_dark = ctx
            .input(|i| i.raw.system_theme)
            .map(|t| t == egui::Theme::Dark);
        self.theme = prefs::initial_theme(self.prefs.theme, system_dark);
        theme::apply_theme(ctx, self.theme);
    }

    pub fn toggle_theme(&mut self, ctx: &Context) {
        self.theme = self.theme.flipped();
        theme::apply_theme(ctx, self.theme);
        self.prefs.theme = Some(self.theme);
        if let Err(err) = prefs::save(&self.prefs) {
            self.status = format!("Failed to save theme: {err}");
        }
    }

    fn spawn_list_loads(&self, ctx: &Context) {
        for kind in [ListKind::Titles, ListKind::Channels] {
            let tx = self.list_tx.clone();
            let ctx = ctx.clone();
            self.runtime.spawn(async move {
                let result = loader::load(kind.path()).await;
                let _ = tx.send(ListMessage { kind, result });
                ctx.request_repaint();
            });
        }
    }

    /// Adopts whichever lists finished loading; a failure keeps the
    /// built-in fallback. Any success refreshes the whole grid in place.
    pub fn drain_list_loads(&mut self) {
        let mut refreshed = false;
        while let Ok(message) = self.list_rx.try_recv() {
            match message.result {
                Ok(entries) => {
                    self.pools.adopt(message.kind, entries);
                    refreshed = true;
                }
                Err(err) => {
                    tracing::warn!(
                        "could not load {} from {}, using built-in default: {err:#}",
                        message.kind.label(),
                        message.kind.path()
                    );
                }
            }
        }
        if refreshed {
            self.repopulate();
        }
    }

    pub fn repopulate(&mut self) {
        self.grid.populate(&self.pools, &mut rand::rng());
    }

    /// Routes hovered/dropped files into the upload machine. Only the first
    /// dropped file counts, like a single-file input would behave.
    pub fn collect_file_input(&mut self, ctx: &Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        if hovering && !self.upload.drop_active {
            self.handle_upload_event(ctx, UploadEvent::DragEntered);
        } else if !hovering && self.upload.drop_active && dropped.is_empty() {
            self.handle_upload_event(ctx, UploadEvent::DragLeft);
        }
        if let Some(file) = dropped.into_iter().next() {
            if let Some(offer) = offer_from_dropped(file) {
                self.handle_upload_event(ctx, UploadEvent::FileOffered(offer));
            }
        }
    }

    pub fn pick_image_file(&mut self, ctx: &Context) {
        match native_dialog::FileDialog::new()
            .add_filter("Image files", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .add_filter("All files", &["*"])
            .show_open_single_file()
        {
            Ok(Some(path)) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let media_type = media_type_for_name(&name);
                let offer = FileOffer {
                    name,
                    media_type,
                    path: Some(path),
                    bytes: None,
                };
                self.handle_upload_event(ctx, UploadEvent::FileOffered(offer));
            }
            Ok(None) => {}
            Err(err) => {
                self.status = format!("Failed to open file dialog: {err}");
            }
        }
    }

    pub fn handle_upload_event(&mut self, ctx: &Context, event: UploadEvent) {
        for effect in self.upload.on_event(event) {
            self.apply_upload_effect(ctx, effect);
        }
    }

    fn apply_upload_effect(&mut self, ctx: &Context, effect: UploadEffect) {
        match effect {
            UploadEffect::BeginRead(offer) => self.begin_preview_read(ctx, offer),
            UploadEffect::ApplyTileDefaults => {
                self.user_tile.title = DEFAULT_USER_TITLE.to_owned();
                self.user_tile.avatar = Some(USER_AVATAR);
            }
            UploadEffect::SetTileTitle(title) => {
                self.user_tile.title = title;
            }
            UploadEffect::RevealGrid => {
                self.scroll_grid_to_top = true;
                self.status = String::from("Your video is in the grid.");
            }
        }
    }

    fn begin_preview_read(&self, ctx: &Context, offer: FileOffer) {
        let tx = self.preview_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let name = offer.name.clone();
            let result = read_preview(offer).await;
            let _ = tx.send(PreviewMessage { name, result });
            ctx.request_repaint();
        });
    }

    /// A later selection supersedes an earlier in-flight read simply by
    /// writing the same user texture afterwards; failures change nothing.
    pub fn drain_preview_reads(&mut self, ctx: &Context) {
        while let Ok(message) = self.preview_rx.try_recv() {
            match message.result {
                Ok(image) => {
                    self.textures.set_user_image(ctx, image);
                    self.handle_upload_event(ctx, UploadEvent::PreviewDecoded);
                }
                Err(err) => {
                    tracing::warn!("discarding preview for {}: {err}", message.name);
                }
            }
        }
    }

    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_grid_to_top)
    }
}

fn offer_from_dropped(file: egui::DroppedFile) -> Option<FileOffer> {
    let name = if !file.name.is_empty() {
        file.name.clone()
    } else {
        file.path
            .as_ref()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())?
    };
    let media_type = if file.mime.is_empty() {
        media_type_for_name(&name)
    } else {
        file.mime.clone()
    };
    Some(FileOffer {
        name,
        media_type,
        path: file.path,
        bytes: file.bytes,
    })
}

async fn read_preview(offer: FileOffer) -> Result<ColorImage, PreviewError> {
    let bytes: Vec<u8> = if let Some(bytes) = offer.bytes {
        bytes.to_vec()
    } else if let Some(path) = offer.path {
        tokio::fs::read(&path)
            .await
            .map_err(|source| PreviewError::Read { path, source })?
    } else {
        return Err(PreviewError::EmptyOffer { name: offer.name });
    };
    textures::decode_image(&bytes).map_err(|source| PreviewError::Decode {
        name: offer.name,
        source,
    })
}
