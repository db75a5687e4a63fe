mod app_state;
mod panels;
mod textures;
mod theme;

pub use app_state::AppState;

use egui::Context;

impl eframe::App for AppState {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.resolve_initial_theme(ctx);

        // Finished background work first, so this frame draws its results.
        self.drain_list_loads();
        self.drain_preview_reads(ctx);
        self.collect_file_input(ctx);

        self.render_top_panel(ctx);
        if self.upload.grid_revealed() {
            self.render_grid_panel(ctx);
        } else {
            self.render_splash_panel(ctx);
        }
    }
}
