use egui::Context;

use super::app_state::AppState;

mod grid;
mod splash;
mod top;

impl AppState {
    pub fn render_top_panel(&mut self, ctx: &Context) {
        top::render(self, ctx);
    }

    pub fn render_splash_panel(&mut self, ctx: &Context) {
        splash::render(self, ctx);
    }

    pub fn render_grid_panel(&mut self, ctx: &Context) {
        grid::render(self, ctx);
    }
}
