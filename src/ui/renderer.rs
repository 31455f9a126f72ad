//! Top-level rendering coordinator.
//!
//! The main rendering entry point: compute the view model from application
//! state, draw the browse screen, then draw the open overlay (if any) on
//! top. Rendering is a pure projection of state: no component mutates
//! anything, and all output goes to stdout for the runtime shell to flush.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the application UI to stdout.
///
/// Computes the view model for the given terminal dimensions and delegates
/// to the component renderers. Does not flush; the caller owns the frame
/// boundary.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_browse(vm, theme, cols, rows);
    components::render_overlay_view(&vm.overlay, theme, cols, rows);
}
