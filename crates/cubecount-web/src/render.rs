use cubecount_core::types::Cell;
use cubecount_game::RenderAdapter;
use cubecount_world::Structure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::IsoCamera;
use crate::error::WebError;
use crate::scene::{build_quads, Quad};

const EDGE_COLOR: &str = "rgba(20, 40, 60, 0.85)";

/// Fill color for a face of the given brightness.
pub fn face_color(shade: f32) -> String {
    let lightness = 25.0 + 45.0 * shade.clamp(0.0, 1.0);
    format!("hsl(205, 65%, {lightness:.0}%)")
}

/// Draws the current structure as flat-shaded isometric cubes on a 2D canvas.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    camera: IsoCamera,
    cells: Vec<Cell>,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(WebError::NoCanvasContext)?;

        let mut renderer = Self {
            canvas,
            ctx,
            camera: IsoCamera::new(0.0),
            cells: Vec::new(),
        };
        renderer.fit_to_client();
        Ok(renderer)
    }

    /// Match the backing store to the CSS size times the device pixel ratio.
    fn fit_to_client(&mut self) {
        let dpi_scale = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0) as f32;
        let css_width = self.canvas.client_width().max(1) as f32;
        let css_height = self.canvas.client_height().max(1) as f32;
        let physical_width = (css_width * dpi_scale) as u32;
        let physical_height = (css_height * dpi_scale) as u32;

        if self.canvas.width() != physical_width || self.canvas.height() != physical_height {
            self.canvas.set_width(physical_width);
            self.canvas.set_height(physical_height);
            log::debug!(
                "Canvas: {}x{} CSS, {}x{} physical (DPI: {:.2})",
                css_width,
                css_height,
                physical_width,
                physical_height,
                dpi_scale
            );
        }
    }

    fn draw(&self) {
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

        let line_width = (width.min(height) / 300.0).max(1.0);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_line_join("round");
        self.ctx.set_stroke_style_str(EDGE_COLOR);

        for quad in build_quads(&self.cells, &self.camera, width, height) {
            self.fill_quad(&quad);
        }
    }

    fn fill_quad(&self, quad: &Quad) {
        let [first, rest @ ..] = &quad.points;
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&face_color(quad.shade));
        self.ctx.fill();
        self.ctx.stroke();
    }
}

impl RenderAdapter for CanvasRenderer {
    fn display(&mut self, structure: &Structure, initial_angle: f32) {
        // The previous structure's cells are dropped here.
        self.cells = structure.cells().collect();
        self.camera.yaw = initial_angle;
        self.draw();
    }

    fn set_rotation(&mut self, angle: f32) {
        self.camera.yaw = angle;
        self.draw();
    }

    fn resize(&mut self) {
        self.fit_to_client();
        self.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_color_range() {
        assert_eq!(face_color(1.0), "hsl(205, 65%, 70%)");
        assert_eq!(face_color(0.0), "hsl(205, 65%, 25%)");
        assert_eq!(face_color(3.0), face_color(1.0));
    }

    #[test]
    fn test_brighter_faces_are_lighter() {
        let top = face_color(1.0);
        let side = face_color(0.62);
        assert_ne!(top, side);
        assert_eq!(side, "hsl(205, 65%, 53%)");
    }
}
