//! 2D canvas implementation of `Surface`

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::Surface;

impl Surface for CanvasRenderingContext2d {
    type Image = HtmlImageElement;

    fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32) {
        // Images that have not finished loading draw nothing
        let _ = self.draw_image_with_html_image_element(image, x as f64, y as f64);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64);
    }
}
