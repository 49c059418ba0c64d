use raylib::prelude::*;

/// A banner image on the GPU. Every slide covers the same full-window frame;
/// which one shows through is decided by its opacity.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Draws the image scaled to fit `frame`, centered, at the given opacity.
    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rectangle, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let dest = fit_rect(tex_width, tex_height, frame);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            tint(opacity),
        );
    }
}

/// Largest rectangle with the image's aspect ratio that fits inside `frame`, centered.
pub fn fit_rect(width: f32, height: f32, frame: Rectangle) -> Rectangle {
    if width <= 0.0 || height <= 0.0 {
        return Rectangle::new(frame.x, frame.y, 0.0, 0.0);
    }
    let scale = (frame.width / width).min(frame.height / height);
    let scaled_width = width * scale;
    let scaled_height = height * scale;
    Rectangle::new(
        frame.x + (frame.width - scaled_width) * 0.5,
        frame.y + (frame.height - scaled_height) * 0.5,
        scaled_width,
        scaled_height,
    )
}

fn tint(opacity: f32) -> Color {
    Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_letterboxed() {
        let dest = fit_rect(400.0, 100.0, Rectangle::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!((dest.x, dest.y, dest.width, dest.height), (0.0, 75.0, 200.0, 50.0));
    }

    #[test]
    fn tall_image_is_pillarboxed() {
        let dest = fit_rect(100.0, 200.0, Rectangle::new(10.0, 0.0, 300.0, 100.0));
        assert_eq!((dest.x, dest.y, dest.width, dest.height), (135.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(tint(1.0).a, 255);
        assert_eq!(tint(0.0).a, 0);
        assert_eq!(tint(2.0).a, 255);
    }
}
