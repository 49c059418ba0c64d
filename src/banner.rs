use std::time::Duration;

use lunbo::{NodeId, Page};
use raylib::prelude::*;
use tracing::debug;

use lunbo::constants::*;
use crate::slide::Slide;

/// Window front-end for a [`Page`]: paints the slides and the dot row, and
/// turns mouse movement over the dots into pointer enter/leave events.
pub struct Banner {
    page: Page,
    slides: Vec<Slide>,
    hovered: Option<NodeId>,
}

impl Banner {
    /// `slides` must line up with the page's slide elements.
    pub fn new(page: Page, slides: Vec<Slide>) -> Self {
        Self {
            page,
            slides,
            hovered: None,
        }
    }

    pub fn update(&mut self, dt: Duration, mouse: Vector2, screen_width: f32, screen_height: f32) {
        let dots = self.page.nav_elements();
        let rects = dot_layout(dots.len(), screen_width, screen_height);
        let under_mouse = dots
            .iter()
            .zip(rects.iter())
            .find(|(_, rect)| contains(rect, mouse))
            .map(|(node, _)| *node);

        if under_mouse != self.hovered {
            if let Some(previous) = self.hovered {
                self.page.pointer_leave(previous);
            }
            if let Some(current) = under_mouse {
                self.page.pointer_enter(current);
            }
            debug!(from = ?self.hovered, to = ?under_mouse, "hover changed");
            self.hovered = under_mouse;
        }

        self.page.advance(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        let frame = Rectangle::new(0.0, 0.0, screen_width, screen_height);

        for (slide, node) in self.slides.iter().zip(self.page.slide_elements()) {
            slide.draw(d, frame, self.page.opacity(node));
        }

        let highlight = self.page.carousel().map(|c| c.config().highlight_class.as_str());
        let dots = self.page.nav_elements();
        for (node, rect) in dots.iter().zip(dot_layout(dots.len(), screen_width, screen_height)) {
            let active = highlight.is_some_and(|class| self.page.dom().class_contains(*node, class));
            let color = if active { Color::ORANGE } else { Color::new(255, 255, 255, 140) };
            d.draw_rectangle_rec(rect, color);
        }
    }

    /// Stops the carousel interval before the window goes away.
    pub fn unload(&mut self) {
        self.page.unload();
    }
}

/// Dot rectangles for `count` nav elements, centered in a row near the bottom edge.
pub fn dot_layout(count: usize, screen_width: f32, screen_height: f32) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let row_width = count as f32 * DOT_SIZE + (count - 1) as f32 * DOT_GAP;
    let start_x = (screen_width - row_width) * 0.5;
    let y = screen_height - DOT_MARGIN_BOTTOM - DOT_SIZE;
    (0..count)
        .map(|i| Rectangle::new(start_x + i as f32 * (DOT_SIZE + DOT_GAP), y, DOT_SIZE, DOT_SIZE))
        .collect()
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunbo::CarouselConfig;

    fn banner() -> Banner {
        let mut page = Page::banner(&["a.jpg", "b.jpg", "c.jpg"], CarouselConfig::default());
        lunbo::init(&mut page);
        Banner::new(page, Vec::new())
    }

    fn center(rect: Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn dots_are_centered_on_one_row() {
        let rects = dot_layout(3, 1000.0, 500.0);
        assert_eq!(rects.len(), 3);
        let row_width = 3.0 * DOT_SIZE + 2.0 * DOT_GAP;
        assert_eq!(rects[0].x, (1000.0 - row_width) / 2.0);
        assert!(rects.iter().all(|r| r.y == 500.0 - DOT_MARGIN_BOTTOM - DOT_SIZE));
        assert_eq!(rects[2].x + rects[2].width - rects[0].x, row_width);
        assert!(dot_layout(0, 1000.0, 500.0).is_empty());
    }

    #[test]
    fn hovering_a_dot_pauses_on_its_slide() {
        let mut banner = banner();
        let rects = dot_layout(3, 1000.0, 500.0);
        let idle = Vector2::new(0.0, 0.0);

        banner.update(Duration::from_millis(1000), idle, 1000.0, 500.0);
        assert_eq!(banner.page.highlighted(), vec![0]);

        banner.update(Duration::from_millis(500), center(rects[2]), 1000.0, 500.0);
        assert_eq!(banner.page.highlighted(), vec![2]);
        banner.update(Duration::from_millis(4000), center(rects[2]), 1000.0, 500.0);
        assert_eq!(banner.page.highlighted(), vec![2]);

        banner.update(Duration::from_millis(0), idle, 1000.0, 500.0);
        assert_eq!(banner.hovered, None);
        banner.update(Duration::from_millis(1000), idle, 1000.0, 500.0);
        assert_eq!(banner.page.highlighted(), vec![0]);
    }

    #[test]
    fn sliding_between_dots_leaves_then_enters() {
        let mut banner = banner();
        let rects = dot_layout(3, 1000.0, 500.0);

        banner.update(Duration::ZERO, center(rects[0]), 1000.0, 500.0);
        banner.update(Duration::ZERO, center(rects[1]), 1000.0, 500.0);
        assert_eq!(banner.page.highlighted(), vec![1]);
        assert!(banner.page.timers().pending().is_empty());
    }
}
