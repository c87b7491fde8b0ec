/// Drawable surface contract and a CPU-backed pixel surface
use crate::projection::ScreenPoint;

/// 24-bit RGB color, drawn at full opacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Host-provided drawable region
///
/// Drawing operations target a back buffer; `present` publishes it
/// atomically, so a concurrent reader of the presented content never
/// observes a partially drawn frame.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole back buffer with a solid color
    fn fill(&mut self, color: Color);

    /// Draw a line of the given stroke width between two pixel coordinates
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: u32, color: Color);

    /// Publish the back buffer as the presented frame
    fn present(&mut self);

    /// Release the old backing storage and allocate fresh storage at the
    /// new dimensions. Previous content is dropped.
    fn resize(&mut self, width: u32, height: u32);
}

/// Buffer length for the given dimensions, in pixels. Widened before the
/// multiply so large host dimensions cannot overflow `u32`.
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// In-memory pixel surface with separate back and front buffers
#[derive(Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    back: Vec<Color>,
    front: Vec<Color>,
    allocations: usize,
}

impl PixelSurface {
    /// Allocate a surface. Zero-area dimensions are allowed and yield
    /// empty buffers; renderers skip drawing until the surface has area.
    pub fn new(width: u32, height: u32) -> Self {
        let size = buffer_len(width, height);
        Self {
            width,
            height,
            back: vec![Color::BLACK; size],
            front: vec![Color::BLACK; size],
            allocations: 1,
        }
    }

    /// Number of times backing storage has been allocated
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// The most recently presented frame, row-major
    pub fn front(&self) -> &[Color] {
        &self.front
    }

    /// Presented pixel at (x, y), or None outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.front[(y * self.width + x) as usize])
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.back[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Bresenham line into the back buffer, clipped to bounds
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl DrawSurface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Color) {
        for pixel in self.back.iter_mut() {
            *pixel = color;
        }
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: u32, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();

        // Widen the stroke along the minor axis with parallel offset lines
        for i in 0..stroke.max(1) as i32 {
            let offset = i - (stroke as i32 - 1) / 2;
            if dx >= dy {
                self.line(from.x, from.y + offset, to.x, to.y + offset, color);
            } else {
                self.line(from.x + offset, from.y, to.x + offset, to.y, color);
            }
        }
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
    }

    fn resize(&mut self, width: u32, height: u32) {
        let size = buffer_len(width, height);
        self.width = width;
        self.height = height;
        self.back = vec![Color::BLACK; size];
        self.front = vec![Color::BLACK; size];
        self.allocations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_present() {
        let mut surface = PixelSurface::new(4, 3);
        surface.fill(Color::WHITE);
        // Not visible until presented
        assert_eq!(surface.pixel(0, 0), Some(Color::BLACK));
        surface.present();
        assert!(surface.front().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = PixelSurface::new(8, 8);
        surface.draw_line(
            ScreenPoint { x: 1, y: 4 },
            ScreenPoint { x: 6, y: 4 },
            1,
            Color::WHITE,
        );
        surface.present();
        for x in 1..=6 {
            assert_eq!(surface.pixel(x, 4), Some(Color::WHITE));
        }
        assert_eq!(surface.pixel(0, 4), Some(Color::BLACK));
        assert_eq!(surface.pixel(7, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_stroke_two_widens_line() {
        let mut surface = PixelSurface::new(8, 8);
        surface.draw_line(
            ScreenPoint { x: 0, y: 3 },
            ScreenPoint { x: 7, y: 3 },
            2,
            Color::WHITE,
        );
        surface.present();
        assert_eq!(surface.pixel(4, 3), Some(Color::WHITE));
        assert_eq!(surface.pixel(4, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_line_clips_to_bounds() {
        let mut surface = PixelSurface::new(4, 4);
        surface.draw_line(
            ScreenPoint { x: -5, y: -5 },
            ScreenPoint { x: 10, y: 10 },
            1,
            Color::WHITE,
        );
        surface.present();
        assert_eq!(surface.pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut surface = PixelSurface::new(4, 4);
        assert_eq!(surface.allocations(), 1);
        surface.resize(6, 2);
        assert_eq!(surface.allocations(), 2);
        assert_eq!(surface.width(), 6);
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.front().len(), 12);
    }

    #[test]
    fn test_buffer_len_exceeds_u32() {
        // 65536 x 65536 pixels overflows a u32 product; the widened
        // multiply must still produce the exact length
        assert_eq!(buffer_len(1 << 16, 1 << 16), 1usize << 32);
        assert_eq!(buffer_len(u32::MAX, 0), 0);
    }

    #[test]
    fn test_zero_area_surface() {
        let mut surface = PixelSurface::new(0, 5);
        assert!(surface.front().is_empty());
        // Drawing into a zero-area surface is a no-op, not a panic
        surface.draw_line(
            ScreenPoint { x: 0, y: 0 },
            ScreenPoint { x: 3, y: 3 },
            2,
            Color::WHITE,
        );
        surface.present();
        assert_eq!(surface.pixel(0, 0), None);
    }
}
