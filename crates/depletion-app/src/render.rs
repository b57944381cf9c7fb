//! Software rendering of the hint text and the bar into a 0RGB framebuffer.
//!
//! Layout: the hint in white at (10, 10), a 400×80 frame centred in the
//! window, and a fill inset by 10 px whose width tracks `current / max`.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use glam::IVec2;

use depletion_core::constants::*;
use depletion_core::state::{BarView, LoopSnapshot};

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn end(&self) -> IVec2 {
        self.origin + self.size
    }
}

/// Outer frame and, if anything is left to show, the fill.
pub fn bar_rects(canvas: IVec2, bar: &BarView) -> (Rect, Option<Rect>) {
    let center = canvas / 2;

    let outer = Rect::new(
        center.x - BAR_OUTER_WIDTH / 2,
        center.y - BAR_OUTER_HEIGHT / 2,
        BAR_OUTER_WIDTH,
        BAR_OUTER_HEIGHT,
    );

    let inner_width = bar.fill_width(BAR_INNER_MAX_WIDTH);
    let inner = (inner_width > 0).then(|| {
        Rect::new(
            outer.origin.x + BAR_INSET,
            outer.origin.y + BAR_INSET,
            inner_width,
            BAR_INNER_HEIGHT,
        )
    });

    (outer, inner)
}

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; width * height],
        }
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill `rect`, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let start = rect.origin.max(IVec2::ZERO);
        let end = rect.end().min(self.size());
        if start.x >= end.x || start.y >= end.y {
            return;
        }

        for y in start.y as usize..end.y as usize {
            let row = y * self.width;
            self.pixels[row + start.x as usize..row + end.x as usize].fill(color);
        }
    }

    /// Draw `text` in the 8×8 font with its top-left corner at `origin`.
    /// Characters outside the basic Latin set are skipped but still advance.
    pub fn draw_text(&mut self, origin: IVec2, text: &str, color: u32) {
        let size = self.size();
        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch) else {
                continue;
            };
            let cell = origin + IVec2::new(i as i32 * GLYPH_SIZE, 0);
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    // Bit 0 is the leftmost pixel.
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let p = cell + IVec2::new(col, row as i32);
                    if p.cmpge(IVec2::ZERO).all() && p.cmplt(size).all() {
                        self.pixels[p.y as usize * self.width + p.x as usize] = color;
                    }
                }
            }
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// Redraw the whole frame: hint text, then the first bar in `snapshot`.
pub fn draw_frame(frame: &mut Framebuffer, snapshot: &LoopSnapshot) {
    frame.clear(BACKGROUND_COLOR);
    frame.draw_text(IVec2::new(HINT_X, HINT_Y), HINT_TEXT, TEXT_COLOR);

    let Some(bar) = snapshot.bars.first() else {
        return;
    };

    let (outer, inner) = bar_rects(frame.size(), bar);
    frame.fill_rect(outer, BAR_OUTER_COLOR);
    if let Some(inner) = inner {
        frame.fill_rect(inner, BAR_INNER_COLOR);
    }
}
