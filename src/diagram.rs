//! One-octave keyboard diagram with the chord tones highlighted.
//!
//! Keys are laid out on a unit axis 12 wide and 1 tall, one unit per pitch class,
//! with `y` pointing up. Natural keys fill their whole column; sharp keys are half a
//! unit wide, centred on the left edge of their column, and cover the top half.
//! Highlights cover the full column of each chord tone, with the note name drawn
//! at the centre of the column.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::music::PitchClass;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GOLD: Rgb<u8> = Rgb([255, 215, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Opacity of the highlight drawn over chord tones.
pub const HIGHLIGHT_ALPHA: f64 = 0.6;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Image rows per glyph pixel row are `height / LABEL_SCALE_DIVISOR`, at least 1.
const LABEL_SCALE_DIVISOR: u32 = 50;

/// 5x7 bitmaps for the characters of pitch class names (5 bits per row, MSB = left).
#[rustfmt::skip]
const GLYPHS: [(char, [u8; 7]); 8] = [
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('#', [0b01010, 0b11111, 0b01010, 0b01010, 0b11111, 0b01010, 0b00000]),
];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, bits)| bits)
}

/// An axis-aligned rectangle in diagram units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Where one key sits and how it is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyShape {
    pub pitch: PitchClass,
    pub rect: Rect,
    pub fill: Rgb<u8>,
}

impl KeyShape {
    /// Shape of the key for `pitch`.
    pub fn for_pitch(pitch: PitchClass) -> Self {
        let x = f64::from(pitch.index());
        if pitch.is_sharp() {
            Self {
                pitch,
                rect: Rect::new(x - 0.25, 0.5, 0.5, 0.5),
                fill: BLACK,
            }
        } else {
            Self {
                pitch,
                rect: Rect::new(x, 0.0, 1.0, 1.0),
                fill: WHITE,
            }
        }
    }
}

/// Highlight area for a chord tone.
pub fn highlight_rect(pitch: PitchClass) -> Rect {
    Rect::new(f64::from(pitch.index()), 0.0, 1.0, 1.0)
}

/// Rasterizes keyboard diagrams at a fixed pixel size.
///
/// # Examples
///
/// ```
/// use sonarclave::{KeyboardDiagram, build_chord, PitchClass};
///
/// let chord = build_chord(PitchClass::C, "mayor");
/// let image = KeyboardDiagram::default().render(chord.tones());
/// assert_eq!(image.dimensions(), (600, 150));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardDiagram {
    pub width: u32,
    pub height: u32,
    /// Outline thickness of highlighted keys, in pixels
    pub highlight_outline: u32,
}

impl Default for KeyboardDiagram {
    fn default() -> Self {
        Self {
            width: 600,
            height: 150,
            highlight_outline: 2,
        }
    }
}

impl KeyboardDiagram {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Key shapes in paint order: naturals first, so sharps sit on top of them.
    pub fn layout() -> Vec<KeyShape> {
        let (sharps, naturals): (Vec<_>, Vec<_>) = PitchClass::ALL
            .into_iter()
            .map(KeyShape::for_pitch)
            .partition(|key| key.pitch.is_sharp());
        naturals.into_iter().chain(sharps).collect()
    }

    /// Draws the keyboard with every pitch class in `tones` highlighted.
    pub fn render(&self, tones: &[PitchClass]) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, WHITE);

        for key in Self::layout() {
            self.fill(&mut image, key.rect, key.fill, 1.0);
            self.stroke(&mut image, key.rect, BLACK, 1);
        }
        for &tone in tones {
            let rect = highlight_rect(tone);
            self.fill(&mut image, rect, GOLD, HIGHLIGHT_ALPHA);
            self.stroke(&mut image, rect, RED, self.highlight_outline);
            self.label(&mut image, rect, tone.name());
        }
        image
    }

    /// Draws the keyboard and encodes it as PNG.
    pub fn render_png(&self, tones: &[PitchClass]) -> Result<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        self.render(tones).write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Pixel bounds `(x0, y0, x1, y1)`, end-exclusive, clipped to the image.
    fn pixel_bounds(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let scale_x = f64::from(self.width) / 12.0;
        let scale_y = f64::from(self.height);
        let to_px = |v: f64, max: u32| (v.round().max(0.0) as u32).min(max);

        let x0 = to_px(rect.x * scale_x, self.width);
        let x1 = to_px((rect.x + rect.width) * scale_x, self.width);
        // Flip: diagram y grows upward, image rows grow downward
        let y0 = to_px((1.0 - rect.y - rect.height) * scale_y, self.height);
        let y1 = to_px((1.0 - rect.y) * scale_y, self.height);
        (x0, y0, x1, y1)
    }

    /// Draws `text` in black, centred on `rect`. Characters without a glyph are skipped.
    fn label(&self, image: &mut RgbImage, rect: Rect, text: &str) {
        let scale = (self.height / LABEL_SCALE_DIVISOR).max(1);
        let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
        let count = glyphs.len() as u32;
        if count == 0 {
            return;
        }
        let text_width = (count * GLYPH_WIDTH + count - 1) * scale;
        let text_height = GLYPH_HEIGHT * scale;

        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        let left = ((x0 + x1) / 2).saturating_sub(text_width / 2);
        let top = ((y0 + y1) / 2).saturating_sub(text_height / 2);

        for (n, bits) in glyphs.into_iter().enumerate() {
            let glyph_left = left + n as u32 * (GLYPH_WIDTH + 1) * scale;
            for (row, &row_bits) in bits.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (row_bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = glyph_left + col * scale;
                    let py = top + row as u32 * scale;
                    for y in py..(py + scale).min(self.height) {
                        for x in px..(px + scale).min(self.width) {
                            image.put_pixel(x, y, BLACK);
                        }
                    }
                }
            }
        }
    }

    fn fill(&self, image: &mut RgbImage, rect: Rect, color: Rgb<u8>, alpha: f64) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let pixel = image.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color, alpha);
            }
        }
    }

    fn stroke(&self, image: &mut RgbImage, rect: Rect, color: Rgb<u8>, thickness: u32) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            for x in x0..x1 {
                let on_edge = x < x0 + thickness
                    || x + thickness >= x1
                    || y < y0 + thickness
                    || y + thickness >= y1;
                if on_edge {
                    image.put_pixel(x, y, color);
                }
            }
        }
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - alpha) + f64::from(b) * alpha).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use super::*;
    use crate::music::build_chord;

    /// Pixel at the centre of a pitch column, `level` of the way up from the bottom.
    fn sample(
        image: &RgbImage,
        diagram: &KeyboardDiagram,
        pitch: PitchClass,
        level: f64,
    ) -> Rgb<u8> {
        let x = ((f64::from(pitch.index()) + 0.5) * f64::from(diagram.width) / 12.0) as u32;
        let y = ((1.0 - level) * f64::from(diagram.height)) as u32;
        *image.get_pixel(x, y)
    }

    #[test]
    fn test_layout_shapes() {
        let layout = KeyboardDiagram::layout();
        assert_eq!(layout.len(), 12);
        assert!(layout[..7].iter().all(|key| key.fill == WHITE));
        assert!(layout[7..].iter().all(|key| key.fill == BLACK));

        let c_sharp = KeyShape::for_pitch(PitchClass::CSharp);
        assert_eq!(c_sharp.rect, Rect::new(0.75, 0.5, 0.5, 0.5));
        let e = KeyShape::for_pitch(PitchClass::E);
        assert_eq!(e.rect, Rect::new(4.0, 0.0, 1.0, 1.0));
        assert!(e.rect.contains(4.5, 0.5));
    }

    #[test]
    fn test_unhighlighted_keys() {
        let diagram = KeyboardDiagram::default();
        let image = diagram.render(&[]);
        assert_eq!(sample(&image, &diagram, PitchClass::E, 0.25), WHITE);
        // Sharp keys only cover the top half, left of their column centre
        let x = (1.0 * f64::from(diagram.width) / 12.0) as u32;
        let top = (0.25 * f64::from(diagram.height)) as u32;
        assert_eq!(*image.get_pixel(x, top), BLACK);
        let bottom = (0.75 * f64::from(diagram.height)) as u32;
        assert_ne!(*image.get_pixel(x + 5, bottom), BLACK);
    }

    #[test]
    fn test_chord_tones_highlighted() {
        let diagram = KeyboardDiagram::default();
        let chord = build_chord(PitchClass::C, "mayor");
        let image = diagram.render(chord.tones());

        let highlighted = blend(WHITE, GOLD, HIGHLIGHT_ALPHA);
        assert_eq!(highlighted, Rgb([255, 231, 102]));
        assert_eq!(sample(&image, &diagram, PitchClass::C, 0.25), highlighted);
        assert_eq!(sample(&image, &diagram, PitchClass::E, 0.25), highlighted);
        assert_eq!(sample(&image, &diagram, PitchClass::G, 0.25), highlighted);
        assert_eq!(sample(&image, &diagram, PitchClass::D, 0.25), WHITE);
    }

    #[test]
    fn test_highlight_outline_is_red() {
        let diagram = KeyboardDiagram::default();
        let image = diagram.render(&[PitchClass::F]);
        let (x0, _, _, y1) = diagram.pixel_bounds(highlight_rect(PitchClass::F));
        assert_eq!(*image.get_pixel(x0, y1 - 1), RED);
    }

    fn black_pixels(image: &RgbImage, xs: Range<u32>, ys: Range<u32>) -> usize {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == BLACK)
            .count()
    }

    #[test]
    fn test_chord_tones_labelled() {
        let diagram = KeyboardDiagram::default();
        let plain = diagram.render(&[]);
        let image = diagram.render(build_chord(PitchClass::C, "mayor").tones());

        // C column spans x 0..50; its label is centred on (25, 75)
        assert_eq!(black_pixels(&plain, 15..35, 60..90), 0);
        assert!(black_pixels(&image, 15..35, 60..90) > 0);
        // Top row of the 'C' glyph starts one glyph pixel (3 px) in from the left
        assert_eq!(*image.get_pixel(21, 65), BLACK);
        // D is not a chord tone, so it carries no label
        assert_eq!(black_pixels(&image, 115..135, 60..90), 0);
        // Highlight outside the label is untouched
        assert_eq!(*image.get_pixel(25, 100), blend(WHITE, GOLD, HIGHLIGHT_ALPHA));
    }

    #[test]
    fn test_every_pitch_name_has_glyphs() {
        for pitch in PitchClass::ALL {
            assert!(pitch.name().chars().all(|c| glyph(c).is_some()), "{pitch}");
        }
    }

    #[test]
    fn test_small_diagram_label_stays_in_bounds() {
        let diagram = KeyboardDiagram::new(24, 5);
        let image = diagram.render(&[PitchClass::B, PitchClass::ASharp]);
        assert_eq!(image.dimensions(), (24, 5));
    }

    #[test]
    fn test_render_png() {
        let diagram = KeyboardDiagram::new(120, 30);
        let bytes = diagram.render_png(&[PitchClass::A]).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (120, 30));
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend(WHITE, BLACK, 1.0), BLACK);
        assert_eq!(blend(WHITE, BLACK, 0.0), WHITE);
    }
}
