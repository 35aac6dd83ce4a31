//! Pango text measurement and drawing.
//!
//! Cairo's toy font API keeps growing internal font caches, so all text goes
//! through Pango layouts instead. Positions follow Cairo conventions: `y` is
//! the baseline and extents are relative to the baseline origin.

use cairo::Context;
use pango::{FontDescription, Weight as PangoWeight};
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::collections::HashMap;

/// Font selection for one text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    /// Size in pixels
    pub size: f64,
    pub bold: bool,
}

impl<'a> FontSpec<'a> {
    pub fn new(family: &'a str, size: f64, bold: bool) -> Self {
        Self { family, size, bold }
    }
}

/// Ink extents of a text run, Cairo style
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    pub x_bearing: f64,
    /// Baseline to ink top, negative for text above the baseline
    pub y_bearing: f64,
}

impl TextExtents {
    /// Baseline to ink bottom
    pub fn descent(&self) -> f64 {
        self.y_bearing + self.height
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct FontKey {
    family: String,
    bold: bool,
    size_pango: i32,
}

impl FontKey {
    fn new(font: &FontSpec<'_>) -> Self {
        Self {
            family: font.family.to_string(),
            bold: font.bold,
            size_pango: (font.size * pango::SCALE as f64) as i32,
        }
    }
}

/// Cache for FontDescription objects, one frame uses at most a handful
struct FontDescriptionCache {
    cache: HashMap<FontKey, FontDescription>,
    max_entries: usize,
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 16,
        }
    }

    fn get_or_create(&mut self, font: &FontSpec<'_>) -> FontDescription {
        let key = FontKey::new(font);
        if let Some(desc) = self.cache.get(&key) {
            return desc.clone();
        }

        if self.cache.len() >= self.max_entries {
            self.cache.clear();
        }

        let mut desc = FontDescription::new();
        desc.set_family(font.family);
        desc.set_weight(if font.bold {
            PangoWeight::Bold
        } else {
            PangoWeight::Normal
        });
        desc.set_absolute_size(key.size_pango as f64);

        self.cache.insert(key, desc.clone());
        desc
    }
}

thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

fn layout_for(cr: &Context, text: &str, font: &FontSpec<'_>) -> pango::Layout {
    let font_desc = FONT_DESC_CACHE.with(|cache| cache.borrow_mut().get_or_create(font));
    let layout = create_layout(cr);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

/// Measure text ink extents
pub fn text_extents(cr: &Context, text: &str, font: &FontSpec<'_>) -> TextExtents {
    let layout = layout_for(cr, text, font);

    let (ink_rect, _logical_rect) = layout.extents();
    let baseline = layout.baseline();
    let scale = pango::SCALE as f64;

    TextExtents {
        width: ink_rect.width() as f64 / scale,
        height: ink_rect.height() as f64 / scale,
        x_bearing: ink_rect.x() as f64 / scale,
        y_bearing: (ink_rect.y() - baseline) as f64 / scale,
    }
}

/// Draw text with its baseline origin at `(x, y)` using the current source
pub fn show_text_at(cr: &Context, x: f64, y: f64, text: &str, font: &FontSpec<'_>) {
    let layout = layout_for(cr, text, font);

    // Pango draws from the top-left of the logical rect
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    cr.move_to(x, y - baseline);
    show_layout(cr, &layout);
    cr.new_path();
}
