//! LRU cache over laid-out strings.
//!
//! Layout is cheap but not free, and UI text repeats heavily frame to
//! frame. The cache keys on the string plus the exact pen position
//! (bit pattern, so -0.0 and 0.0 are distinct keys) and clones the
//! stored layout on a hit. Failed layouts are never cached.

use std::num::NonZeroUsize;
use lru::LruCache;

use crate::atlas::GlyphAtlas;
use crate::layout::{layout_text, TextLayout};
use crate::TextError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LayoutKey {
    text: String,
    pen: (u32, u32),
}

impl LayoutKey {
    fn new(text: &str, pen_x: f32, pen_y: f32) -> Self {
        Self {
            text: text.to_owned(),
            pen: (pen_x.to_bits(), pen_y.to_bits()),
        }
    }
}

/// Bounded cache of [`TextLayout`] results.
pub struct LayoutCache {
    entries: LruCache<LayoutKey, TextLayout>,
}

impl LayoutCache {
    /// A cache holding at most `capacity` layouts. A capacity of zero
    /// is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity.max(1)).unwrap()),
        }
    }

    /// Cached equivalent of [`layout_text`].
    pub fn layout(
        &mut self,
        atlas: &GlyphAtlas,
        text: &str,
        pen_x: f32,
        pen_y: f32,
    ) -> Result<TextLayout, TextError> {
        let key = LayoutKey::new(text, pen_x, pen_y);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }
        let layout = layout_text(atlas, text, pen_x, pen_y)?;
        self.entries.put(key, layout.clone());
        Ok(layout)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached layout, e.g. after rebuilding the atlas.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ===================================================================
// Tests
// ===================================================================
