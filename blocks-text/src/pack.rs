//! Rectangle packers for glyph placement.
//!
//! Two strategies, both deterministic and rasterization-agnostic: they
//! hand out positions for `(w, h)` boxes and never touch pixels.
//!
//! - [`ShelfPacker`] grows rows downward; a row's height is set by the
//!   tallest box placed on it. Simple and predictable.
//! - [`SkylinePacker`] keeps a skyline of occupied heights and drops
//!   each box at the lowest position that fits, leftmost on ties.
//!   Denser when box sizes vary.
//!
//! Padding is added to the right and bottom of every box, so adjacent
//! boxes never share an edge and bilinear sampling does not bleed.

/// Shelf (row) in the atlas.
struct Shelf {
    /// Y offset of this shelf.
    y: u32,
    /// Height of this shelf (tallest box placed on it).
    height: u32,
    /// Next free X position.
    cursor_x: u32,
}

/// Row-based shelf packer.
pub struct ShelfPacker {
    width: u32,
    height: u32,
    padding: u32,
    shelves: Vec<Shelf>,
}

impl ShelfPacker {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
            shelves: Vec::new(),
        }
    }

    /// Reserve a `w` × `h` box. Returns its top-left corner, or `None`
    /// when no shelf can take it.
    pub fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        let padded_w = w + self.padding;
        let padded_h = h + self.padding;

        // Try existing shelves.
        for shelf in &mut self.shelves {
            if shelf.height >= padded_h && shelf.cursor_x + padded_w <= self.width {
                let pos = (shelf.cursor_x, shelf.y);
                shelf.cursor_x += padded_w;
                return Some(pos);
            }
        }

        // Start a new shelf.
        let shelf_y = self.shelves.last().map(|s| s.y + s.height).unwrap_or(0);
        if shelf_y + padded_h > self.height || padded_w > self.width {
            return None;
        }

        self.shelves.push(Shelf {
            y: shelf_y,
            height: padded_h,
            cursor_x: padded_w,
        });
        Some((0, shelf_y))
    }

    /// Number of shelves started so far.
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }
}

/// One horizontal run of the skyline at a given height.
#[derive(Clone, Copy)]
struct SkylineNode {
    x: u32,
    y: u32,
    width: u32,
}

/// Bottom-left skyline packer.
///
/// The node list always tiles `[0, width)` left to right.
pub struct SkylinePacker {
    width: u32,
    height: u32,
    padding: u32,
    nodes: Vec<SkylineNode>,
}

impl SkylinePacker {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
            nodes: vec![SkylineNode { x: 0, y: 0, width }],
        }
    }

    /// Reserve a `w` × `h` box at the lowest fitting skyline position,
    /// leftmost on ties. Returns its top-left corner, or `None` when
    /// nothing fits.
    pub fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        let padded_w = w + self.padding;
        let padded_h = h + self.padding;
        if padded_w > self.width {
            return None;
        }

        let mut best: Option<(usize, u32, u32)> = None;
        for i in 0..self.nodes.len() {
            let x = self.nodes[i].x;
            // Nodes are ordered by x; nothing further right fits either.
            if x + padded_w > self.width {
                break;
            }
            let Some(y) = self.span_height(i, padded_w) else {
                continue;
            };
            if y + padded_h > self.height {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, _, best_y)) => y < best_y,
            };
            if better {
                best = Some((i, x, y));
            }
        }

        let (index, x, y) = best?;
        self.raise(index, x, y + padded_h, padded_w);
        Some((x, y))
    }

    /// Highest skyline level across `[nodes[index].x, +w)`.
    fn span_height(&self, index: usize, w: u32) -> Option<u32> {
        if self.nodes[index].x + w > self.width {
            return None;
        }
        let mut y = 0;
        let mut span = w;
        for node in &self.nodes[index..] {
            y = y.max(node.y);
            if node.width >= span {
                return Some(y);
            }
            span -= node.width;
        }
        None
    }

    /// Replace the skyline across `[x, x+w)` with a run at `top`.
    fn raise(&mut self, index: usize, x: u32, top: u32, w: u32) {
        self.nodes.insert(
            index,
            SkylineNode {
                x,
                y: top,
                width: w,
            },
        );

        let right = x + w;
        // Removals shift the next node into `i`; the index never moves.
        let i = index + 1;
        while i < self.nodes.len() && self.nodes[i].x < right {
            let covered = right - self.nodes[i].x;
            if covered >= self.nodes[i].width {
                self.nodes.remove(i);
            } else {
                self.nodes[i].x += covered;
                self.nodes[i].width -= covered;
                break;
            }
        }

        // Merge adjacent runs at equal height.
        let mut i = 0;
        while i + 1 < self.nodes.len() {
            if self.nodes[i].y == self.nodes[i + 1].y {
                self.nodes[i].width += self.nodes[i + 1].width;
                self.nodes.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
