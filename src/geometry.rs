// ── Rect ──────────────────────────────────────────────────────────────────────
//
// Integer screen rectangle.  `x`/`y` is the top-left corner; `right` and
// `bottom` are exclusive, so a rect occupies columns `x .. right`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rect whose centre sits on `(cx, cy)`.
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_y(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    /// Axis-aligned overlap.  Rects that only share an edge do not intersect,
    /// and an empty rect never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Anything that occupies a rectangle on screen.
pub trait Hitbox {
    fn hitbox(&self) -> Rect;
}

impl Hitbox for Rect {
    fn hitbox(&self) -> Rect {
        *self
    }
}
