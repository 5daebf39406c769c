/// Axis-aligned rectangle in CSS pixels, viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Root margin in pixels, CSS order (top, right, bottom, left). Negative
/// values shrink the observation root.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn bottom(px: f64) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: px,
            left: 0.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }

    pub fn apply(&self, root: &Rect) -> Rect {
        Rect::new(
            root.left - self.left,
            root.top - self.top,
            root.width + self.left + self.right,
            root.height + self.top + self.bottom,
        )
    }
}

/// What an intersection observer would report for `target` against the
/// viewport shrunk or grown by `margin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub fn visibility(target: &Rect, viewport: &Rect, margin: &RootMargin) -> Visibility {
    let root = margin.apply(viewport);
    match target.intersection(&root) {
        None => Visibility {
            is_intersecting: false,
            ratio: 0.0,
        },
        Some(overlap) => {
            let area = target.area();
            let ratio = if area > 0.0 {
                (overlap.area() / area).min(1.0)
            } else {
                1.0
            };
            Visibility {
                is_intersecting: true,
                ratio,
            }
        }
    }
}

/// Tilt in degrees for the "magnetic" card hover: `(rotate_x, rotate_y)`.
pub fn magnet_tilt(pointer_x: f64, pointer_y: f64, card: &Rect) -> (f64, f64) {
    let x = pointer_x - card.left - card.width / 2.0;
    let y = pointer_y - card.top - card.height / 2.0;
    (y * 0.05, x * 0.05)
}

/// Size and offset of a ripple centred on the pointer, relative to the icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple(pointer_x: f64, pointer_y: f64, icon: &Rect) -> Ripple {
    let size = icon.width.max(icon.height);
    Ripple {
        size,
        left: pointer_x - icon.left - size / 2.0,
        top: pointer_y - icon.top - size / 2.0,
    }
}

/// Per-layer hero offsets for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub content_offset: f64,
    pub visual_offset: f64,
    pub visual_scale: f64,
    pub background_offset: f64,
}

/// `None` once the hero has scrolled out of view.
pub fn parallax(scrolled: f64, hero_height: f64) -> Option<Parallax> {
    if scrolled >= hero_height {
        return None;
    }
    Some(Parallax {
        content_offset: scrolled * 0.2,
        visual_offset: scrolled * 0.1,
        visual_scale: 1.0 + scrolled * 0.0001,
        background_offset: scrolled * 0.5,
    })
}
