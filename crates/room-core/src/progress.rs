//! Named reveal-progress values driven by the timeline.

use std::fmt;

/// Every animated quantity of the scene.
///
/// `Glow`, `Particles` and `Dissolve` are scene-wide intensities rather than
/// room objects; `Dissolve` fades every alpha uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Grid,
    Floor,
    WallLeft,
    WallRight,
    Ceiling,
    Window,
    Door,
    Table,
    Chair,
    Shelf,
    Lamp,
    Plant,
    Picture,
    Rug,
    Dimensions,
    Glow,
    Particles,
    Dissolve,
}

impl Element {
    pub const COUNT: usize = 18;

    pub const ALL: [Element; Element::COUNT] = [
        Element::Grid,
        Element::Floor,
        Element::WallLeft,
        Element::WallRight,
        Element::Ceiling,
        Element::Window,
        Element::Door,
        Element::Table,
        Element::Chair,
        Element::Shelf,
        Element::Lamp,
        Element::Plant,
        Element::Picture,
        Element::Rug,
        Element::Dimensions,
        Element::Glow,
        Element::Particles,
        Element::Dissolve,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Element::Grid => "grid",
            Element::Floor => "floor",
            Element::WallLeft => "wallLeft",
            Element::WallRight => "wallRight",
            Element::Ceiling => "ceiling",
            Element::Window => "window",
            Element::Door => "door",
            Element::Table => "table",
            Element::Chair => "chair",
            Element::Shelf => "shelf",
            Element::Lamp => "lamp",
            Element::Plant => "plant",
            Element::Picture => "picture",
            Element::Rug => "rug",
            Element::Dimensions => "dimensions",
            Element::Glow => "glow",
            Element::Particles => "particles",
            Element::Dissolve => "dissolve",
        }
    }

    /// Drawn from room geometry alone. Particles come from the dust field and
    /// dissolve is never drawn.
    pub const fn is_drawable(self) -> bool {
        !matches!(self, Element::Particles | Element::Dissolve)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The entire mutable animation state: one scalar per [`Element`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressRecord {
    values: [f32; Element::COUNT],
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, element: Element) -> f32 {
        self.values[element.index()]
    }

    #[inline]
    pub fn set(&mut self, element: Element, value: f32) {
        self.values[element.index()] = value;
    }

    pub fn reset(&mut self) {
        self.values = [0.0; Element::COUNT];
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f32)> + '_ {
        Element::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Scene-wide alpha multiplier, `1 - dissolve`.
    #[inline]
    pub fn visibility(&self) -> f32 {
        (1.0 - self.get(Element::Dissolve)).clamp(0.0, 1.0)
    }
}
