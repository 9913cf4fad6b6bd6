//! The wireframe room: geometry, configuration and the per-element drawers.

mod annotations;
mod furniture;
mod structure;

pub use annotations::*;
pub use furniture::*;
pub use structure::*;

use crate::constants::{DUST_SEED, ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH};
use crate::palette::Palette;
use crate::particles::DustField;
use crate::pen::Pen;
use crate::progress::{Element, ProgressRecord};
use crate::projector::{Framing, IsoProjector};
use crate::surface::Surface;
use glam::Vec3;

/// Room box in room units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomGeometry {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl RoomGeometry {
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.width, self.depth, self.height) * 0.5
    }
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self {
            width: ROOM_WIDTH,
            depth: ROOM_DEPTH,
            height: ROOM_HEIGHT,
        }
    }
}

/// Everything that distinguishes one page variant of the room from another.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub room: RoomGeometry,
    pub palette: Palette,
    pub framing: Framing,
    pub dust_seed: u64,
}

impl SceneConfig {
    /// Full-page loader: room origin slightly below centre.
    pub fn loader() -> Self {
        Self {
            room: RoomGeometry::default(),
            palette: Palette::default(),
            framing: Framing::loader(),
            dust_seed: DUST_SEED,
        }
    }

    /// In-page illustration: smaller, room box centred in its canvas.
    pub fn illustration() -> Self {
        let room = RoomGeometry::default();
        Self {
            framing: Framing::illustration(room.center()),
            room,
            ..Self::loader()
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::loader()
    }
}

/// Back-to-front order; later elements draw over earlier ones.
pub const DRAW_ORDER: [Element; 16] = [
    Element::Glow,
    Element::Grid,
    Element::Rug,
    Element::Floor,
    Element::WallLeft,
    Element::WallRight,
    Element::Ceiling,
    Element::Window,
    Element::Door,
    Element::Shelf,
    Element::Picture,
    Element::Table,
    Element::Chair,
    Element::Lamp,
    Element::Plant,
    Element::Dimensions,
];

/// Draw one room element at `progress`. Particles and dissolve are not room
/// elements and draw nothing here.
pub fn draw_element(pen: &mut Pen, room: &RoomGeometry, element: Element, progress: f32) {
    match element {
        Element::Grid => draw_grid(pen, room, progress),
        Element::Floor => draw_floor(pen, room, progress),
        Element::WallLeft => draw_wall_left(pen, room, progress),
        Element::WallRight => draw_wall_right(pen, room, progress),
        Element::Ceiling => draw_ceiling(pen, room, progress),
        Element::Window => draw_window(pen, room, progress),
        Element::Door => draw_door(pen, room, progress),
        Element::Table => draw_table(pen, room, progress),
        Element::Chair => draw_chairs(pen, room, progress),
        Element::Shelf => draw_shelf(pen, room, progress),
        Element::Lamp => draw_lamp(pen, room, progress),
        Element::Plant => draw_plant(pen, room, progress),
        Element::Picture => draw_picture(pen, room, progress),
        Element::Rug => draw_rug(pen, room, progress),
        Element::Dimensions => draw_dimensions(pen, room, progress),
        Element::Glow => draw_glow(pen, room, progress),
        Element::Particles | Element::Dissolve => {}
    }
}

/// Owns projection and dust for one canvas; reads a [`ProgressRecord`] per frame.
pub struct SceneRenderer {
    config: SceneConfig,
    projector: IsoProjector,
    dust: DustField,
}

impl SceneRenderer {
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        let projector = IsoProjector::new(width, height, config.framing);
        let dust = DustField::new(config.dust_seed);
        Self {
            config,
            projector,
            dust,
        }
    }

    pub fn projector(&self) -> &IsoProjector {
        &self.projector
    }

    pub fn dust(&self) -> &DustField {
        &self.dust
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.projector.resize(width, height);
        log::debug!(
            "[scene] resize {:.0}x{:.0} scale={:.2}",
            width,
            height,
            self.projector.scale()
        );
    }

    pub fn advance_particles(&mut self, dt_sec: f32) {
        self.dust.advance(dt_sec);
    }

    /// Clear and redraw the whole scene from `record`.
    pub fn render(&self, surface: &mut dyn Surface, record: &ProgressRecord) {
        surface.clear(self.projector.viewport());
        if record.visibility() <= 0.0 {
            return;
        }
        let mut pen = Pen::new(
            surface,
            &self.projector,
            self.config.palette.accent,
            record.visibility(),
        );
        for element in DRAW_ORDER {
            draw_element(&mut pen, &self.config.room, element, record.get(element));
        }
        self.dust.draw(&mut pen, record.get(Element::Particles));
    }
}
