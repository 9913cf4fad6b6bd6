//! Platform-free core of the blueprint room animation.
//!
//! The web and native front-ends only supply a [`Surface`] and a clock or a
//! scroll position; everything else lives here.

pub mod constants;
pub mod driver;
pub mod error;
pub mod palette;
pub mod particles;
pub mod pen;
pub mod progress;
pub mod projector;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod timeline;

pub use driver::*;
pub use error::*;
pub use palette::*;
pub use particles::*;
pub use progress::*;
pub use projector::*;
pub use scene::{draw_element, RoomGeometry, SceneConfig, SceneRenderer, DRAW_ORDER};
pub use scroll::*;
pub use surface::*;
pub use timeline::*;
