pub mod capability;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod mode;
pub mod model;
pub mod navigator;
pub mod orientation;
pub mod picking;
pub mod session;
pub mod store;
pub mod viewer;

pub static PANORAMA_WGSL: &str = include_str!("../shaders/panorama.wgsl");
pub static MARKER_WGSL: &str = include_str!("../shaders/marker.wgsl");

pub use capability::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use mode::*;
pub use model::*;
pub use navigator::*;
pub use orientation::*;
pub use picking::*;
pub use session::*;
pub use store::*;
pub use viewer::*;
