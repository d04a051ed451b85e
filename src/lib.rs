mod action;
mod battery;
mod card;
mod config;
mod error;
mod host;
mod localize;
mod reading;
mod registry;
mod render;
mod voc;

pub use action::*;
pub use battery::*;
pub use card::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use localize::*;
pub use reading::*;
pub use registry::*;
pub use render::*;
pub use voc::*;
