pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PackManifest;

pub use adapters::{LocalStorage, SystemStamper};
pub use core::archive::{PackageWriter, DEFAULT_PACKAGE_PATH};
pub use core::render::{render_pack, XmlRender};
pub use domain::content::{Content, Contents};
pub use domain::media::{Audio, Image, MediaKind};
pub use domain::model::{Pack, Round, Theme};
pub use domain::question::Question;
pub use utils::error::{PackError, Result};
