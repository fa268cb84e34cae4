pub mod archive;
pub mod render;
