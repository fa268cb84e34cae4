// Domain layer: the pack tree and the ports the serializer depends on.

pub mod content;
pub mod media;
pub mod model;
pub mod ports;
pub mod question;
