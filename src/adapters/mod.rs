// Adapters layer: concrete implementations of the domain ports.

pub mod stamp;
pub mod storage;

pub use stamp::SystemStamper;
pub use storage::LocalStorage;
