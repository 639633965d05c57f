mod registry;
pub mod router;

pub use registry::PlayerRegistry;
