pub mod capability;
pub mod pointer;

pub use capability::CapabilityWatch;
pub use pointer::wire_pointer_handlers;
