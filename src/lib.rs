
pub mod numerics;
pub mod descriptor;

pub use self::descriptor::DescriptorOps;
pub use self::descriptor::orb::OrbDescriptor;

// Descriptor length in bytes (256 bits total)
pub const DESCRIPTOR_LENGTH: usize = 32;
