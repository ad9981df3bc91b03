
pub mod orb;

// Capability set a vocabulary/clustering framework needs from a descriptor
// type: a dissimilarity metric, a consensus aggregate and a text codec.
pub trait DescriptorOps: Sized {
    fn distance(&self, other: &Self) -> u32;
    fn mean_value(descriptors: &[&Self], mean: &mut Self);
    fn to_string(&self) -> String;
    fn from_string(s: &str) -> Self;
}
