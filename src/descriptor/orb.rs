use serde::{Serialize, Deserialize};
use color_eyre::eyre::{Result,eyre};

use crate::descriptor::DescriptorOps;
use crate::numerics::ONES_8BITS;
use crate::DESCRIPTOR_LENGTH;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize, Deserialize)]
pub struct OrbDescriptor {
    pub data: [u8; DESCRIPTOR_LENGTH]
}

impl OrbDescriptor {

    pub fn new() -> OrbDescriptor {
        OrbDescriptor{data: [0u8; DESCRIPTOR_LENGTH]}
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<OrbDescriptor> {
        match bytes.len() {
            DESCRIPTOR_LENGTH => {
                let mut descriptor = OrbDescriptor::new();
                descriptor.data.copy_from_slice(bytes);
                Ok(descriptor)
            },
            n => Err(eyre!("invalid descriptor length: expected {} bytes, got {}", DESCRIPTOR_LENGTH, n))
        }
    }
}

impl Default for OrbDescriptor {
    fn default() -> OrbDescriptor {
        OrbDescriptor::new()
    }
}

impl DescriptorOps for OrbDescriptor {

    fn distance(&self, other: &OrbDescriptor) -> u32 {
        let mut ret = 0u32;
        for i in 0..DESCRIPTOR_LENGTH {
            ret += ONES_8BITS[(self.data[i] ^ other.data[i]) as usize] as u32;
        }
        ret
    }

    fn mean_value(descriptors: &[&OrbDescriptor], mean: &mut OrbDescriptor) {
        match descriptors.len() {
            0 => (),
            1 => *mean = *descriptors[0],
            n => {
                let mut sum = [0usize; DESCRIPTOR_LENGTH*8];

                for descriptor in descriptors {
                    for i in 0..DESCRIPTOR_LENGTH {
                        let byte = descriptor.data[i];
                        for bit in 0..8 {
                            if byte & (1 << (7-bit)) != 0 {
                                sum[i*8 + bit] += 1;
                            }
                        }
                    }
                }

                *mean = OrbDescriptor::new();

                // Majority threshold is ceil(n/2), so an exact half vote on
                // even n sets the bit.
                let n2 = n/2 + n%2;
                for (i,&votes) in sum.iter().enumerate() {
                    if votes >= n2 {
                        mean.data[i/8] |= 1 << (7 - (i%8));
                    }
                }
            }
        }
    }

    fn to_string(&self) -> String {
        let mut ss = String::with_capacity(4*DESCRIPTOR_LENGTH);
        for i in 0..DESCRIPTOR_LENGTH {
            ss.push_str(&self.data[i].to_string());
            ss.push(' ');
        }
        ss
    }

    fn from_string(s: &str) -> OrbDescriptor {
        let mut descriptor = OrbDescriptor::new();
        let mut tokens = s.split_whitespace();

        for i in 0..DESCRIPTOR_LENGTH {
            // Truncation to u8, so negative or oversized tokens wrap.
            match tokens.next().map(|token| token.parse::<i64>()) {
                Some(Ok(value)) => descriptor.data[i] = value as u8,
                _ => break
            }
        }

        descriptor
    }
}
