extern crate rand;

use color_eyre::eyre::Result;
use rand::prelude::*;

use orb_descriptor::{DescriptorOps,OrbDescriptor,DESCRIPTOR_LENGTH};

fn main() -> Result<()> {
    color_eyre::install()?;

    let descriptor_count = 8;
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0x0DDB1A5ECBAD5EEDu64);

    let descriptors = (0..descriptor_count).map(|_| OrbDescriptor{data: rng.gen::<[u8; DESCRIPTOR_LENGTH]>()}).collect::<Vec<OrbDescriptor>>();
    let refs = descriptors.iter().collect::<Vec<&OrbDescriptor>>();

    let mut mean = OrbDescriptor::new();
    OrbDescriptor::mean_value(&refs, &mut mean);

    println!("mean descriptor: {}", mean.to_string());

    for (idx,descriptor) in descriptors.iter().enumerate() {
        println!("distance of descriptor {} to mean: {}", idx, descriptor.distance(&mean));
    }

    let max_pair = descriptors.iter().enumerate().flat_map(|(i,a)| descriptors.iter().enumerate().skip(i+1).map(move |(j,b)| (i,j,a.distance(b)))).max_by_key(|x| x.2);
    if let Some((i,j,distance)) = max_pair {
        println!("most dissimilar pair: {} and {} at distance {}", i, j, distance);
    }

    Ok(())
}
