extern crate rand;

use std::fs::File;
use std::io::{BufRead,BufReader,Write};

use color_eyre::eyre::Result;
use rand::prelude::*;

use orb_descriptor::{DescriptorOps,OrbDescriptor,DESCRIPTOR_LENGTH};

fn main() -> Result<()> {
    color_eyre::install()?;

    let path = std::env::temp_dir().join("descriptors.txt");
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0x0DDB1A5ECBAD5EEDu64);

    let descriptors = (0..16).map(|_| OrbDescriptor{data: rng.gen::<[u8; DESCRIPTOR_LENGTH]>()}).collect::<Vec<OrbDescriptor>>();

    // One descriptor per line; the newline is ours, the encoder only emits
    // the space-separated byte values.
    let mut file = File::create(&path)?;
    for descriptor in &descriptors {
        writeln!(file,"{}",descriptor.to_string())?;
    }

    let reader = BufReader::new(File::open(&path)?);
    let loaded = reader.lines().map(|line| Ok(OrbDescriptor::from_string(&line?))).collect::<Result<Vec<OrbDescriptor>>>()?;

    assert_eq!(loaded,descriptors);
    println!("round-tripped {} descriptors through {}", loaded.len(), path.display());

    println!("first descriptor as yaml:\n{}", serde_yaml::to_string(&descriptors[0])?);

    Ok(())
}
