//! Seeded random palettes
//!
//! Generates well-formed ACO files from a seed so failures reproduce.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::fixtures::AcoBuilder;

/// Which color spaces a random palette draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceMix {
    /// RGB, grayscale and wide CMYK: the spaces that survive a round trip
    Lossless,
    /// Every known space plus unknown tags
    Everything,
}

impl SpaceMix {
    fn tags(self) -> &'static [u16] {
        match self {
            SpaceMix::Lossless => &[0, 8, 9],
            SpaceMix::Everything => &[0, 1, 2, 3, 7, 8, 9, 10, 42],
        }
    }
}

/// Generate a random palette
///
/// Version 2 names always have an even number of code units so they
/// survive re-encoding with default options.
pub fn random_palette(seed: u64, count: u16, version: u16, mix: SpaceMix) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = AcoBuilder::new(version);

    for _ in 0..count {
        let tags = mix.tags();
        let tag = tags[rng.gen_range(0..tags.len())];
        let record = random_record(&mut rng, tag);

        builder = if version == 2 {
            let name = random_name(&mut rng);
            builder.named(record, &name)
        } else {
            builder.record(record)
        };
    }

    builder.build()
}

fn random_record(rng: &mut ChaCha8Rng, tag: u16) -> [u16; 5] {
    match tag {
        // Percent encodings, occasionally over range
        8 => [tag, percent_word(rng), 0, 0, 0],
        9 => [
            tag,
            percent_word(rng),
            percent_word(rng),
            percent_word(rng),
            percent_word(rng),
        ],
        // RGB leaves z at zero, like Photoshop
        0 => [tag, rng.r#gen(), rng.r#gen(), rng.r#gen(), 0],
        _ => [tag, rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()],
    }
}

fn percent_word(rng: &mut ChaCha8Rng) -> u16 {
    if rng.gen_bool(0.05) {
        rng.gen_range(10001..=u16::MAX)
    } else {
        rng.gen_range(0..=10000)
    }
}

const NAME_POOL: &[&str] = &["Red", "Sky", "Ink", "Sand", "Moss", "Coal", "Blé", "Rosé"];

fn random_name(rng: &mut ChaCha8Rng) -> String {
    let mut name = String::new();
    let parts = rng.gen_range(0..=2);
    for _ in 0..parts {
        name.push_str(NAME_POOL[rng.gen_range(0..NAME_POOL.len())]);
    }
    if name.encode_utf16().count() % 2 == 1 {
        name.push(' ');
    }
    name
}
