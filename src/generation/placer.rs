use crate::rng::SeededRng;
use crate::types::{NUMBER_TOKENS, RESOURCE_DISTRIBUTION, Resource};

/// Shuffled resource multiset, one entry per hex in board order.
pub fn place_resources(rng: &mut SeededRng) -> Vec<Option<Resource>> {
    let mut resources = RESOURCE_DISTRIBUTION.to_vec();
    rng.shuffle(&mut resources);
    resources
}

/// Shuffled tokens dealt to the non-desert hexes in board order.
pub fn place_numbers(resources: &[Option<Resource>], rng: &mut SeededRng) -> Vec<Option<u8>> {
    let mut tokens = NUMBER_TOKENS.to_vec();
    rng.shuffle(&mut tokens);

    let mut dealt = tokens.into_iter();
    resources
        .iter()
        .map(|resource| match resource {
            Some(_) => dealt.next(),
            None => None,
        })
        .collect()
}
