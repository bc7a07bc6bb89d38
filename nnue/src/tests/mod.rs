use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::network::{Network, H1, H2, INPUT_SIZE};


/// A network with small random weights, reproducible from `seed`.
pub(crate) fn random_network(seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = |len: usize, range: i16| -> Vec<i16> {
        (0..len).map(|_| rng.gen_range(-range..=range)).collect()
    };

    let w1 = values(INPUT_SIZE * H1, 64);
    let b1 = values(H1, 64);
    let w2 = values(H1 * H2, 32);
    let b2 = values(H2, 32);
    let w3 = values(H2, 32);
    let b3 = values(1, 32)[0];

    Network::from_parts(w1, b1, w2, b2, w3, b3).unwrap()
}
