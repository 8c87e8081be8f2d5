//! Evolves random strings into a greeting.
//!
//! Each individual is a gene set mapping character position to a symbol
//! index. Fitness is the edit distance to the closer of two greetings.
//! Every generation the best 50 of 200 individuals breed the next 200.
//!
//! ```text
//! cargo run --example hello_world
//! RUST_LOG=debug cargo run --example hello_world
//! ```

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use traitor::combine::GeneCombiner;
use traitor::genes::{GeneSet, Probability, Trait};
use traitor::mutators::GaussianMutator;
use traitor::random::RngSource;

const GREETINGS: [&str; 2] = ["Hello, World!", "Cheers, Mate!"];
const POPULATION: usize = 200;
const BREEDERS: usize = 50;
const MAX_GENERATIONS: usize = 20_000;

/// Symbol table in scrambled order.
///
/// ASCII puts letters and punctuation far apart; indexing into a small
/// shuffled table keeps mutation steps between plausible characters.
struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    fn scrambled<R: Rng>(rng: &mut R) -> Self {
        let mut symbols: Vec<char> = ('a'..='z').chain('A'..='Z').chain([' ', '!', ',']).collect();
        symbols.shuffle(rng);
        Self { symbols }
    }

    fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Gene values wrap around the table, so any mutation stays valid.
    fn index(&self, value: i32) -> usize {
        value.rem_euclid(self.len() as i32) as usize
    }

    fn encode(&self, text: &str) -> Vec<usize> {
        text.chars()
            .filter_map(|c| self.symbols.iter().position(|&s| s == c))
            .collect()
    }

    fn render(&self, genes: &GeneSet<u8, i32>) -> String {
        genes
            .iter()
            .map(|t| self.symbols[self.index(t.value().into_inner())])
            .collect()
    }
}

fn random_genes<R: Rng>(rng: &mut R, length: usize, symbols: usize) -> GeneSet<u8, i32> {
    (0..length)
        .map(|i| Trait::new(i as u8, rng.random_range(0..symbols as i32)))
        .collect()
}

fn levenshtein(left: &[usize], right: &[usize]) -> usize {
    let mut previous: Vec<usize> = (0..=right.len()).collect();
    let mut current = vec![0; right.len() + 1];

    for (i, l) in left.iter().enumerate() {
        current[0] = i + 1;
        for (j, r) in right.iter().enumerate() {
            let cost = usize::from(l != r);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[right.len()]
}

fn fitness(alphabet: &Alphabet, targets: &[Vec<usize>], genes: &GeneSet<u8, i32>) -> usize {
    let word: Vec<usize> = genes
        .iter()
        .map(|t| alphabet.index(t.value().into_inner()))
        .collect();
    targets
        .iter()
        .map(|target| levenshtein(&word, target))
        .min()
        .unwrap_or(usize::MAX)
}

fn main() -> traitor::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::rng();
    let alphabet = Alphabet::scrambled(&mut rng);
    let targets: Vec<Vec<usize>> = GREETINGS.iter().map(|g| alphabet.encode(g)).collect();
    let length = GREETINGS[0].len();

    let combiner = GeneCombiner::<u8, i32>::mutation_only_with_entropy(
        GaussianMutator::new(RngSource::from_entropy()),
        Probability::one_in(10),
    )?;

    let mut generation: Vec<GeneSet<u8, i32>> = (0..POPULATION)
        .map(|_| random_genes(&mut rng, length, alphabet.len()))
        .collect();

    for count in 1..=MAX_GENERATIONS {
        let mut ranked: Vec<(usize, GeneSet<u8, i32>)> = generation
            .into_iter()
            .map(|g| (fitness(&alphabet, &targets, &g), g))
            .collect();
        ranked.sort_by_key(|(f, _)| *f);

        let (best_fitness, best) = &ranked[0];
        debug!("generation {count}: {} (distance {best_fitness})", alphabet.render(best));

        if *best_fitness == 0 {
            info!("{}", alphabet.render(best));
            info!("Completed in {count} generations.");
            return Ok(());
        }

        let mut next = Vec::with_capacity(POPULATION);
        for _ in 0..POPULATION {
            let left = &ranked[rng.random_range(0..BREEDERS)].1;
            let right = &ranked[rng.random_range(0..BREEDERS)].1;
            next.push(combiner.combine(left, &[right])?);
        }
        generation = next;
    }

    warn!("no greeting after {MAX_GENERATIONS} generations");
    Ok(())
}
