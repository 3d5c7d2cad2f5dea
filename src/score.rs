//! Pairwise suitability score between a driver and a destination.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const VOWEL_WEIGHT: f64 = 1.5;
const COMMON_FACTOR_MULTIPLIER: f64 = 1.5;

/// Alphabetic character counts of a name; anything non-alphabetic is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterCounts {
    pub fn of(name: &str) -> Self {
        name.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic())
            .fold(Self::default(), |mut counts, c| {
                if VOWELS.contains(&c) {
                    counts.vowels += 1;
                } else {
                    counts.consonants += 1;
                }
                counts
            })
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Scores how well `driver` suits `destination`.
///
/// An even-length destination is worth 1.5 per vowel in the driver's name,
/// anything else (odd or empty) is worth one per consonant. When the two name
/// lengths share a factor greater than one the score is raised by half again.
/// Lengths are counted in characters.
pub fn score(driver: &str, destination: &str) -> f64 {
    let counts = LetterCounts::of(driver);
    let driver_len = driver.chars().count();
    let destination_len = destination.chars().count();

    let mut base = if destination_len != 0 && destination_len % 2 == 0 {
        counts.vowels as f64 * VOWEL_WEIGHT
    } else {
        counts.consonants as f64
    };

    if gcd(driver_len, destination_len) > 1 {
        base *= COMMON_FACTOR_MULTIPLIER;
    }

    base
}
