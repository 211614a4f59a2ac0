use rand::Rng;

use crate::options::GenerationOptions;

pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// The enabled class alphabets concatenated in a fixed order:
/// uppercase, lowercase, digits, symbols.
pub fn character_pool(options: &GenerationOptions) -> String {
    let mut pool = String::new();
    if options.upper {
        pool.push_str(UPPER);
    }
    if options.lower {
        pool.push_str(LOWER);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }
    pool
}

pub fn generate(options: &GenerationOptions) -> String {
    generate_with(&mut rand::thread_rng(), options)
}

/// Samples each character independently and uniformly from the pool.
/// Generic over the random source so a CSPRNG can be swapped in
/// without changing the contract.
pub fn generate_with(rng: &mut impl Rng, options: &GenerationOptions) -> String {
    let pool: Vec<char> = character_pool(options).chars().collect();
    if pool.is_empty() {
        return String::new();
    }
    (0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exactly_length_characters() {
        for length in [4, 12, 32] {
            let options = GenerationOptions {
                length,
                ..GenerationOptions::default()
            };
            assert_eq!(generate(&options).chars().count(), length);
        }
    }

    #[test]
    fn uses_only_enabled_alphabets() {
        let options = GenerationOptions {
            length: 32,
            upper: false,
            lower: true,
            digits: true,
            symbols: false,
        };
        let password = generate(&options);
        assert!(password
            .chars()
            .all(|c| LOWER.contains(c) || DIGITS.contains(c)));
    }

    #[test]
    fn symbols_only_pool() {
        let options = GenerationOptions {
            length: 16,
            upper: false,
            lower: false,
            digits: false,
            symbols: true,
        };
        let password = generate(&options);
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn empty_pool_yields_empty_password() {
        let options = GenerationOptions {
            length: 12,
            upper: false,
            lower: false,
            digits: false,
            symbols: false,
        };
        assert_eq!(generate(&options), "");
    }

    #[test]
    fn pool_is_concatenated_in_fixed_order() {
        let options = GenerationOptions {
            length: 12,
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        };
        let expected = format!("{}{}{}{}", UPPER, LOWER, DIGITS, SYMBOLS);
        assert_eq!(character_pool(&options), expected);
    }

    #[test]
    fn random_source_is_substitutable() {
        let options = GenerationOptions::default();
        let first = generate_with(&mut StdRng::seed_from_u64(42), &options);
        let second = generate_with(&mut StdRng::seed_from_u64(42), &options);
        assert_eq!(first, second);
    }
}
