use clap::ArgMatches;
use log::debug;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

const DEFAULT_LENGTH: usize = 12;

/// Which character classes go into the pool, and how long the password is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> GenerationOptions {
        GenerationOptions {
            length: DEFAULT_LENGTH,
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
        }
    }
}

impl GenerationOptions {
    pub fn from_matches(matches: &ArgMatches) -> GenerationOptions {
        let length = matches
            .get_one::<usize>("length")
            .copied()
            .unwrap_or(DEFAULT_LENGTH);
        let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
        if clamped != length {
            debug!("length {} out of range, clamped to {}", length, clamped);
        }
        GenerationOptions {
            length: clamped,
            upper: !matches.get_one::<bool>("no-upper").map_or(false, |v| *v),
            lower: !matches.get_one::<bool>("no-lower").map_or(false, |v| *v),
            digits: !matches.get_one::<bool>("no-digits").map_or(false, |v| *v),
            symbols: matches.get_one::<bool>("symbols").map_or(false, |v| *v),
        }
    }

    /// Returns true if the length actually changed.
    pub fn increase_length(&mut self) -> bool {
        if self.length >= MAX_LENGTH {
            return false;
        }
        self.length += 1;
        true
    }

    /// Returns true if the length actually changed.
    pub fn decrease_length(&mut self) -> bool {
        if self.length <= MIN_LENGTH {
            return false;
        }
        self.length -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.upper);
        assert!(options.lower);
        assert!(options.digits);
        assert!(!options.symbols);
    }

    #[test]
    fn length_never_leaves_range() {
        let mut options = GenerationOptions::default();
        for _ in 0..100 {
            options.increase_length();
        }
        assert_eq!(options.length, MAX_LENGTH);
        assert!(!options.increase_length());

        for _ in 0..100 {
            options.decrease_length();
        }
        assert_eq!(options.length, MIN_LENGTH);
        assert!(!options.decrease_length());
    }

    #[test]
    fn adjustment_reports_change() {
        let mut options = GenerationOptions::default();
        assert!(options.increase_length());
        assert_eq!(options.length, 13);
        assert!(options.decrease_length());
        assert_eq!(options.length, 12);
    }
}
