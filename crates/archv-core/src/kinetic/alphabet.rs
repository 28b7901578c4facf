//! Filler character sets for scrambled glyphs

use rand::Rng;
use tracing::debug;

/// Punctuation-heavy set used by the navigation brand
pub const SYMBOLS: &str = "!<>-_\\/[]{}—=+*^?#________";
/// Upper-case letters and digits
pub const ALNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Symbols plus digits, used by headlines and rotators
pub const GLITCH: &str = "!<>-_\\/[]{}—=+*^?#_0123456789";
/// Bit-ish set for the decoded inquiry
pub const BINARY: &str = "01#%*+-";

/// Character used when an alphabet would otherwise be empty
const FALLBACK: char = ' ';

/// A non-empty set of filler characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::symbols()
    }
}

impl Alphabet {
    /// Build from a string. An empty string falls back to a single space.
    pub fn new(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            debug!("Empty scramble alphabet, falling back to a blank filler");
            return Self {
                chars: vec![FALLBACK],
            };
        }
        Self { chars }
    }

    pub fn symbols() -> Self {
        Self::new(SYMBOLS)
    }

    pub fn alnum() -> Self {
        Self::new(ALNUM)
    }

    pub fn glitch() -> Self {
        Self::new(GLITCH)
    }

    pub fn binary() -> Self {
        Self::new(BINARY)
    }

    /// Resolve a preset name, or treat the value as a literal character set
    pub fn from_name(name: &str) -> Self {
        match name {
            "symbols" => Self::symbols(),
            "alnum" => Self::alnum(),
            "glitch" => Self::glitch(),
            "binary" => Self::binary(),
            other => Self::new(other),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, wrapping around the set
    #[inline]
    pub fn at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }

    /// Uniformly random filler character
    #[inline]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }

    /// Deterministic glyph-obscured stand-in for `target` with spaces kept
    pub fn seed(&self, target: &str) -> String {
        target
            .chars()
            .enumerate()
            .map(|(i, c)| if c == ' ' { ' ' } else { self.at(i * 7) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_falls_back_to_space() {
        let alphabet = Alphabet::new("");
        assert_eq!(alphabet.len(), 1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(alphabet.pick(&mut rng), ' ');
    }

    #[test]
    fn test_seed_keeps_spaces_and_length() {
        let alphabet = Alphabet::binary();
        let seed = alphabet.seed("TRUST WITHOUT DRAMA");
        assert_eq!(seed.chars().count(), 19);
        assert_eq!(seed.chars().nth(5), Some(' '));
        // seven glyphs: every stride of 7 lands on the first one
        assert!(seed.chars().all(|c| c == ' ' || c == '0'));

        let seed = Alphabet::new("ab").seed("abc");
        assert_eq!(seed, "aba");
    }

    #[test]
    fn test_pick_stays_in_set() {
        let alphabet = Alphabet::new("#*");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(matches!(alphabet.pick(&mut rng), '#' | '*'));
        }
    }

    #[test]
    fn test_multibyte_alphabet() {
        let alphabet = Alphabet::symbols();
        assert!(alphabet.chars.contains(&'—'));
        assert_eq!(alphabet.at(alphabet.len()), alphabet.at(0));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Alphabet::from_name("alnum"), Alphabet::alnum());
        assert_eq!(Alphabet::from_name("ab"), Alphabet::new("ab"));
    }
}
