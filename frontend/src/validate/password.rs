//! Password strength classification for the signup form.

/// Ordered strength tiers. `Empty` and `Weak` block signup; the derived
/// ordering backs the monotonicity guarantee of [`strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Empty,
    Weak,
    Good,
    Strong,
}

impl Strength {
    /// Whether the signup form must refuse submission at this tier.
    pub fn blocks_signup(&self) -> bool {
        matches!(self, Strength::Empty | Strength::Weak)
    }

    /// Fill percent for the strength meter under the password field.
    pub fn percent(&self) -> u32 {
        match self {
            Strength::Empty => 0,
            Strength::Weak => 30,
            Strength::Good => 65,
            Strength::Strong => 100,
        }
    }

    /// Meter color class for the strength bar.
    pub fn meter_class(&self) -> &'static str {
        match self {
            Strength::Empty | Strength::Weak => "progress-error",
            Strength::Good => "progress-warning",
            Strength::Strong => "progress-success",
        }
    }
}

/// Classifies a password by how many of four criteria it satisfies:
/// length >= 8, a digit, an uppercase letter, a symbol. Two or fewer is
/// `Weak`, three `Good`, all four `Strong`. The empty string is `Empty`,
/// never `Weak`. Total over any input, Unicode included.
pub fn strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Empty;
    }

    let mut satisfied = 0;
    if password.chars().count() >= 8 {
        satisfied += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        satisfied += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        satisfied += 1;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        satisfied += 1;
    }

    match satisfied {
        0..=2 => Strength::Weak,
        3 => Strength::Good,
        _ => Strength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty_not_weak() {
        assert_eq!(strength(""), Strength::Empty);
    }

    #[test]
    fn short_lowercase_is_weak() {
        assert_eq!(strength("abc"), Strength::Weak);
        assert_eq!(strength("abcdefgh"), Strength::Weak);
    }

    #[test]
    fn three_criteria_is_good() {
        // length + digit + uppercase, no symbol
        assert_eq!(strength("Abcdefg1"), Strength::Good);
        // length + digit + symbol, no uppercase
        assert_eq!(strength("abcdefg1!"), Strength::Good);
    }

    #[test]
    fn all_criteria_is_strong() {
        assert_eq!(strength("Abcdefg1!"), Strength::Strong);
    }

    #[test]
    fn adding_a_criterion_never_lowers_the_tier() {
        // Ladder where each password satisfies a superset of the previous
        // one's criteria.
        let ladder = ["a", "abcdefgh", "abcdefg1", "Abcdefg1", "Abcdefg1!"];
        for pair in ladder.windows(2) {
            assert!(
                strength(pair[0]) <= strength(pair[1]),
                "{:?} ranked above {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn unicode_input_does_not_panic_or_miscount() {
        // 8 chars counted by chars(), uppercase Ü, digit, symbol
        assert_eq!(strength("Übcdef1!"), Strength::Strong);
        assert_eq!(strength("日本語"), Strength::Weak);
    }

    #[test]
    fn blocking_set_is_empty_and_weak() {
        assert!(Strength::Empty.blocks_signup());
        assert!(Strength::Weak.blocks_signup());
        assert!(!Strength::Good.blocks_signup());
        assert!(!Strength::Strong.blocks_signup());
    }

    #[test]
    fn meter_percent_is_monotonic() {
        assert!(Strength::Empty.percent() < Strength::Weak.percent());
        assert!(Strength::Weak.percent() < Strength::Good.percent());
        assert!(Strength::Good.percent() < Strength::Strong.percent());
    }
}
