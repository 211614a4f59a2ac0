use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        };
        write!(f, "{}", label)
    }
}

/// Rates a password by length and by the character classes actually
/// present in it, independent of the options it was generated from.
pub fn score(password: &str) -> StrengthLevel {
    let mut score = 0;

    let length = password.chars().count();
    if length >= 12 {
        score += 3;
    } else if length >= 8 {
        score += 2;
    } else if length >= 5 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    if score >= 6 {
        StrengthLevel::Strong
    } else if score >= 4 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}
