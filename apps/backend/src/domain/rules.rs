use std::ops::RangeInclusive;

/// Letters a session starts with; also the cycling order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound for `max_rounds`: one letter is consumed per round.
pub const MAX_ROUNDS_LIMIT: u32 = 26;
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 10;
pub const MAX_LABEL_CHARS: usize = 20;

pub const DEFAULT_COLUMNS: [&str; 6] = ["Nombre", "Apellido", "País", "Color", "Fruta", "Animal"];

/// What non-host participants see while the letter is cycling.
pub const OBSCURED_LETTER: &str = "*";

// Award schedule for a valid cell.
pub const POINTS_SOLE_RESPONDENT: u32 = 20;
pub const POINTS_UNIQUE: u32 = 10;
pub const POINTS_SHARED: u32 = 5;

pub fn column_count_range() -> RangeInclusive<usize> {
    MIN_COLUMNS..=MAX_COLUMNS
}

pub fn max_rounds_range() -> RangeInclusive<u32> {
    1..=MAX_ROUNDS_LIMIT
}

/// Points for one valid cell.
///
/// `duplicates` is how many valid answers in the column share this cell's
/// normalized text (including itself); `respondents` is how many
/// participants gave any valid answer in the column.
pub fn award_for(duplicates: usize, respondents: usize) -> u32 {
    match (duplicates, respondents) {
        (1, 1) => POINTS_SOLE_RESPONDENT,
        (1, _) => POINTS_UNIQUE,
        _ => POINTS_SHARED,
    }
}
