// ---------------------------------------------------------------------------
// Frequency extraction from free-text descriptions
// ---------------------------------------------------------------------------

/// Normalization ceiling for progress bars: upper bound of human hearing, Hz.
pub const FREQ_CEILING_HZ: u32 = 15_000;

/// Extract every integer embedded in `text`, left to right.
///
/// Any character that is neither an ASCII digit nor whitespace acts as a
/// separator, so unit suffixes contribute nothing and a decimal point splits
/// its number: `"2.5kHz"` yields `[2, 5]`, not `2500`. This matches the
/// historical chart behaviour and the range filter depends on it.
///
/// Total over any input; a string without digits yields an empty vec.
pub fn extract_frequencies(text: &str) -> Vec<u32> {
    text.chars()
        .map(|c| if c.is_ascii_digit() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        // Digit runs long enough to overflow u32 are discarded rather than
        // saturated; nothing in a frequency chart comes close.
        .filter_map(|tok| tok.parse::<u32>().ok())
        .collect()
}

/// The digits of the first whitespace-delimited token of `clause`, parsed as
/// an integer. `None` when the leading token contains no digits.
///
/// This drives the per-clause progress bar: a clause like `"700Hz attack"`
/// yields `Some(700)`, while `"attack at 700Hz"` yields `None` because the
/// leading token is a word.
pub fn leading_value(clause: &str) -> Option<u32> {
    let token = clause.split_whitespace().next()?;
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order_with_duplicates() {
        assert_eq!(
            extract_frequencies("80Hz then 240Hz then 80Hz again"),
            vec![80, 240, 80]
        );
    }

    #[test]
    fn khz_digits_split_at_the_decimal_point() {
        assert_eq!(extract_frequencies("Bottom at 50 to 80Hz"), vec![50, 80]);
        assert_eq!(extract_frequencies("attack at 700Hz"), vec![700]);
        assert_eq!(extract_frequencies("snap at 2.5kHz"), vec![2, 5]);
    }

    #[test]
    fn full_description_concatenates_clause_results() {
        assert_eq!(
            extract_frequencies("Bottom at 50 to 80Hz, attack at 700Hz, snap at 2.5kHz"),
            vec![50, 80, 700, 2, 5]
        );
    }

    #[test]
    fn no_digits_yields_empty() {
        assert_eq!(extract_frequencies("warmth and presence"), Vec::<u32>::new());
        assert_eq!(extract_frequencies(""), Vec::<u32>::new());
    }

    #[test]
    fn separators_include_punctuation_and_letters() {
        // "4x12" splits on the 'x'
        assert_eq!(extract_frequencies("4x12 cabinet"), vec![4, 12]);
    }

    #[test]
    fn leading_value_requires_digits_in_first_token() {
        assert_eq!(leading_value("700Hz attack"), Some(700));
        assert_eq!(leading_value("2.5kHz snap"), Some(25));
        assert_eq!(leading_value("attack at 700Hz"), None);
        assert_eq!(leading_value(""), None);
    }
}
