//! Ordinal position names used in generated diagnostics.

/// Name a 1-based argument position: `1st`, `2nd`, `3rd`, then `4th` up to
/// `20th`. Positions past 20 are reported as `unknown`.
pub fn ordinal_number(num: usize) -> String {
    match num {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n if n <= 20 => format!("{n}th"),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_are_irregular() {
        assert_eq!(ordinal_number(1), "1st");
        assert_eq!(ordinal_number(2), "2nd");
        assert_eq!(ordinal_number(3), "3rd");
    }

    #[test]
    fn regular_up_to_twenty() {
        for n in 4..=20 {
            assert_eq!(ordinal_number(n), format!("{n}th"));
        }
        assert_eq!(ordinal_number(11), "11th");
        assert_eq!(ordinal_number(12), "12th");
    }

    #[test]
    fn unknown_past_twenty() {
        assert_eq!(ordinal_number(21), "unknown");
        assert_eq!(ordinal_number(22), "unknown");
        assert_eq!(ordinal_number(1000), "unknown");
    }
}
