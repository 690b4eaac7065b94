/// Suffixes of the power-of-1000 magnitude tiers.
const TIER_SUFFIXES: [&str; 5] = ["", "k", "m", "b", "t"];

/// Number of significant figures kept by [`format_abbreviated`].
const SIGNIFICANT_FIGURES: u32 = 2;

/// Abbreviates a count with a magnitude suffix: `999`, `1k`, `1.5k`, `12k`, `1m`.
///
/// Counts below one thousand are printed as-is. Larger counts are rounded half up to two
/// significant figures, the tier is picked from the rounded value and at most one fractional
/// digit is kept (none when it is zero). Counts beyond the trillions stay in the `t` tier.
pub fn format_abbreviated(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }

    let rounded = round_to_significant_figures(count as u128, SIGNIFICANT_FIGURES);
    let tier = ((count_digits(rounded) - 1) / 3).min(TIER_SUFFIXES.len() as u32 - 1);
    let unit = 1000u128.pow(tier);
    let whole = rounded / unit;
    let tenths = (rounded % unit) * 10 / unit;
    let suffix = TIER_SUFFIXES[tier as usize];

    match tenths {
        0 => format!("{whole}{suffix}"),
        _ => format!("{whole}.{tenths}{suffix}"),
    }
}

fn round_to_significant_figures(value: u128, figures: u32) -> u128 {
    let digits = count_digits(value);
    if digits <= figures {
        return value;
    }
    let divisor = 10u128.pow(digits - figures);

    (value + divisor / 2) / divisor * divisor
}

fn count_digits(value: u128) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use regex::Regex;

    use super::*;

    #[test]
    fn counts_below_one_thousand_are_untouched() {
        assert_eq!("0", format_abbreviated(0));
        assert_eq!("7", format_abbreviated(7));
        assert_eq!("999", format_abbreviated(999));
    }

    #[test]
    fn thousands_tier() {
        assert_eq!("1k", format_abbreviated(1000));
        assert_eq!("1k", format_abbreviated(1049));
        assert_eq!("1.1k", format_abbreviated(1050));
        assert_eq!("1.5k", format_abbreviated(1500));
        assert_eq!("12k", format_abbreviated(12000));
        assert_eq!("12k", format_abbreviated(12345));
        assert_eq!("120k", format_abbreviated(123456));
    }

    #[test]
    fn rounding_carries_into_the_next_tier() {
        assert_eq!("10k", format_abbreviated(9950));
        assert_eq!("1m", format_abbreviated(999_999));
        assert_eq!("1m", format_abbreviated(999_500));
        assert_eq!("990k", format_abbreviated(994_999));
    }

    #[test]
    fn larger_tiers() {
        assert_eq!("2.5m", format_abbreviated(2_470_000));
        assert_eq!("3b", format_abbreviated(3_000_000_000));
        assert_eq!("4.2t", format_abbreviated(4_200_000_000_000));
    }

    #[test]
    fn tiers_beyond_trillions_clamp_to_trillions() {
        assert_eq!("18000000t", format_abbreviated(u64::MAX));
        assert_eq!("1000t", format_abbreviated(10u64.pow(15)));
    }

    proptest! {
        #[test]
        fn prop_output_shape(count in any::<u64>()) {
            let pattern = Regex::new(r"^[0-9]+(\.[0-9])?[kmbt]?$").unwrap();

            let formatted = format_abbreviated(count);

            prop_assert!(pattern.is_match(&formatted), "unexpected output {formatted}");
        }
    }
}
