use crate::models::WeaponData;
use crate::parsing::regex::*;

/// Parses the in-game "copy item data" text of a weapon into derived DPS
/// statistics.
///
/// Attack speed is the only mandatory field: a missing, unparsable, or
/// non-positive "Attacks per Second" line fails the whole parse, as does a
/// quality value too large for its type. An absent quality line defaults to
/// 0 and every `<Type> Damage: min-max` line contributes to the damage sums;
/// an item without damage lines still parses, with zero DPS.
/// Where the same field appears twice, the first occurrence wins.
pub fn parse_weapon_data(input: &str) -> Option<WeaponData> {
    let speed_caps = RE_ATTACK_SPEED.captures(input)?;
    let attack_speed: f64 = speed_caps["speed"].parse().ok()?;
    if attack_speed <= 0.0 {
        return None;
    }

    // A quality line that is present but does not fit the type fails the
    // parse, same as a bad attack speed; only an absent line defaults to 0.
    let quality = match RE_QUALITY.captures(input) {
        Some(caps) => caps["quality"].parse::<u32>().ok()?,
        None => 0,
    };

    // Sum every damage type on the item. Parenthesized augmented ranges are
    // display-only and must not contribute, so they are stripped before the
    // ranges are read. The sums saturate: pasted text is arbitrary and must
    // never panic the parser.
    let mut total_min: u64 = 0;
    let mut total_max: u64 = 0;
    for caps in RE_DAMAGE_LINE.captures_iter(input) {
        let ranges = RE_PARENTHESIZED.replace_all(&caps["ranges"], "");
        for range in RE_DAMAGE_RANGE.captures_iter(&ranges) {
            if let (Ok(min), Ok(max)) = (range["min"].parse::<u64>(), range["max"].parse::<u64>()) {
                total_min = total_min.saturating_add(min);
                total_max = total_max.saturating_add(max);
            }
        }
    }

    Some(WeaponData::from_parsed(total_min, total_max, attack_speed, quality))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attack_speed_fails() {
        assert!(parse_weapon_data("Physical Damage: 5-10\nQuality: +20%").is_none());
        assert!(parse_weapon_data("").is_none());
    }

    #[test]
    fn test_non_positive_attack_speed_fails() {
        assert!(parse_weapon_data("Attacks per Second: 0").is_none());
        assert!(parse_weapon_data("Attacks per Second: 0.0").is_none());
    }

    #[test]
    fn test_malformed_attack_speed_fails() {
        // "[\d.]+" accepts strings f64 parsing rejects
        assert!(parse_weapon_data("Attacks per Second: 1.2.3").is_none());
    }

    #[test]
    fn test_attack_speed_alone_succeeds_with_zero_dps() {
        let weapon = parse_weapon_data("Attacks per Second: 1.55").unwrap();
        assert_eq!(weapon.attack_speed, 1.55);
        assert_eq!(weapon.quality, 0);
        assert_eq!(weapon.current_dps, 0.0);
        assert_eq!(weapon.max_dps, 0.0);
    }

    #[test]
    fn test_quality_defaults_to_zero() {
        let weapon = parse_weapon_data("Physical Damage: 10-20\nAttacks per Second: 1.5").unwrap();
        assert_eq!(weapon.quality, 0);
        assert_eq!(weapon.base_min_damage, 10.0);
        assert_eq!(weapon.base_max_damage, 20.0);
        assert_eq!(weapon.current_dps, 22.5);
        assert_eq!(weapon.max_dps, 27.0);
    }

    #[test]
    fn test_all_damage_types_are_summed() {
        let input = "Physical Damage: 5-10\nElemental Damage: 3-7\nAttacks per Second: 1.2\nQuality: +15%";
        let weapon = parse_weapon_data(input).unwrap();
        assert_eq!(weapon.quality, 15);
        assert_eq!(weapon.base_min_damage, 6.96);
        assert_eq!(weapon.base_max_damage, 14.78);
        assert_eq!(weapon.current_dps, 15.0);
        assert_eq!(weapon.max_dps, 15.65);
    }

    #[test]
    fn test_multiple_ranges_on_one_line_are_summed() {
        let input = "Elemental Damage: 10-20, 5-9\nAttacks per Second: 1.0";
        let weapon = parse_weapon_data(input).unwrap();
        assert_eq!(weapon.base_min_damage, 15.0);
        assert_eq!(weapon.base_max_damage, 29.0);
        assert_eq!(weapon.current_dps, 22.0);
    }

    #[test]
    fn test_augmented_ranges_are_ignored() {
        let input = "Physical Damage: 12-34 (15-40)\nAttacks per Second: 1.0";
        let weapon = parse_weapon_data(input).unwrap();
        assert_eq!(weapon.base_min_damage, 12.0);
        assert_eq!(weapon.base_max_damage, 34.0);
        assert_eq!(weapon.current_dps, 23.0);
    }

    #[test]
    fn test_huge_damage_ranges_do_not_overflow() {
        let input = "Physical Damage: 4000000000-4000000000\nFire Damage: 4000000000-4000000000\nAttacks per Second: 1.0";
        let weapon = parse_weapon_data(input).unwrap();
        assert_eq!(weapon.base_min_damage, 8_000_000_000.0);
        assert_eq!(weapon.base_max_damage, 8_000_000_000.0);
        assert_eq!(weapon.current_dps, 8_000_000_000.0);
    }

    #[test]
    fn test_oversized_quality_fails() {
        let input = "Physical Damage: 10-20\nAttacks per Second: 1.5\nQuality: +99999999999%";
        assert!(parse_weapon_data(input).is_none());
    }

    #[test]
    fn test_first_match_wins_for_duplicate_fields() {
        let input = "Attacks per Second: 1.5\nAttacks per Second: 9.9\nQuality: +10%\nQuality: +20%\nPhysical Damage: 10-20";
        let weapon = parse_weapon_data(input).unwrap();
        assert_eq!(weapon.attack_speed, 1.5);
        assert_eq!(weapon.quality, 10);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let input = "Physical Damage: 7-13\nAttacks per Second: 1.3\nQuality: +8%";
        assert_eq!(parse_weapon_data(input), parse_weapon_data(input));
    }
}
