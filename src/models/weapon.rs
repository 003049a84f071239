/// Quality multiplier at the in-game 20% quality cap.
pub const MAX_QUALITY_MULTIPLIER: f64 = 1.20;

/// Derived weapon statistics for a single pasted item.
///
/// Produced once per parse; never mutated afterwards. All floating fields are
/// rounded to 2 decimals at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponData {
    /// Minimum damage with the quality bonus removed
    pub base_min_damage: f64,
    /// Maximum damage with the quality bonus removed
    pub base_max_damage: f64,
    /// Attacks per second, as stated on the item
    pub attack_speed: f64,
    /// Quality percentage bonus (0 if the item has none)
    pub quality: u32,
    /// DPS at the item's current quality
    pub current_dps: f64,
    /// Projected DPS at 20% quality
    pub max_dps: f64,
}

impl WeaponData {
    /// Derives the full record from the summed damage ranges and the parsed
    /// attack speed and quality.
    pub fn from_parsed(total_min: u64, total_max: u64, attack_speed: f64, quality: u32) -> Self {
        // Remove the quality bonus to find the base damage range.
        let quality_multiplier = 1.0 + quality as f64 / 100.0;
        let base_min = total_min as f64 / quality_multiplier;
        let base_max = total_max as f64 / quality_multiplier;

        let current_average = (total_min as f64 + total_max as f64) / 2.0;
        let current_dps = current_average * attack_speed;

        // Project the base range back up to the 20% quality cap. The unrounded
        // base values feed the projection so rounding error never compounds.
        let max_min = base_min * MAX_QUALITY_MULTIPLIER;
        let max_max = base_max * MAX_QUALITY_MULTIPLIER;
        let max_dps = (max_min + max_max) / 2.0 * attack_speed;

        Self {
            base_min_damage: round2(base_min),
            base_max_damage: round2(base_max),
            attack_speed: round2(attack_speed),
            quality,
            current_dps: round2(current_dps),
            max_dps: round2(max_dps),
        }
    }
}

/// Rounds half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.9565), 6.96);
        assert_eq!(round2(14.7826), 14.78);
        assert_eq!(round2(22.5), 22.5);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn test_zero_damage_record() {
        let weapon = WeaponData::from_parsed(0, 0, 1.4, 0);
        assert_eq!(weapon.base_min_damage, 0.0);
        assert_eq!(weapon.base_max_damage, 0.0);
        assert_eq!(weapon.current_dps, 0.0);
        assert_eq!(weapon.max_dps, 0.0);
    }

    #[test]
    fn test_max_dps_projection_exceeds_current_below_cap() {
        let weapon = WeaponData::from_parsed(10, 20, 1.5, 15);
        assert!(weapon.quality < 20);
        assert!(weapon.max_dps > weapon.current_dps);
    }

    #[test]
    fn test_projection_is_identity_at_cap() {
        // At 20% quality the projection reproduces the current DPS.
        let weapon = WeaponData::from_parsed(24, 48, 1.3, 20);
        assert_eq!(weapon.max_dps, weapon.current_dps);
    }
}
