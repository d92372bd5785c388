//! Growth-bucket classification.
//!
//! The classifier is an ordered rule list evaluated top to bottom; the
//! first matching rule wins. An undefined change is always `New`, and
//! anything that matches no rule is `Decline`.

use super::schema::GrowthBucket;

/// One rule of the classification chain
struct GrowthRule {
    bucket: GrowthBucket,
    matches: fn(f64) -> bool,
}

fn above_high_growth(pct: f64) -> bool {
    pct > 50.0
}

fn above_moderate_growth(pct: f64) -> bool {
    pct > 10.0
}

// -10 exactly is still flat
fn within_flat_band(pct: f64) -> bool {
    pct >= -10.0
}

const RULES: [GrowthRule; 3] = [
    GrowthRule {
        bucket: GrowthBucket::HighGrowth,
        matches: above_high_growth,
    },
    GrowthRule {
        bucket: GrowthBucket::ModerateGrowth,
        matches: above_moderate_growth,
    },
    GrowthRule {
        bucket: GrowthBucket::Flat,
        matches: within_flat_band,
    },
];

/// Classify a percentage change into its growth bucket
pub fn classify(pct_change: Option<f64>) -> GrowthBucket {
    match pct_change {
        None => GrowthBucket::New,
        Some(pct) => RULES
            .iter()
            .find(|rule| (rule.matches)(pct))
            .map(|rule| rule.bucket)
            .unwrap_or(GrowthBucket::Decline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_is_new() {
        assert_eq!(classify(None), GrowthBucket::New);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(Some(50.000001)), GrowthBucket::HighGrowth);
        assert_eq!(classify(Some(50.0)), GrowthBucket::ModerateGrowth);
        assert_eq!(classify(Some(10.000001)), GrowthBucket::ModerateGrowth);
        assert_eq!(classify(Some(10.0)), GrowthBucket::Flat);
        assert_eq!(classify(Some(0.0)), GrowthBucket::Flat);
        assert_eq!(classify(Some(-10.0)), GrowthBucket::Flat);
        assert_eq!(classify(Some(-10.000001)), GrowthBucket::Decline);
        assert_eq!(classify(Some(-100.0)), GrowthBucket::Decline);
    }

    #[test]
    fn test_large_growth() {
        assert_eq!(classify(Some(900.0)), GrowthBucket::HighGrowth);
    }
}
