use ordered_float::OrderedFloat;

use crate::profile::Profile;

/// Normalized influence of one design factor on life-cycle carbon, as plotted
/// on the "tornado" panel. The coefficients are assessment data shipped with
/// the dashboard, not re-derived per evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor {
    pub name: &'static str,
    pub influence: f64,
}

const FACTORS: [Factor; 5] = [
    Factor { name: "Insulation thickness", influence: 0.35 },
    Factor { name: "PV coverage", influence: 0.45 },
    Factor { name: "Shape coefficient", influence: 0.25 },
    Factor { name: "Window-to-wall ratio", influence: 0.15 },
    Factor { name: "Orientation", influence: 0.05 },
];

/// Carbon-sensitivity ranking, most influential first. Releases that do not
/// model orientation do not rank it.
pub fn ranked(profile: Profile) -> Vec<Factor> {
    let mut factors: Vec<Factor> = FACTORS
        .into_iter()
        .filter(|factor| {
            factor.name != "Orientation" || profile.constants().orientation_eui_slope.is_some()
        })
        .collect();
    factors.sort_by_key(|factor| std::cmp::Reverse(OrderedFloat(factor.influence)));
    factors
}

pub fn dominant(profile: Profile) -> Factor {
    ranked(profile)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_factor() {
        assert_eq!(dominant(Profile::Pioneer).name, "PV coverage");
    }

    #[test]
    fn test_ranking_is_descending() {
        let factors = ranked(Profile::Pioneer);
        assert_eq!(factors.len(), 5);
        assert!(factors.windows(2).all(|pair| pair[0].influence >= pair[1].influence));
    }

    #[test]
    fn test_orientation_dropped_without_the_term() {
        assert!(ranked(Profile::Economic).iter().all(|factor| factor.name != "Orientation"));
    }
}
