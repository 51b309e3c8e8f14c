use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_DISTANCE_KM, BASE_FARE, CHILD_DISCOUNT_PERCENT, CHILD_MAX_AGE, CHILD_MIN_AGE, DISCOUNT_FLAT_DEDUCTION,
    FAR_TIER_STEP_KM, INFANT_MAX_AGE, MID_TIER_LIMIT_KM, MID_TIER_STEP_KM, STEP_FARE, TEEN_DISCOUNT_PERCENT,
    TEEN_MAX_AGE, TEEN_MIN_AGE,
};
use crate::error::{Result, SubwayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    Free,
    /// `percent` off whatever exceeds `flat_deduction`
    Percent { percent: u32, flat_deduction: u32 },
}

/// Discount applied to riders whose age falls in `min_age..=max_age`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub min_age: u32,
    /// Inclusive; `None` leaves the bracket open-ended
    #[serde(default)]
    pub max_age: Option<u32>,
    pub discount: Discount,
}

impl AgeBracket {
    #[must_use]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && self.max_age.is_none_or(|max| age <= max)
    }

    fn overlaps(&self, other: &AgeBracket) -> bool {
        let self_max = self.max_age.unwrap_or(u32::MAX);
        let other_max = other.max_age.unwrap_or(u32::MAX);
        self.min_age <= other_max && other.min_age <= self_max
    }

    fn apply(&self, fare: u32) -> u32 {
        match self.discount {
            Discount::Free => 0,
            Discount::Percent { percent, flat_deduction } => {
                let discountable = fare.saturating_sub(flat_deduction);
                let discount = u64::from(discountable) * u64::from(percent) / 100;
                fare.saturating_sub(u32::try_from(discount).unwrap_or(discountable))
            }
        }
    }
}

/// Distance tiers, step fares and age discounts.
///
/// Deserializes from JSON with every field optional; anything left out falls
/// back to the standard table in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarePolicy {
    pub base_fare: u32,
    pub base_distance: u32,
    pub mid_tier_limit: u32,
    pub mid_tier_step: u32,
    pub far_tier_step: u32,
    pub step_fare: u32,
    /// Riders outside every bracket pay full fare
    pub age_brackets: Vec<AgeBracket>,
}

impl Default for FarePolicy {
    fn default() -> Self {
        let percent_off = |percent| Discount::Percent {
            percent,
            flat_deduction: DISCOUNT_FLAT_DEDUCTION,
        };
        Self {
            base_fare: BASE_FARE,
            base_distance: BASE_DISTANCE_KM,
            mid_tier_limit: MID_TIER_LIMIT_KM,
            mid_tier_step: MID_TIER_STEP_KM,
            far_tier_step: FAR_TIER_STEP_KM,
            step_fare: STEP_FARE,
            age_brackets: vec![
                AgeBracket {
                    min_age: 0,
                    max_age: Some(INFANT_MAX_AGE),
                    discount: Discount::Free,
                },
                AgeBracket {
                    min_age: CHILD_MIN_AGE,
                    max_age: Some(CHILD_MAX_AGE),
                    discount: percent_off(CHILD_DISCOUNT_PERCENT),
                },
                AgeBracket {
                    min_age: TEEN_MIN_AGE,
                    max_age: Some(TEEN_MAX_AGE),
                    discount: percent_off(TEEN_DISCOUNT_PERCENT),
                },
            ],
        }
    }
}

impl FarePolicy {
    /// Load a policy from JSON and check it
    ///
    /// # Errors
    ///
    /// Returns `FarePolicyParse` for malformed JSON and `InvalidFarePolicy`
    /// if the values don't make a usable table.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: FarePolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// # Errors
    ///
    /// Returns `InvalidFarePolicy` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.mid_tier_step == 0 || self.far_tier_step == 0 {
            return Err(SubwayError::InvalidFarePolicy("distance steps must be positive"));
        }
        if self.base_distance == 0 || self.base_distance > self.mid_tier_limit {
            return Err(SubwayError::InvalidFarePolicy(
                "base distance must be positive and within the middle tier limit",
            ));
        }
        for (i, bracket) in self.age_brackets.iter().enumerate() {
            if bracket.max_age.is_some_and(|max| max < bracket.min_age) {
                return Err(SubwayError::InvalidFarePolicy("age bracket ends before it starts"));
            }
            if let Discount::Percent { percent, .. } = bracket.discount {
                if percent > 100 {
                    return Err(SubwayError::InvalidFarePolicy("discount exceeds 100 percent"));
                }
            }
            if self.age_brackets[..i].iter().any(|earlier| earlier.overlaps(bracket)) {
                return Err(SubwayError::InvalidFarePolicy("age brackets overlap"));
            }
        }
        Ok(())
    }

    /// Fare owed for `distance` before surcharge and discounts
    #[must_use]
    pub fn distance_fare(&self, distance: u32) -> u32 {
        if distance <= self.base_distance {
            return self.base_fare;
        }
        // `validate` rejects zero steps; the floor keeps unchecked tables from dividing by zero
        let mid_step = self.mid_tier_step.max(1);
        let far_step = self.far_tier_step.max(1);
        let mid = distance.min(self.mid_tier_limit).saturating_sub(self.base_distance);
        let mut fare = self.base_fare.saturating_add(mid.div_ceil(mid_step).saturating_mul(self.step_fare));
        if distance > self.mid_tier_limit {
            let far = distance - self.mid_tier_limit;
            fare = fare.saturating_add(far.div_ceil(far_step).saturating_mul(self.step_fare));
        }
        fare
    }

    #[must_use]
    pub fn bracket_for(&self, age: u32) -> Option<&AgeBracket> {
        self.age_brackets.iter().find(|bracket| bracket.contains(age))
    }

    /// Final fare: distance fare, plus the highest surcharge among the lines
    /// ridden, minus the rider's age discount
    #[must_use]
    pub fn calculate_fare(&self, distance: u32, max_line_surcharge: u32, age: u32) -> u32 {
        let fare = self.distance_fare(distance).saturating_add(max_line_surcharge);
        match self.bracket_for(age) {
            Some(bracket) => bracket.apply(fare),
            None => fare,
        }
    }
}

/// [`FarePolicy::calculate_fare`] with the standard fare table
#[must_use]
pub fn calculate_fare(distance: u32, max_line_surcharge: u32, age: u32) -> u32 {
    FarePolicy::default().calculate_fare(distance, max_line_surcharge, age)
}
