/// Fare for any trip up to `BASE_DISTANCE_KM`
pub const BASE_FARE: u32 = 1_250;

/// Distance covered by the base fare
pub const BASE_DISTANCE_KM: u32 = 10;

/// Upper end of the middle distance tier
pub const MID_TIER_LIMIT_KM: u32 = 50;

/// Middle tier charges `STEP_FARE` per started step of this length
pub const MID_TIER_STEP_KM: u32 = 5;

/// Beyond `MID_TIER_LIMIT_KM`, `STEP_FARE` per started step of this length
pub const FAR_TIER_STEP_KM: u32 = 8;

/// Fare added per distance step
pub const STEP_FARE: u32 = 100;

/// Part of the fare exempt from age discounts
pub const DISCOUNT_FLAT_DEDUCTION: u32 = 350;

/// Infants ride free up to and including this age
pub const INFANT_MAX_AGE: u32 = 5;

pub const CHILD_MIN_AGE: u32 = 6;
pub const CHILD_MAX_AGE: u32 = 12;
pub const CHILD_DISCOUNT_PERCENT: u32 = 50;

pub const TEEN_MIN_AGE: u32 = 13;
pub const TEEN_MAX_AGE: u32 = 18;
pub const TEEN_DISCOUNT_PERCENT: u32 = 20;
