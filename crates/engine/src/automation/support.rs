//! Dice-pool success forecasts.
//!
//! A test rolls `pool` six-sided dice; each die showing at least the DN is a
//! success, and the test passes with `complexity` successes. Bonus successes
//! (paperwork, assistance) count toward complexity before any die is rolled.

use serde::{Deserialize, Serialize};

use laundry_domain::common::int_or_zero;

/// DN used when a test does not name one.
pub const DEFAULT_DN: i64 = 4;

const MIN_DN: i64 = 2;
const MAX_DN: i64 = 6;

/// Largest pool a forecast considers; bigger pools are clamped to it.
pub const MAX_POOL: i64 = 10_000;

/// Returns `value` when it is positive, otherwise the non-negative fallback.
pub fn sanitize_positive_int(value: i64, fallback: i64) -> i64 {
    if value > 0 {
        value
    } else {
        fallback.max(0)
    }
}

/// Chance that one d6 meets the DN; DN is clamped to 2..=6.
///
/// ```
/// use laundry_engine::automation::per_die_success_chance;
///
/// assert_eq!(per_die_success_chance(4), 0.5);
/// assert_eq!(per_die_success_chance(1), per_die_success_chance(2));
/// ```
pub fn per_die_success_chance(dn: i64) -> f64 {
    let dn = dn.clamp(MIN_DN, MAX_DN);
    ((7 - dn) as f64 / 6.0).clamp(0.0, 1.0)
}

/// Parameters of a supported test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportTest {
    #[serde(deserialize_with = "int_or_zero")]
    pub pool: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub dn: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub complexity: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub bonus_successes: i64,
}

impl Default for SupportTest {
    fn default() -> Self {
        Self {
            pool: 1,
            dn: DEFAULT_DN,
            complexity: 1,
            bonus_successes: 0,
        }
    }
}

impl SupportTest {
    pub fn new(pool: i64, dn: i64, complexity: i64) -> Self {
        Self {
            pool,
            dn,
            complexity,
            bonus_successes: 0,
        }
    }

    pub fn with_bonus(mut self, bonus_successes: i64) -> Self {
        self.bonus_successes = bonus_successes;
        self
    }

    /// Pool in `1..=MAX_POOL`, complexity of at least one, DN in range,
    /// bonus non-negative.
    fn sanitized(&self) -> Self {
        Self {
            pool: self.pool.clamp(1, MAX_POOL),
            dn: self.dn.clamp(MIN_DN, MAX_DN),
            complexity: self.complexity.max(1),
            bonus_successes: self.bonus_successes.max(0),
        }
    }

    fn required_successes(&self) -> i64 {
        self.complexity.saturating_sub(self.bonus_successes).max(0)
    }
}

/// Probability that the test succeeds.
pub fn support_success_chance(test: &SupportTest) -> f64 {
    let test = test.sanitized();
    binomial_tail(
        test.pool,
        test.required_successes(),
        per_die_success_chance(test.dn),
    )
}

/// P(X >= required) for X ~ Binomial(pool, p).
fn binomial_tail(pool: i64, required: i64, p: f64) -> f64 {
    if required <= 0 {
        return 1.0;
    }
    if required > pool {
        return 0.0;
    }
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    // pmf terms are built in log space; q^n underflows for large pools
    let ln_p = p.ln();
    let ln_q = (1.0 - p).ln();
    let n = pool as f64;
    let mut ln_choose = 0.0;
    let mut below = 0.0;
    let mut above = 0.0;
    for k in 0..=pool {
        let kf = k as f64;
        if k > 0 {
            ln_choose += ((n - kf + 1.0) / kf).ln();
        }
        let term = (ln_choose + kf * ln_p + (n - kf) * ln_q).exp();
        if k < required {
            below += term;
        } else {
            above += term;
        }
    }

    // Sum the smaller side directly and take the complement of the other.
    let tail = if required <= pool / 2 {
        1.0 - below
    } else {
        above
    };
    tail.clamp(0.0, 1.0)
}

/// Everything a sheet shows before the player commits to a supported test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportForecast {
    pub pool: i64,
    pub dn: i64,
    pub complexity: i64,
    pub bonus_successes: i64,
    pub required_successes: i64,
    pub required_without_bonus: i64,
    pub per_die_success_chance: f64,
    pub expected_successes: f64,
    pub chance: f64,
}

pub fn build_support_forecast(test: &SupportTest) -> SupportForecast {
    let safe = test.sanitized();
    let per_die = per_die_success_chance(safe.dn);
    SupportForecast {
        pool: safe.pool,
        dn: safe.dn,
        complexity: safe.complexity,
        bonus_successes: safe.bonus_successes,
        required_successes: safe.required_successes(),
        required_without_bonus: safe.complexity,
        per_die_success_chance: per_die,
        expected_successes: safe.pool as f64 * per_die + safe.bonus_successes as f64,
        chance: support_success_chance(&safe),
    }
}
