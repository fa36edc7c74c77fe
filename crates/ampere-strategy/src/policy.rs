//! The harvest-vs-spawn economic policy.
//!
//! When a robot is parked on a station it must choose between harvesting
//! another turn and paying for a child robot. The policy couples that
//! choice to how far away the next expansion opportunity is: the farther
//! the best remaining station, the more energy a parent must bank before
//! spawning, and the larger the endowment the child receives for the
//! trip.

use crate::error::StrategyError;

/// Tuning for the spawn threshold and endowment formulas.
///
/// A single knob, the expansion factor `k` (default 5), paces
/// both formulas. With `c` the squared distance from the next expansion
/// station to a free cell near the parent:
///
/// - spawn threshold: `(c / k) * k² + (k² - k) + 40`
/// - child endowment: `(c / k) * k  + (k² - k) + 40`
///
/// Integer division throughout; construction rejects `k = 0` so the
/// division is always defined. Deliberately not deserializable: the only
/// way to obtain a policy is through the validating constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnPolicy {
    expansion_factor: u32,
}

impl SpawnPolicy {
    /// Default expansion factor.
    pub const DEFAULT_EXPANSION_FACTOR: u32 = 5;

    /// Flat energy grant included in every threshold and endowment.
    pub const BASE_GRANT: u64 = 40;

    /// Create a policy with the given expansion factor.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::ZeroExpansionFactor`] if
    /// `expansion_factor` is zero.
    pub const fn new(expansion_factor: u32) -> Result<Self, StrategyError> {
        if expansion_factor == 0 {
            return Err(StrategyError::ZeroExpansionFactor);
        }
        Ok(Self { expansion_factor })
    }

    /// The configured expansion factor.
    pub const fn expansion_factor(&self) -> u32 {
        self.expansion_factor
    }

    /// Minimum energy a parked robot must hold before spawning.
    pub fn spawn_threshold(&self, expansion_cost: u64) -> u64 {
        let k = u64::from(self.expansion_factor);
        self.paced(expansion_cost)
            .saturating_mul(k)
            .saturating_mul(k)
            .saturating_add(self.fixed_premium())
    }

    /// Energy endowed to a freshly spawned child robot.
    ///
    /// Always at most [`spawn_threshold`] for the same cost, so a parent
    /// that clears the threshold can afford the endowment.
    ///
    /// [`spawn_threshold`]: Self::spawn_threshold
    pub fn spawn_endowment(&self, expansion_cost: u64) -> u32 {
        let k = u64::from(self.expansion_factor);
        let endowment = self
            .paced(expansion_cost)
            .saturating_mul(k)
            .saturating_add(self.fixed_premium());
        u32::try_from(endowment).unwrap_or(u32::MAX)
    }

    /// Expansion cost stepped down to whole multiples of the factor.
    fn paced(&self, expansion_cost: u64) -> u64 {
        // expansion_factor >= 1 by construction, the fallback is inert.
        expansion_cost
            .checked_div(u64::from(self.expansion_factor))
            .unwrap_or(0)
    }

    /// The `(k² - k) + 40` term shared by both formulas.
    fn fixed_premium(&self) -> u64 {
        let k = u64::from(self.expansion_factor);
        k.saturating_mul(k)
            .saturating_sub(k)
            .saturating_add(Self::BASE_GRANT)
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            expansion_factor: Self::DEFAULT_EXPANSION_FACTOR,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_factor_rejected() {
        assert_eq!(SpawnPolicy::new(0), Err(StrategyError::ZeroExpansionFactor));
    }

    #[test]
    fn default_factor_formulas() {
        let policy = SpawnPolicy::default();
        // c = 41, k = 5: paced = 8.
        assert_eq!(policy.spawn_threshold(41), 8 * 25 + 20 + 40);
        assert_eq!(policy.spawn_endowment(41), 8 * 5 + 20 + 40);
    }

    #[test]
    fn zero_cost_still_carries_the_fixed_premium() {
        let policy = SpawnPolicy::default();
        assert_eq!(policy.spawn_threshold(0), 60);
        assert_eq!(policy.spawn_endowment(0), 60);
    }

    #[test]
    fn endowment_never_exceeds_threshold() {
        let policy = SpawnPolicy::default();
        for cost in [0, 1, 5, 24, 25, 41, 100, 999, 10_000] {
            assert!(u64::from(policy.spawn_endowment(cost)) <= policy.spawn_threshold(cost));
        }
    }

    #[test]
    fn alternate_factor() {
        let policy = SpawnPolicy::new(2).unwrap();
        // c = 9, k = 2: paced = 4.
        assert_eq!(policy.spawn_threshold(9), 4 * 4 + 2 + 40);
        assert_eq!(policy.spawn_endowment(9), 4 * 2 + 2 + 40);
    }
}
