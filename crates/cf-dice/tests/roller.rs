//! Property tests for dice rollers.

use cf_dice::{DiceRoller, DiceSpec, Die, RngRoller, RollerConfig, ScriptedRoller};
use proptest::prelude::*;

proptest! {
    #[test]
    fn totals_stay_within_dice_bounds(seed in any::<u64>(), count in 1u32..6, sides in 1u32..30) {
        let mut roller = RngRoller::from_config(&RollerConfig::default().with_seed(seed));
        let spec = DiceSpec::new(count, Die::from_sides(sides)).unwrap();
        for _ in 0..10 {
            let total = roller.roll_spec(spec);
            prop_assert!(total >= spec.min_roll() && total <= spec.max_roll());
        }
    }

    #[test]
    fn scripted_roller_ignores_requested_dice(outcome in any::<u32>(), count in 1u32..6, sides in 1u32..30) {
        let mut roller = ScriptedRoller::fixed(outcome);
        prop_assert_eq!(roller.roll(count, sides), outcome);
    }
}

#[test]
fn single_sided_dice_always_total_count() {
    let mut roller = RngRoller::seeded(0);
    assert_eq!(roller.roll(4, 1), 4);
}
