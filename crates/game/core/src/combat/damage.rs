//! Wound and knockout arithmetic.

/// Wounds taken from an unblocked enemy: `ceil(attack / armor)`.
///
/// Armor is a positive player invariant; a zero armor is treated as one so the
/// calculation stays total.
pub fn wounds_from_attack(attack: u32, armor: u32) -> u32 {
    attack.div_ceil(armor.max(1))
}

/// A hero is knocked out once the wounds taken during the current combat reach
/// their hand limit.
pub fn is_knocked_out(wounds_this_combat: u32, hand_limit: u32) -> bool {
    wounds_this_combat >= hand_limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wounds_round_up() {
        assert_eq!(wounds_from_attack(6, 2), 3);
        assert_eq!(wounds_from_attack(5, 2), 3);
        assert_eq!(wounds_from_attack(4, 2), 2);
        assert_eq!(wounds_from_attack(1, 3), 1);
        assert_eq!(wounds_from_attack(0, 2), 0);
    }

    #[test]
    fn knockout_fires_at_threshold() {
        assert!(!is_knocked_out(2, 3));
        assert!(is_knocked_out(3, 3));
        assert!(is_knocked_out(4, 3));
    }
}
