use super::*;
use crate::state::brts::{MAX_RESERVED_AMOUNT, MIN_RESERVED_AMOUNT};

#[test]
fn preset_denominations() {
    assert_eq!(
        PRESETS,
        [("BRT ONE", 20), ("BRT ALPINE", 50), ("BRT TWO", 100)]
    );
}

#[test]
fn confirmation_mentions_the_assigned_code() {
    assert_eq!(
        success_message("BRT-7"),
        "BRT created successfully! Code: BRT-7"
    );
}

#[test]
fn confirmation_lingers_before_the_tab_switch() {
    assert!(SUCCESS_DELAY_SECS >= 1);
}

#[test]
fn every_preset_passes_amount_validation() {
    for (_, amount) in PRESETS {
        let value = validate_reserved_amount(&amount.to_string()).unwrap();
        assert!(value >= MIN_RESERVED_AMOUNT && value <= MAX_RESERVED_AMOUNT);
    }
}
