//! Local list mutations and edit drafts for BRT rows.
//!
//! DESIGN
//! ======
//! The server's returned record is the sole source of truth: a successful
//! update swaps in the server copy, a successful delete removes exactly the
//! matching id. Drafts live beside the list so cancelling an edit never
//! touches the original row.

#[cfg(test)]
#[path = "brts_test.rs"]
mod brts_test;

use crate::net::types::{Brt, BrtStatus};

/// Allowed reserved-amount bounds, enforced client-side before submission
/// and re-validated by the server.
pub const MIN_RESERVED_AMOUNT: f64 = 1.0;
pub const MAX_RESERVED_AMOUNT: f64 = 1_000_000.0;

/// Per-row edit buffer for inline editing.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub reserved_amount: String,
    pub status: BrtStatus,
}

impl EditDraft {
    /// Seed a draft from the row being edited.
    pub fn from_brt(brt: &Brt) -> Self {
        Self {
            reserved_amount: brt.reserved_amount.clone(),
            status: brt.status,
        }
    }
}

/// Swap in the server's copy of an updated record. Rows with other ids are
/// left untouched; an unknown id is a no-op.
pub fn replace_brt(brts: &mut Vec<Brt>, updated: Brt) {
    if let Some(row) = brts.iter_mut().find(|b| b.id == updated.id) {
        *row = updated;
    }
}

/// Remove exactly the row with `id`.
pub fn remove_brt(brts: &mut Vec<Brt>, id: i64) {
    brts.retain(|b| b.id != id);
}

/// Check a submitted amount against the allowed bounds.
///
/// # Errors
///
/// A displayable message when the input is not a number or out of range.
pub fn validate_reserved_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter a reserved amount.".to_owned());
    }
    let Ok(amount) = trimmed.parse::<f64>() else {
        return Err("Reserved amount must be a number.".to_owned());
    };
    if !amount.is_finite() || amount < MIN_RESERVED_AMOUNT || amount > MAX_RESERVED_AMOUNT {
        return Err("Reserved amount must be between 1 and 1,000,000 BLU.".to_owned());
    }
    Ok(amount)
}
