// src/engine/status.rs
use crate::config::consts::{WEAR_THRESHOLD_CRITICAL, WEAR_THRESHOLD_WARNING};
use super::types::WearStatus;

/// Severity of a wear reading. Both thresholds are inclusive lower bounds;
/// readings outside 0..=100 are classified as-is.
pub fn classify(wear: f64) -> WearStatus {
    if wear >= WEAR_THRESHOLD_CRITICAL {
        WearStatus::Critical
    } else if wear >= WEAR_THRESHOLD_WARNING {
        WearStatus::Warning
    } else {
        WearStatus::Normal
    }
}
