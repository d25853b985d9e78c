//! Feed composition check
//!
//! The export only makes sense for feeds made entirely of annuity generated
//! events. A single record with another event code rejects the whole feed.

use crate::app::models::AnnuityRecord;
use crate::error::{AnnuityError, Result};

/// Number of records whose event code differs from `accepted_event_code`
pub fn count_non_conforming(records: &[AnnuityRecord], accepted_event_code: &str) -> usize {
    records
        .iter()
        .filter(|record| record.event_code != accepted_event_code)
        .count()
}

/// Require every record to carry `accepted_event_code`
pub fn check_feed_composition(records: &[AnnuityRecord], accepted_event_code: &str) -> Result<()> {
    let non_conforming = count_non_conforming(records, accepted_event_code);
    if non_conforming > 0 {
        return Err(AnnuityError::FeedComposition {
            non_conforming,
            total: records.len(),
        });
    }
    Ok(())
}
