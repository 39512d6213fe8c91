use crate::schema::ChatlineConfig;

use super::helpers::check_range;

pub(crate) fn validate_pacing(errors: &mut Vec<String>, config: &ChatlineConfig) {
    let pacing = &config.pacing;
    check_range(errors, "pacing.max_delay_ms", pacing.max_delay_ms, 0..=60_000);
    if pacing.min_delay_ms >= pacing.max_delay_ms {
        errors.push(format!(
            "pacing.min_delay_ms = {} must be below pacing.max_delay_ms = {}",
            pacing.min_delay_ms, pacing.max_delay_ms
        ));
    }
}
