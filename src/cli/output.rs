//! Output formatting utilities

use crate::application::BulkOutcome;
use crate::domain::{IdentityKey, TagRecord};

/// Format stored tags as `priority  key` lines
pub fn format_tag_list(entries: &[(&IdentityKey, &TagRecord)]) -> String {
    if entries.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (key, record) in entries {
        output.push_str(&format!("{:>3}  {}\n", record.priority, key));
    }
    output
}

/// Describe the entries a bulk insertion skipped, one per line
pub fn format_rejections(outcome: &BulkOutcome) -> String {
    let mut output = String::new();
    for rejection in &outcome.rejected {
        output.push_str(&format!(
            "Skipped tag #{} ('{}'): {}\n",
            rejection.index + 1,
            rejection.tag,
            rejection.error
        ));
    }
    output
}
