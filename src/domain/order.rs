//! Priority ordering for rendering

use super::record::TagRecord;

/// Orders records for output
pub struct PriorityOrderer;

impl PriorityOrderer {
    /// Sort ascending by priority, keeping insertion order among equals
    ///
    /// Works on borrowed records, so the store's own order is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use headtags::domain::{Attributes, PriorityOrderer, TagRecord};
    ///
    /// let late = TagRecord::new("meta".to_string(), Attributes::new(), 9);
    /// let early = TagRecord::new("base".to_string(), Attributes::new(), 1);
    /// let ordered = PriorityOrderer::order([&late, &early]);
    /// assert_eq!(ordered[0].tag_name, "base");
    /// ```
    pub fn order<'a, I>(records: I) -> Vec<&'a TagRecord>
    where
        I: IntoIterator<Item = &'a TagRecord>,
    {
        let mut ordered: Vec<&TagRecord> = records.into_iter().collect();
        // sort_by_key is stable
        ordered.sort_by_key(|record| record.priority);
        ordered
    }
}
