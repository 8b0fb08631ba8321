use std::sync::Arc;

use galat_core::types::Entry;

/// Narrows the working set to one category.
///
/// `None` or an empty tag is the identity. Otherwise keeps entries whose tag
/// equals `tag` exactly, case included, in their original order.
pub fn filter_by_tag(tag: Option<&str>, entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    match tag.filter(|t| !t.is_empty()) {
        None => entries.to_vec(),
        Some(tag) => entries.iter().filter(|e| e.tag == tag).cloned().collect(),
    }
}
