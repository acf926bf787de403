//! Collision-free field allocation

use crate::record::Record;

/// Return `base` if the record does not use it yet, otherwise the first
/// free numbered variant (`base0`, `base1`, ...).
///
/// ```
/// use strata_log::{Level, Record, format::free_key};
///
/// let mut record = Record::new(Level::Info, "hi");
/// assert_eq!(free_key(&record, "foo"), "foo");
/// record.insert("foo", 1.into());
/// assert_eq!(free_key(&record, "foo"), "foo0");
/// ```
pub fn free_key(record: &Record, base: &str) -> String {
    if !record.contains_key(base) {
        return base.to_string();
    }
    let mut idx = 0_usize;
    loop {
        let candidate = format!("{base}{idx}");
        if !record.contains_key(&candidate) {
            return candidate;
        }
        idx += 1;
    }
}
