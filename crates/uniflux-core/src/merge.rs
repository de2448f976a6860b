// ── Field-set composition ──

use std::collections::BTreeMap;

/// Merge an ordered list of maps into a new map.
///
/// Later maps win on key collisions, so put the overriding data last. The
/// inputs are left untouched.
pub fn combine<V: Clone>(maps: &[&BTreeMap<String, V>]) -> BTreeMap<String, V> {
    let mut out = BTreeMap::new();
    for map in maps {
        out.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    out
}
