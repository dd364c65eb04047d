use crate::foundation::error::SimplifyResult;
use crate::normalize::ir::{GlobalVars, StyleCategory, StyleId, StyleValue};
use smallvec::SmallVec;
use std::collections::HashMap;
use xxhash_rust::xxh3::xxh3_64_with_seed;

const XXH3_SEED: u64 = 0x5f1d_3a7c_92e4_b06d;

/// Per-call deduplicating style table.
///
/// Values are compared by their canonical serialized form, so two structurally equal values
/// resolve to the same [`StyleId`] regardless of where they came from. Lookups go through a
/// hash index; a hash hit is confirmed by full comparison before reuse.
///
/// One store belongs to exactly one simplification call. Ids are only unique within a store.
#[derive(Debug, Default)]
pub struct StyleStore {
    vars: GlobalVars,
    canonical: Vec<String>,
    index: HashMap<(StyleCategory, u64), SmallVec<[usize; 1]>>,
    counters: [u32; StyleCategory::COUNT],
}

impl StyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of an equal stored value, or store `value` under a fresh id.
    pub fn resolve(&mut self, value: StyleValue) -> SimplifyResult<StyleId> {
        let category = value.category();
        let canonical = serde_json::to_string(&value)?;
        let key = (category, xxh3_64_with_seed(canonical.as_bytes(), XXH3_SEED));

        if let Some(bucket) = self.index.get(&key)
            && let Some(&i) = bucket.iter().find(|&&i| self.canonical[i] == canonical)
        {
            return Ok(self.vars.styles[i].0.clone());
        }

        let counter = &mut self.counters[category.index()];
        *counter += 1;
        let id = StyleId(format!("{}_{}", category.prefix(), counter));
        tracing::trace!(%id, "allocated style id");

        let slot = self.vars.styles.len();
        self.vars.styles.push((id.clone(), value));
        self.canonical.push(canonical);
        self.index.entry(key).or_default().push(slot);
        Ok(id)
    }

    pub fn vars(&self) -> &GlobalVars {
        &self.vars
    }

    pub fn into_vars(self) -> GlobalVars {
        self.vars
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/store.rs"]
mod tests;
