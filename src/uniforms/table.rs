use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use super::{CommonUniform, UniformBatch, UniformSink, UniformValue};

/// Name-keyed store of the most recently published camera uniforms.
///
/// Resolving names to shader bindings is left to whoever reads the table.
#[derive(Debug, Clone, Default)]
pub struct UniformTable {
    values: FxHashMap<&'static str, UniformValue>,
    last_seq: Option<u64>,
    batches_applied: u64,
}

impl UniformTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every slot with the values from `batch`.
    pub fn apply(&mut self, batch: &UniformBatch) {
        for (slot, value) in batch.iter() {
            let _ = self.values.insert(slot.name(), value);
        }
        self.last_seq = Some(batch.transform_seq);
        self.batches_applied += 1;
    }

    /// Look up a uniform by shader-side name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    /// Matrix stored for `slot`, if any.
    #[must_use]
    pub fn mat4(&self, slot: CommonUniform) -> Option<Mat4> {
        self.get(slot.name()).as_ref().and_then(UniformValue::as_mat4)
    }

    /// Vector stored for `slot`, if any.
    #[must_use]
    pub fn vec3(&self, slot: CommonUniform) -> Option<Vec3> {
        self.get(slot.name()).as_ref().and_then(UniformValue::as_vec3)
    }

    /// Transform sequence of the last applied batch.
    #[must_use]
    pub fn last_seq(&self) -> Option<u64> {
        self.last_seq
    }

    /// Number of batches applied so far.
    #[must_use]
    pub fn batches_applied(&self) -> u64 {
        self.batches_applied
    }

    /// Number of distinct uniforms held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been published yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl UniformSink for UniformTable {
    fn submit(&mut self, batch: UniformBatch) {
        self.apply(&batch);
    }
}
