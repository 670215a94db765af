//! Hand-off of camera uniforms to a render thread.
//!
//! The input thread submits complete batches through a lock-free triple
//! buffer; the render thread picks up the newest one before each pass.
//! Batches are never torn or reordered. A batch that is superseded before
//! the render thread looks is skipped, which is harmless because every
//! batch carries all five values.

use super::{UniformBatch, UniformSink, UniformTable};

/// Create a connected publisher/receiver pair.
#[must_use]
pub fn uniform_channel() -> (UniformPublisher, UniformReceiver) {
    let (input, output) = triple_buffer::triple_buffer(&None);
    (UniformPublisher { input }, UniformReceiver { output })
}

/// Submitting half, owned by the camera.
pub struct UniformPublisher {
    input: triple_buffer::Input<Option<UniformBatch>>,
}

impl UniformSink for UniformPublisher {
    fn submit(&mut self, batch: UniformBatch) {
        self.input.write(Some(batch));
    }
}

/// Consuming half, owned by the render thread.
pub struct UniformReceiver {
    output: triple_buffer::Output<Option<UniformBatch>>,
}

impl UniformReceiver {
    /// Non-blocking check for a batch published since the last call.
    pub fn try_recv(&mut self) -> Option<UniformBatch> {
        let _ = self.output.update();
        self.output.output_buffer_mut().take()
    }

    /// Apply the newest pending batch to `table`. Returns whether anything
    /// changed.
    pub fn drain_into(&mut self, table: &mut UniformTable) -> bool {
        match self.try_recv() {
            Some(batch) => {
                table.apply(&batch);
                true
            }
            None => false,
        }
    }
}
