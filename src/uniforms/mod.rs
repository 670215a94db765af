//! Named camera uniforms and the sink that consumes them.
//!
//! The camera publishes five values after every change. They always travel
//! together as one [`UniformBatch`], so a consumer can never pair a fresh
//! view matrix with a stale projection.

/// Cross-thread publisher/receiver pair.
pub mod shared;
/// Same-thread name-keyed uniform store.
pub mod table;

use glam::{Mat4, Vec3};

pub use shared::{uniform_channel, UniformPublisher, UniformReceiver};
pub use table::UniformTable;

/// Shader-side type of a uniform slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformType {
    /// `mat4` of 32-bit floats.
    FloatMat4,
    /// `vec3` of 32-bit floats.
    FloatVec3,
}

/// The fixed set of camera uniforms every shader may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonUniform {
    /// World → camera → projection (`projection * inverse_view`).
    ProjectionInverseView,
    /// Projection matrix.
    Projection,
    /// Camera → world (the view transform itself).
    View,
    /// World-space direction the camera looks along.
    CameraViewDir,
    /// World-space camera up vector.
    CameraUp,
}

impl CommonUniform {
    /// Every slot, in publish order.
    pub const ALL: [Self; 5] = [
        Self::ProjectionInverseView,
        Self::Projection,
        Self::View,
        Self::CameraViewDir,
        Self::CameraUp,
    ];

    /// Shader-side uniform name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProjectionInverseView => "uProjIV",
            Self::Projection => "uProj",
            Self::View => "uView",
            Self::CameraViewDir => "uCamViewVec",
            Self::CameraUp => "uCamUp",
        }
    }

    /// Shader-side uniform type.
    #[must_use]
    pub const fn uniform_type(self) -> UniformType {
        match self {
            Self::ProjectionInverseView | Self::Projection | Self::View => {
                UniformType::FloatMat4
            }
            Self::CameraViewDir | Self::CameraUp => UniformType::FloatVec3,
        }
    }

    /// Reverse lookup by shader-side name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// A uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// 4x4 matrix.
    Mat4(Mat4),
    /// 3-vector.
    Vec3(Vec3),
}

impl UniformValue {
    /// Type tag of this value.
    #[must_use]
    pub const fn uniform_type(&self) -> UniformType {
        match self {
            Self::Mat4(_) => UniformType::FloatMat4,
            Self::Vec3(_) => UniformType::FloatVec3,
        }
    }

    /// The matrix, if this is a `Mat4`.
    #[must_use]
    pub const fn as_mat4(&self) -> Option<Mat4> {
        match self {
            Self::Mat4(m) => Some(*m),
            Self::Vec3(_) => None,
        }
    }

    /// The vector, if this is a `Vec3`.
    #[must_use]
    pub const fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(v) => Some(*v),
            Self::Mat4(_) => None,
        }
    }
}

/// One complete, consistent set of camera uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBatch {
    /// Camera transform sequence at the time of publication.
    pub transform_seq: u64,
    /// `projection * inverse_view`.
    pub projection_inverse_view: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
    /// View (camera → world) matrix.
    pub view: Mat4,
    /// World-space view direction.
    pub view_dir: Vec3,
    /// World-space up vector.
    pub up: Vec3,
}

impl UniformBatch {
    /// Value stored for `slot`.
    #[must_use]
    pub const fn get(&self, slot: CommonUniform) -> UniformValue {
        match slot {
            CommonUniform::ProjectionInverseView => {
                UniformValue::Mat4(self.projection_inverse_view)
            }
            CommonUniform::Projection => UniformValue::Mat4(self.projection),
            CommonUniform::View => UniformValue::Mat4(self.view),
            CommonUniform::CameraViewDir => UniformValue::Vec3(self.view_dir),
            CommonUniform::CameraUp => UniformValue::Vec3(self.up),
        }
    }

    /// `(slot, value)` pairs in publish order.
    pub fn iter(&self) -> impl Iterator<Item = (CommonUniform, UniformValue)> + '_ {
        CommonUniform::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}

/// Consumer of published camera uniforms.
///
/// Submission is fire-and-forget: implementations must not block the
/// caller, and must apply batches in the order they were submitted.
pub trait UniformSink {
    /// Accept a complete batch of camera uniforms.
    fn submit(&mut self, batch: UniformBatch);
}

/// Sink that discards everything, for cameras nobody renders from.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl UniformSink for NullSink {
    fn submit(&mut self, _batch: UniformBatch) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_and_types() {
        assert_eq!(CommonUniform::ProjectionInverseView.name(), "uProjIV");
        assert_eq!(CommonUniform::Projection.name(), "uProj");
        assert_eq!(CommonUniform::View.name(), "uView");
        assert_eq!(CommonUniform::CameraViewDir.name(), "uCamViewVec");
        assert_eq!(CommonUniform::CameraUp.name(), "uCamUp");

        assert_eq!(
            CommonUniform::View.uniform_type(),
            UniformType::FloatMat4
        );
        assert_eq!(
            CommonUniform::CameraUp.uniform_type(),
            UniformType::FloatVec3
        );
    }

    #[test]
    fn from_name_inverts_name() {
        for slot in CommonUniform::ALL {
            assert_eq!(CommonUniform::from_name(slot.name()), Some(slot));
        }
        assert_eq!(CommonUniform::from_name("uObject"), None);
    }

    #[test]
    fn batch_values_match_slot_types() {
        let batch = UniformBatch {
            transform_seq: 3,
            projection_inverse_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_dir: Vec3::NEG_Z,
            up: Vec3::Y,
        };
        let pairs: Vec<_> = batch.iter().collect();
        assert_eq!(pairs.len(), 5);
        for (slot, value) in pairs {
            assert_eq!(slot.uniform_type(), value.uniform_type());
        }
        assert_eq!(
            batch.get(CommonUniform::CameraViewDir).as_vec3(),
            Some(Vec3::NEG_Z)
        );
        assert_eq!(batch.get(CommonUniform::View).as_vec3(), None);
    }
}
