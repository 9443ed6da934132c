// src/math/quat.rs

use crate::math::vec3d::{_v3d_cross, _v3d_dot, _v3d_length, _v3d_normalize};
use crate::types::{Quat, Vec3d};

/// The identity rotation.
pub(crate) const QUAT_IDENTITY: Quat = Quat {
  x: 0.0,
  y: 0.0,
  z: 0.0,
  w: 1.0,
};

/// Hamilton product `a * b` (apply `b`, then `a`).
#[inline]
#[must_use]
pub(crate) fn _quat_mul(a: &Quat, b: &Quat) -> Quat {
  Quat {
    x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
    y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
    z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
    w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
  }
}

/// Conjugate, which is the inverse for unit quaternions.
#[inline]
#[must_use]
pub(crate) fn _quat_conjugate(q: &Quat) -> Quat {
  Quat {
    x: -q.x,
    y: -q.y,
    z: -q.z,
    w: q.w,
  }
}

#[inline]
#[must_use]
pub(crate) fn _quat_normalize(q: &Quat) -> Quat {
  let len = (q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w).sqrt();
  Quat {
    x: q.x / len,
    y: q.y / len,
    z: q.z / len,
    w: q.w / len,
  }
}

/// Rotates `v` by the unit quaternion `q`.
#[inline]
#[must_use]
pub(crate) fn _quat_rotate_v3d(q: &Quat, v: &Vec3d) -> Vec3d {
  // v + 2w(u x v) + 2u x (u x v), with u the vector part of q
  let u = Vec3d { x: q.x, y: q.y, z: q.z };
  let t = _v3d_cross(&u, v);
  let t = Vec3d {
    x: 2.0 * t.x,
    y: 2.0 * t.y,
    z: 2.0 * t.z,
  };
  let ut = _v3d_cross(&u, &t);
  Vec3d {
    x: v.x + q.w * t.x + ut.x,
    y: v.y + q.w * t.y + ut.y,
    z: v.z + q.w * t.z + ut.z,
  }
}

/// Shortest rotation taking unit vector `a` onto unit vector `b`.
///
/// Antiparallel vectors rotate half a turn about an axis perpendicular to `a`.
#[must_use]
pub(crate) fn _quat_rotation_to(a: &Vec3d, b: &Vec3d) -> Quat {
  let dot = _v3d_dot(a, b);
  if dot < -0.999_999 {
    let mut axis = _v3d_cross(&Vec3d { x: 1.0, y: 0.0, z: 0.0 }, a);
    if _v3d_length(&axis) < 1e-6 {
      axis = _v3d_cross(&Vec3d { x: 0.0, y: 1.0, z: 0.0 }, a);
    }
    let axis = _v3d_normalize(&axis);
    return Quat {
      x: axis.x,
      y: axis.y,
      z: axis.z,
      w: 0.0,
    };
  }
  if dot > 0.999_999 {
    return QUAT_IDENTITY;
  }
  let c = _v3d_cross(a, b);
  _quat_normalize(&Quat {
    x: c.x,
    y: c.y,
    z: c.z,
    w: 1.0 + dot,
  })
}

/// Spherical linear interpolation between two unit quaternions along the shorter arc.
#[must_use]
pub(crate) fn _quat_slerp(a: &Quat, b: &Quat, t: f64) -> Quat {
  let mut cos_omega = a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w;
  let mut end = *b;
  if cos_omega < 0.0 {
    cos_omega = -cos_omega;
    end = Quat {
      x: -b.x,
      y: -b.y,
      z: -b.z,
      w: -b.w,
    };
  }

  let (scale0, scale1) = if 1.0 - cos_omega > 1e-6 {
    let omega = cos_omega.acos();
    let sin_omega = omega.sin();
    (((1.0 - t) * omega).sin() / sin_omega, (t * omega).sin() / sin_omega)
  } else {
    (1.0 - t, t)
  };

  Quat {
    x: scale0 * a.x + scale1 * end.x,
    y: scale0 * a.y + scale1 * end.y,
    z: scale0 * a.z + scale1 * end.z,
    w: scale0 * a.w + scale1 * end.w,
  }
}

/// Rotation angle of `q` about the z axis, assuming `q` has no other component.
#[inline]
#[must_use]
pub(crate) fn _quat_z_angle(q: &Quat) -> f64 {
  2.0 * q.z.atan2(q.w)
}
