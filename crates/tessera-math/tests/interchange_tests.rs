// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use tessera_math::interchange::{aligned_buffer, as_floats, as_floats_mut};
use tessera_math::{Aligned4, MathError, Matrix4, Quaternion, Vector4};

#[test]
fn vector_store_load() {
    let v = Vector4::new(1.0, -2.0, 3.5, 0.25);
    let mut raw = [0.0; 4];
    v.store(&mut raw);
    assert_eq!(raw, [1.0, -2.0, 3.5, 0.25]);

    let mut aligned = Aligned4::default();
    v.store_aligned(&mut aligned);
    assert_eq!(<[f32; 4]>::from(aligned), raw);

    let mut w = Vector4::ZERO;
    w.load_aligned(&aligned);
    assert_eq!(w, v);
    w.set_zero4();
    w.load(&raw);
    assert_eq!(w, v);
    assert_eq!(Vector4::from(raw), v);
    assert_eq!(<[f32; 4]>::from(v), raw);
}

#[test]
fn from_slice_checks_length() {
    assert_eq!(
        Vector4::from_slice(&[1.0, 2.0, 3.0]),
        Err(MathError::SliceLength { expected: 4, actual: 3 })
    );
    assert_eq!(
        Quaternion::from_slice(&[0.0, 0.0, 0.0, 1.0]).expect("four floats"),
        Quaternion::IDENTITY
    );
    let flat: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let m = Matrix4::from_slice(&flat).expect("sixteen floats");
    assert_eq!(m.to_col_major().to_vec(), flat);
    assert_eq!(
        Matrix4::from_slice(&flat[..15]),
        Err(MathError::SliceLength { expected: 16, actual: 15 })
    );
}

#[test]
fn error_messages_name_the_lengths() {
    let err = MathError::SliceLength { expected: 16, actual: 3 };
    assert_eq!(err.to_string(), "slice length mismatch: expected 16 floats, got 3");
    assert!(MathError::InvalidTableSize(0).to_string().contains("invalid trig table size 0"));
}

#[test]
fn aligned_buffers_flatten_in_order() {
    let vs = [Vector4::UNIT_X, Vector4::new(1.0, 2.0, 3.0, 4.0)];
    let mut buf = aligned_buffer(vs.len());
    for (slot, v) in buf.iter_mut().zip(&vs) {
        v.store_aligned(slot);
    }
    assert_eq!(as_floats(&buf), &[1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(as_floats(&buf).as_ptr() as usize % 16, 0);

    as_floats_mut(&mut buf)[0] = 9.0;
    let mut v = Vector4::ZERO;
    v.load_aligned(&buf[0]);
    assert_eq!(v.x(), 9.0);
}

#[test]
fn quaternion_store_load() {
    let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
    let mut raw = [0.0; 4];
    q.store(&mut raw);
    let mut back = Quaternion::ZERO;
    back.load(&raw);
    assert_eq!(back, q);

    let mut aligned = Aligned4::default();
    q.store_aligned(&mut aligned);
    back.set_zero();
    back.load_aligned(&aligned);
    assert_eq!(back, q);
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn vector_serializes_as_four_floats() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let value = serde_value::to_value(v).expect("serialize");
        let serde_value::Value::Seq(items) = &value else {
            panic!("expected a sequence, got {value:?}");
        };
        assert_eq!(items.len(), 4);
        let back: Vector4 = value.deserialize_into().expect("deserialize");
        assert_eq!(back, v);
    }

    #[test]
    fn matrix_serializes_column_major() {
        let m = Matrix4::translation(1.0, 2.0, 3.0);
        let value = serde_value::to_value(m).expect("serialize");
        let flat: [f32; 16] = value.clone().deserialize_into().expect("as array");
        assert_eq!(flat[12..15], [1.0, 2.0, 3.0]);
        let back: Matrix4 = value.deserialize_into().expect("deserialize");
        assert_eq!(back, m);
    }

    #[test]
    fn quaternion_and_vector2_round_trip() {
        let q = Quaternion::from_rotation_z(0.4);
        let back: Quaternion = serde_value::to_value(q)
            .expect("serialize")
            .deserialize_into()
            .expect("deserialize");
        assert_eq!(back, q);

        let v = tessera_math::Vector2::new(3.0, -1.0);
        let back: tessera_math::Vector2 = serde_value::to_value(v)
            .expect("serialize")
            .deserialize_into()
            .expect("deserialize");
        assert_eq!(back, v);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let value = serde_value::to_value([1.0_f32, 2.0, 3.0]).expect("serialize");
        assert!(value.deserialize_into::<Vector4>().is_err());
    }
}
