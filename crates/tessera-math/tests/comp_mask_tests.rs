// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use tessera_math::generic;
use tessera_math::lanes::{Cmp, Lanes, Native, Portable};
use tessera_math::{CompMask, Mask, Vector4};

#[test]
fn lane_bits_follow_x_y_z_w_order() {
    let a = Vector4::new(1.0, 5.0, 1.0, 5.0);
    let b = Vector4::splat(3.0);
    let m = a.comp_less(&b);
    assert_eq!(m.get_mask(), Mask::X | Mask::Z);
    assert_eq!(m.get_mask().bits(), 0b0101);
    for i in 0..4 {
        assert_eq!(m.get_mask().contains(Mask::lane(i)), i % 2 == 0);
    }
}

#[test]
fn xyz_subset_ignores_w() {
    let a = Vector4::new(1.0, 2.0, 3.0, 100.0);
    let b = Vector4::new(1.0, 2.0, 3.0, -100.0);
    let eq = a.comp_equal(&b);
    assert!(eq.all_are_set(Mask::XYZ));
    assert!(!eq.all());
    assert!(!eq.any_is_set(Mask::W));
    assert!(a.equals3(&b));
    assert!(!a.equals4(&b));
}

#[test]
fn boolean_combinators() {
    let v = Vector4::new(-1.0, 0.0, 1.0, 2.0);
    let lo = v.comp_greater(&Vector4::splat(-0.5));
    let hi = v.comp_less(&Vector4::splat(1.5));
    assert_eq!((lo & hi).get_mask(), Mask::Y | Mask::Z);
    assert_eq!((lo | hi).get_mask(), Mask::XYZW);
    assert_eq!((lo ^ hi).get_mask(), Mask::X | Mask::W);

    let mut m = CompMask::default();
    assert_eq!(m.get_mask(), Mask::NONE);
    m.set_and(&lo, &hi);
    assert_eq!(m, lo & hi);
    m.set_or(&lo, &hi);
    assert_eq!(m, lo | hi);
    m.set_xor(&lo, &hi);
    assert_eq!(m, lo ^ hi);

    let mut acc = lo;
    acc &= hi;
    acc |= lo;
    acc ^= lo;
    assert!(!acc.any());
}

#[test]
fn aabb_overlap_with_masks() {
    let (amin, amax) = (Vector4::direction(0.0, 0.0, 0.0), Vector4::direction(2.0, 2.0, 2.0));
    let (bmin, bmax) = (Vector4::direction(1.0, 1.0, 1.0), Vector4::direction(3.0, 3.0, 3.0));
    let (cmin, cmax) = (Vector4::direction(5.0, 0.0, 0.0), Vector4::direction(6.0, 1.0, 1.0));

    let overlaps = |min0: &Vector4, max0: &Vector4, min1: &Vector4, max1: &Vector4| {
        !(max0.comp_less(min1) | max1.comp_less(min0)).any_is_set(Mask::XYZ)
    };
    assert!(overlaps(&amin, &amax, &bmin, &bmax));
    assert!(!overlaps(&amin, &amax, &cmin, &cmax));
}

#[test]
fn debug_lists_set_lanes() {
    assert_eq!(format!("{:?}", Mask::XYZ), "Mask(xyz)");
    assert_eq!(format!("{:?}", Mask::NONE), "Mask(none)");
}

fn lane() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -1.0e3_f32..1.0e3,
        1 => Just(0.0_f32),
        1 => Just(-0.0_f32),
        1 => Just(f32::NAN),
    ]
}

/// Two quads where the lanes flagged in `shared` hold the same value.
fn paired_lanes() -> impl Strategy<Value = ([f32; 4], [f32; 4])> {
    (prop::array::uniform4(lane()), prop::array::uniform4(lane()), 0u8..16).prop_map(
        |(a, mut b, shared)| {
            for (i, (dst, src)) in b.iter_mut().zip(a).enumerate() {
                if shared & (1 << i) != 0 {
                    *dst = src;
                }
            }
            (a, b)
        },
    )
}

fn scalar_bits(a: &[f32; 4], b: &[f32; 4], op: Cmp) -> u8 {
    (0..4)
        .filter(|&i| op.eval(a[i], b[i]))
        .fold(0, |bits, i| bits | (1 << i))
}

fn check_comparisons<B: Lanes>(a: [f32; 4], b: [f32; 4]) -> Result<(), TestCaseError> {
    let va = generic::Vector4::<B>::from_array(a);
    let vb = generic::Vector4::<B>::from_array(b);
    let results = [
        (Cmp::Eq, va.comp_equal(&vb)),
        (Cmp::Ne, va.comp_not_equal(&vb)),
        (Cmp::Lt, va.comp_less(&vb)),
        (Cmp::Gt, va.comp_greater(&vb)),
        (Cmp::Le, va.comp_less_equal(&vb)),
        (Cmp::Ge, va.comp_greater_equal(&vb)),
    ];
    for (op, mask) in results {
        prop_assert_eq!(
            mask.get_mask().bits(),
            scalar_bits(&a, &b, op),
            "{:?} on {} lanes",
            op,
            B::NAME
        );
    }

    let xyz_equal = (0..3).all(|i| Cmp::Eq.eval(a[i], b[i]));
    prop_assert_eq!(va.comp_equal(&vb).all_are_set(Mask::XYZ), xyz_equal);
    prop_assert_eq!(va.equals3(&vb), xyz_equal);
    Ok(())
}

proptest! {
    #[test]
    fn comparison_masks_match_scalar_predicates((a, b) in paired_lanes()) {
        check_comparisons::<Portable>(a, b)?;
        check_comparisons::<Native>(a, b)?;
    }
}
