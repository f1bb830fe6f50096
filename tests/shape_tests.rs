//! Shape tests - template table and rotation properties

use std::collections::HashSet;

use blockfall::core::ShapeMatrix;
use blockfall::types::ShapeKind;

/// Normalize a shape to its occupied-cell set for congruence checks.
fn cell_set(shape: &ShapeMatrix) -> HashSet<(i8, i8)> {
    shape.offsets().iter().copied().collect()
}

#[test]
fn test_templates_fit_bounding_box() {
    for kind in ShapeKind::ALL {
        let shape = ShapeMatrix::template(kind);
        assert!(shape.rows() >= 1 && shape.rows() <= 4, "{}", kind.as_str());
        assert!(shape.cols() >= 1 && shape.cols() <= 4, "{}", kind.as_str());
        assert_eq!(shape.offsets().len(), 4, "{}", kind.as_str());
    }
}

#[test]
fn test_templates_are_distinct() {
    let mut seen = Vec::new();
    for kind in ShapeKind::ALL {
        let cells = cell_set(&ShapeMatrix::template(kind));
        assert!(!seen.contains(&cells), "{} duplicates a template", kind.as_str());
        seen.push(cells);
    }
}

#[test]
fn test_four_rotations_are_congruent_with_original() {
    for kind in ShapeKind::ALL {
        let template = ShapeMatrix::template(kind);
        let mut shape = template;
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(cell_set(&shape), cell_set(&template), "{}", kind.as_str());
        assert_eq!(shape, template, "{}", kind.as_str());
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = ShapeMatrix::template(ShapeKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_i_piece_orientations_cycle_with_period_two() {
    let flat = ShapeMatrix::template(ShapeKind::I);
    let tall = flat.rotated();

    assert_eq!((flat.rows(), flat.cols()), (1, 4));
    assert_eq!((tall.rows(), tall.cols()), (4, 1));
    assert_ne!(cell_set(&tall), cell_set(&flat));
    assert_eq!(tall.rotated(), flat);
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in ShapeKind::ALL {
        let shape = ShapeMatrix::template(kind);
        let turned = shape.rotated();
        assert_eq!(turned.rows(), shape.cols(), "{}", kind.as_str());
        assert_eq!(turned.cols(), shape.rows(), "{}", kind.as_str());
        assert_eq!(turned.offsets().len(), 4, "{}", kind.as_str());
    }
}

#[test]
fn test_s_and_z_are_mirrored_pair() {
    let s = ShapeMatrix::template(ShapeKind::S);
    let z = ShapeMatrix::template(ShapeKind::Z);
    let mirrored: HashSet<(i8, i8)> = cell_set(&s)
        .into_iter()
        .map(|(x, y)| (s.cols() as i8 - 1 - x, y))
        .collect();
    assert_eq!(mirrored, cell_set(&z));
}
