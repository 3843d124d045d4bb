//! Integrated tests for cmx-core

use crate::*;

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

fn square() -> Grid {
    vec![
        vec![c(1.0, 1.0), c(2.0, 2.0)],
        vec![c(3.0, 3.0), c(4.0, 4.0)],
    ]
}

fn column() -> Grid {
    vec![vec![c(1.0, 0.0)], vec![c(0.0, 1.0)]]
}

type Op = fn(&dyn Matrix) -> Box<dyn Matrix>;

fn op_set(m: &dyn Matrix) -> Box<dyn Matrix> {
    m.set(c(9.0, 9.0), 0, 1).unwrap()
}

fn op_scale(m: &dyn Matrix) -> Box<dyn Matrix> {
    m.scale(c(0.0, 2.0))
}

fn op_add(m: &dyn Matrix) -> Box<dyn Matrix> {
    let ones = ImmutableMatrix::new(vec![vec![c(1.0, 0.0); 2]; 2]).unwrap();
    m.add(&ones).unwrap()
}

fn op_map(m: &dyn Matrix) -> Box<dyn Matrix> {
    m.map(&mut |v, r, col| v * c(r as f64 + 2.0, col as f64))
}

fn op_resize(m: &dyn Matrix) -> Box<dyn Matrix> {
    m.resize(3, 3)
}

fn changing_ops() -> [(&'static str, Op); 5] {
    [
        ("set", op_set as Op),
        ("scale", op_scale as Op),
        ("add", op_add as Op),
        ("map", op_map as Op),
        ("resize", op_resize as Op),
    ]
}

#[test]
fn test_immutable_never_changes_under_any_op() {
    for (name, op) in changing_ops() {
        let a = ImmutableMatrix::new(square()).unwrap();
        let result = op(&a);
        assert_eq!(a.to_grid(), square(), "{name} altered the original");
        assert!(!equal(&a, result.as_ref()), "{name} had no visible effect");
        assert_eq!(result.discipline(), Discipline::Immutable);
    }
}

#[test]
fn test_mutable_writes_through_under_any_op() {
    for (name, op) in changing_ops() {
        let a = MutableMatrix::new(square()).unwrap();
        let observer = a.clone();
        let result = op(&a);
        assert!(equal(&observer, result.as_ref()), "{name} did not write through");
        assert_ne!(observer.to_grid(), square(), "{name} had no visible effect");
        assert!(result.as_any().downcast_ref::<MutableMatrix>().unwrap().ptr_eq(&observer));
    }
}

#[test]
fn test_mutable_conversion_copies() {
    let a = MutableMatrix::new(square()).unwrap();
    let copy = a.mutable();
    assert!(equal(&a, copy.as_ref()));
    copy.scale(c(0.0, 0.0));
    assert_eq!(a.to_grid(), square());
}

#[test]
fn test_transpose_involution() {
    let imm = ImmutableMatrix::new(square()).unwrap();
    let back = imm.transpose().transpose();
    assert!(equal(&imm, back.as_ref()));
    assert_eq!(back.discipline(), Discipline::Immutable);

    let mat = MutableMatrix::new(square()).unwrap();
    let back = mat.transpose().transpose();
    assert!(back.as_any().downcast_ref::<MutableMatrix>().unwrap().ptr_eq(&mat));
}

#[test]
fn test_transpose_set_matches_direct_set() {
    let via_view = MutableMatrix::new(square()).unwrap();
    via_view.transpose().set(c(0.0, -1.0), 0, 1).unwrap();

    let direct = MutableMatrix::new(square()).unwrap();
    direct.set(c(0.0, -1.0), 1, 0).unwrap();

    assert!(equal(&via_view, &direct));

    let imm = ImmutableMatrix::new(square()).unwrap();
    let via_view = imm.transpose().set(c(0.0, -1.0), 0, 1).unwrap().transpose();
    let direct = imm.set(c(0.0, -1.0), 1, 0).unwrap();
    assert!(equal(via_view.as_ref(), direct.as_ref()));
}

#[test]
fn test_dot_dimension_law() {
    let a = ImmutableMatrix::zeros(2, 3);
    let b = MutableMatrix::zeros(3, 4);
    assert_eq!(a.dot(&b).unwrap().dim(), (2, 4));
    assert!(matches!(
        b.dot(&a),
        Err(MatrixError::DimensionMismatch { operation: Operation::Dot, .. })
    ));
}

#[test]
fn test_dot_literal_for_every_left_variant() {
    let expected = vec![vec![c(-1.0, 3.0)], vec![c(-1.0, 7.0)]];
    let b = ImmutableMatrix::new(column()).unwrap();

    let imm = ImmutableMatrix::new(square()).unwrap();
    assert_eq!(imm.dot(&b).unwrap().to_grid(), expected);

    let mat = MutableMatrix::new(square()).unwrap();
    let product = mat.dot(&b).unwrap();
    assert_eq!(product.to_grid(), expected);
    assert_eq!(product.discipline(), Discipline::Mutable);

    // (Aᵀ)ᵀ as a nested view still multiplies like A
    let nested = Transpose::new(imm.transpose());
    assert_eq!(nested.dot(&b).unwrap().to_grid(), expected);
}

#[test]
fn test_equal_discrimination() {
    let a = ImmutableMatrix::new(square()).unwrap();
    assert!(equal(&a, &a));
    assert!(!equal(&a, &ImmutableMatrix::new(column()).unwrap()));
    let c8 = ImmutableMatrix::new(vec![
        vec![c(8.0, 8.0), c(9.0, 9.0)],
        vec![c(10.0, 10.0), c(1.0, 1.0)],
    ])
    .unwrap();
    assert!(!equal(&a, &c8));
}

#[test]
fn test_resize_zero_fill() {
    for m in [
        Box::new(ImmutableMatrix::new(square()).unwrap()) as Box<dyn Matrix>,
        Box::new(MutableMatrix::new(square()).unwrap()),
    ] {
        let grown = m.resize(4, 3);
        assert_eq!(grown.dim(), (4, 3));
        for i in 0..4 {
            for j in 0..3 {
                let expected = if i < 2 && j < 2 { square()[i][j] } else { c(0.0, 0.0) };
                assert_eq!(grown.get(i, j), Ok(expected));
            }
        }
    }
}

#[test]
fn test_builder_round_trip() {
    let source = ImmutableMatrix::new(square()).unwrap();
    let built = source.build(column()).unwrap();

    let there_and_back = built.immutable().mutable();
    assert_eq!(there_and_back.discipline(), Discipline::Mutable);
    assert!(equal(there_and_back.as_ref(), &MutableMatrix::new(column()).unwrap()));

    let mutable = MutableMatrix::new(square()).unwrap();
    let built = mutable.build(column()).unwrap();
    let there_and_back = built.mutable().immutable();
    assert_eq!(there_and_back.discipline(), Discipline::Immutable);
    assert!(equal(there_and_back.as_ref(), &ImmutableMatrix::new(column()).unwrap()));
}

#[test]
fn test_rectangularity_for_every_constructor() {
    let ragged = vec![vec![c(1.0, 1.0), c(2.0, 2.0)], vec![c(3.0, 3.0)]];
    assert!(matches!(
        ImmutableMatrix::new(ragged.clone()),
        Err(MatrixError::IrregularShape { .. })
    ));
    assert!(matches!(
        MutableMatrix::new(ragged.clone()),
        Err(MatrixError::IrregularShape { .. })
    ));
    assert!(matches!(
        Discipline::Mutable.build(ragged),
        Err(MatrixError::IrregularShape { .. })
    ));
    assert!(matches!(
        MutableMatrix::from_parts(&[vec![1.0], vec![2.0, 3.0]], &[vec![1.0], vec![2.0]]),
        Err(MatrixError::IrregularShape { .. })
    ));
}
