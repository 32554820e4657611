use approx::assert_relative_eq;
use scena_animation::{lerp_value, Value};

fn keyframe_pair() -> (Value, Value) {
    let a = Value::record([
        ("x", Value::f(0.0)),
        ("y", Value::f(-4.0)),
        ("label", Value::text("start")),
        (
            "nested",
            Value::record([("depth", Value::f(1.0)), ("tag", Value::text("a"))]),
        ),
        ("seq", Value::list([Value::f(0.0), Value::f(100.0)])),
    ]);
    let b = Value::record([
        ("x", Value::f(10.0)),
        ("y", Value::f(4.0)),
        ("label", Value::text("end")),
        (
            "nested",
            Value::record([("depth", Value::f(3.0)), ("tag", Value::text("b"))]),
        ),
        ("seq", Value::list([Value::f(50.0), Value::f(0.0)])),
    ]);
    (a, b)
}

fn field<'a>(v: &'a Value, name: &str) -> &'a Value {
    let Value::Record(map) = v else {
        panic!("expected record")
    };
    &map[name]
}

fn scalar(v: &Value) -> f32 {
    let Value::Scalar(f) = v else {
        panic!("expected scalar")
    };
    *f
}

#[test]
fn p_zero_equals_start_on_numeric_fields() {
    let (a, b) = keyframe_pair();
    let out = lerp_value(&a, &b, 0.0).unwrap();
    assert_relative_eq!(scalar(field(&out, "x")), 0.0);
    assert_relative_eq!(scalar(field(&out, "y")), -4.0);
    assert_relative_eq!(scalar(field(field(&out, "nested"), "depth")), 1.0);
}

#[test]
fn p_one_equals_end_on_every_field() {
    let (a, b) = keyframe_pair();
    let out = lerp_value(&a, &b, 1.0).unwrap();
    assert_eq!(out, b);
}

#[test]
fn textual_fields_switch_instantly_at_every_p() {
    let (a, b) = keyframe_pair();
    for p in [0.0, 0.1, 0.5, 0.999] {
        let out = lerp_value(&a, &b, p).unwrap();
        assert_eq!(field(&out, "label"), &Value::text("end"));
        assert_eq!(field(field(&out, "nested"), "tag"), &Value::text("b"));
    }
}

#[test]
fn midpoint_blends_every_numeric_leaf() {
    let (a, b) = keyframe_pair();
    let out = lerp_value(&a, &b, 0.5).unwrap();
    assert_relative_eq!(scalar(field(&out, "x")), 5.0);
    assert_relative_eq!(scalar(field(&out, "y")), 0.0);
    assert_relative_eq!(scalar(field(field(&out, "nested"), "depth")), 2.0);
    let Value::List(seq) = field(&out, "seq") else {
        panic!("expected list")
    };
    assert_relative_eq!(scalar(&seq[0]), 25.0);
    assert_relative_eq!(scalar(&seq[1]), 50.0);
}

#[test]
fn inputs_are_left_untouched() {
    let (a, b) = keyframe_pair();
    let (a_before, b_before) = (a.clone(), b.clone());
    let _ = lerp_value(&a, &b, 0.42).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn lists_of_point_records_blend_pairwise() {
    let a = Value::record([(
        "pts",
        Value::list([
            Value::record([("x", Value::f(0.0)), ("y", Value::f(0.0))]),
            Value::record([("x", Value::f(2.0)), ("y", Value::f(2.0))]),
        ]),
    )]);
    let b = Value::record([(
        "pts",
        Value::list([
            Value::record([("x", Value::f(10.0)), ("y", Value::f(10.0))]),
            Value::record([("x", Value::f(4.0)), ("y", Value::f(4.0))]),
        ]),
    )]);
    let out = lerp_value(&a, &b, 0.5).unwrap();
    let Value::List(pts) = field(&out, "pts") else {
        panic!("expected list")
    };
    assert_relative_eq!(scalar(field(&pts[0], "x")), 5.0);
    assert_relative_eq!(scalar(field(&pts[0], "y")), 5.0);
    assert_relative_eq!(scalar(field(&pts[1], "x")), 3.0);
    assert_relative_eq!(scalar(field(&pts[1], "y")), 3.0);
}
