// src/views/flat_point.rs

view! {
    /// A flat point: the outer product of a point with `ni`, e.g. the meet of
    /// a line and a plane.
    FlatPoint, group 2;
    e1_ni => [7] * 1.0,
    e2_ni => [8] * 1.0,
    e3_ni => [9] * 1.0,
    no_ni => [6] * 1.0,
}
