// src/views/line.rs
use crate::ops::dual;
use crate::views::DualLine;

view! {
    /// A line through two points, `p ^ q ^ ni`.
    ///
    /// The last three coordinates use the order `e_i ^ no ^ ni`, the
    /// negation of the stored `no ^ e_i ^ ni` blades.
    Line, group 3;
    e1_e2_ni => [6] * 1.0,
    e1_e3_ni => [8] * 1.0,
    e2_e3_ni => [9] * 1.0,
    e1_no_ni => [4] * -1.0,
    e2_no_ni => [5] * -1.0,
    e3_no_ni => [7] * -1.0,
}

impl Line {
    /// The dual of this line.
    pub fn dual(&self) -> DualLine {
        DualLine::from(dual(&(*self).into()))
    }
}
