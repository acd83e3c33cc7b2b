//! Closed-form composed rotation matrices rendered as LaTeX.

use crate::domain::{Axis, Matrix3, RotationOrder, SymbolTriple, matrix_from_rows};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trig {
    Sin,
    Cos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Factor {
    trig: Trig,
    slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term {
    negative: bool,
    factors: &'static [Factor],
}

type Entry = &'static [Term];
type SymbolicForm = [[Entry; 3]; 3];

const fn factor(trig: Trig, slot: usize) -> Factor {
    Factor { trig, slot }
}

const S0: Factor = factor(Trig::Sin, 0);
const S1: Factor = factor(Trig::Sin, 1);
const S2: Factor = factor(Trig::Sin, 2);
const C0: Factor = factor(Trig::Cos, 0);
const C1: Factor = factor(Trig::Cos, 1);
const C2: Factor = factor(Trig::Cos, 2);

const fn p(factors: &'static [Factor]) -> Term {
    Term {
        negative: false,
        factors,
    }
}

const fn m(factors: &'static [Factor]) -> Term {
    Term {
        negative: true,
        factors,
    }
}

const XYX: SymbolicForm = [
    [&[p(&[C1])], &[p(&[S1, S2])], &[p(&[S1, C2])]],
    [
        &[p(&[S0, S1])],
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
        &[m(&[S0, C1, C2]), m(&[S2, C0])],
    ],
    [
        &[m(&[S1, C0])],
        &[p(&[S0, C2]), p(&[S2, C0, C1])],
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
    ],
];

const XZX: SymbolicForm = [
    [&[p(&[C1])], &[m(&[S1, C2])], &[p(&[S1, S2])]],
    [
        &[p(&[S1, C0])],
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
        &[m(&[S0, C2]), m(&[S2, C0, C1])],
    ],
    [
        &[p(&[S0, S1])],
        &[p(&[S0, C1, C2]), p(&[S2, C0])],
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
    ],
];

const YXY: SymbolicForm = [
    [
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
        &[p(&[S0, S1])],
        &[p(&[S0, C1, C2]), p(&[S2, C0])],
    ],
    [&[p(&[S1, S2])], &[p(&[C1])], &[m(&[S1, C2])]],
    [
        &[m(&[S0, C2]), m(&[S2, C0, C1])],
        &[p(&[S1, C0])],
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
    ],
];

const YZY: SymbolicForm = [
    [
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
        &[m(&[S1, C0])],
        &[p(&[S0, C2]), p(&[S2, C0, C1])],
    ],
    [&[p(&[S1, C2])], &[p(&[C1])], &[p(&[S1, S2])]],
    [
        &[m(&[S0, C1, C2]), m(&[S2, C0])],
        &[p(&[S0, S1])],
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
    ],
];

const ZXZ: SymbolicForm = [
    [
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
        &[m(&[S0, C1, C2]), m(&[S2, C0])],
        &[p(&[S0, S1])],
    ],
    [
        &[p(&[S0, C2]), p(&[S2, C0, C1])],
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
        &[m(&[S1, C0])],
    ],
    [&[p(&[S1, S2])], &[p(&[S1, C2])], &[p(&[C1])]],
];

const ZYZ: SymbolicForm = [
    [
        &[m(&[S0, S2]), p(&[C0, C1, C2])],
        &[m(&[S0, C2]), m(&[S2, C0, C1])],
        &[p(&[S1, C0])],
    ],
    [
        &[p(&[S0, C1, C2]), p(&[S2, C0])],
        &[m(&[S0, S2, C1]), p(&[C0, C2])],
        &[p(&[S0, S1])],
    ],
    [&[m(&[S1, C2])], &[p(&[S1, S2])], &[p(&[C1])]],
];

const XYZ: SymbolicForm = [
    [&[p(&[C1, C2])], &[m(&[S2, C1])], &[p(&[S1])]],
    [
        &[p(&[S0, S1, C2]), p(&[S2, C0])],
        &[m(&[S0, S1, S2]), p(&[C0, C2])],
        &[m(&[S0, C1])],
    ],
    [
        &[p(&[S0, S2]), m(&[S1, C0, C2])],
        &[p(&[S0, C2]), p(&[S1, S2, C0])],
        &[p(&[C0, C1])],
    ],
];

const XZY: SymbolicForm = [
    [&[p(&[C1, C2])], &[m(&[S1])], &[p(&[S2, C1])]],
    [
        &[p(&[S0, S2]), p(&[S1, C0, C2])],
        &[p(&[C0, C1])],
        &[m(&[S0, C2]), p(&[S1, S2, C0])],
    ],
    [
        &[p(&[S0, S1, C2]), m(&[S2, C0])],
        &[p(&[S0, C1])],
        &[p(&[S0, S1, S2]), p(&[C0, C2])],
    ],
];

const YXZ: SymbolicForm = [
    [
        &[p(&[S0, S1, S2]), p(&[C0, C2])],
        &[p(&[S0, S1, C2]), m(&[S2, C0])],
        &[p(&[S0, C1])],
    ],
    [&[p(&[S2, C1])], &[p(&[C1, C2])], &[m(&[S1])]],
    [
        &[m(&[S0, C2]), p(&[S1, S2, C0])],
        &[p(&[S0, S2]), p(&[S1, C0, C2])],
        &[p(&[C0, C1])],
    ],
];

const YZX: SymbolicForm = [
    [
        &[p(&[C0, C1])],
        &[p(&[S0, S2]), m(&[S1, C0, C2])],
        &[p(&[S0, C2]), p(&[S1, S2, C0])],
    ],
    [&[p(&[S1])], &[p(&[C1, C2])], &[m(&[S2, C1])]],
    [
        &[m(&[S0, C1])],
        &[p(&[S0, S1, C2]), p(&[S2, C0])],
        &[m(&[S0, S1, S2]), p(&[C0, C2])],
    ],
];

const ZXY: SymbolicForm = [
    [
        &[m(&[S0, S1, S2]), p(&[C0, C2])],
        &[m(&[S0, C1])],
        &[p(&[S0, S1, C2]), p(&[S2, C0])],
    ],
    [
        &[p(&[S0, C2]), p(&[S1, S2, C0])],
        &[p(&[C0, C1])],
        &[p(&[S0, S2]), m(&[S1, C0, C2])],
    ],
    [&[m(&[S2, C1])], &[p(&[S1])], &[p(&[C1, C2])]],
];

const ZYX: SymbolicForm = [
    [
        &[p(&[C0, C1])],
        &[m(&[S0, C2]), p(&[S1, S2, C0])],
        &[p(&[S0, S2]), p(&[S1, C0, C2])],
    ],
    [
        &[p(&[S0, C1])],
        &[p(&[S0, S1, S2]), p(&[C0, C2])],
        &[p(&[S0, S1, C2]), m(&[S2, C0])],
    ],
    [&[m(&[S1])], &[p(&[S2, C1])], &[p(&[C1, C2])]],
];

const fn symbolic_form(order: RotationOrder) -> &'static SymbolicForm {
    match order {
        RotationOrder::Xyx => &XYX,
        RotationOrder::Xzx => &XZX,
        RotationOrder::Yxy => &YXY,
        RotationOrder::Yzy => &YZY,
        RotationOrder::Zxz => &ZXZ,
        RotationOrder::Zyz => &ZYZ,
        RotationOrder::Xyz => &XYZ,
        RotationOrder::Xzy => &XZY,
        RotationOrder::Yxz => &YXZ,
        RotationOrder::Yzx => &YZX,
        RotationOrder::Zxy => &ZXY,
        RotationOrder::Zyx => &ZYX,
    }
}

/// The closed-form composed matrix for `order` as a LaTeX `pmatrix`.
pub fn format_composed_matrix(order: RotationOrder, symbols: &SymbolTriple) -> String {
    let form = symbolic_form(order);
    let rows = form
        .iter()
        .map(|row| {
            row.iter()
                .map(|entry| render_entry(entry, symbols))
                .collect::<Vec<_>>()
                .join(" &\n")
        })
        .collect::<Vec<_>>()
        .join(" \\\\\n");
    format!("\\begin{{pmatrix}}\n{rows}\n\\end{{pmatrix}}")
}

fn render_entry(entry: &[Term], symbols: &SymbolTriple) -> String {
    let mut out = String::new();
    for (position, term) in entry.iter().enumerate() {
        match (position, term.negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" -"),
            (_, false) => out.push_str(" + "),
        }
        let monomial = term
            .factors
            .iter()
            .map(|factor| {
                let function = match factor.trig {
                    Trig::Sin => "\\sin",
                    Trig::Cos => "\\cos",
                };
                format!("{function} {}", symbols.get(factor.slot))
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&monomial);
    }
    out
}

/// Evaluates the closed form for `order` at the given angles in radians.
pub fn evaluate_symbolic_form(order: RotationOrder, radians: [f64; 3]) -> Matrix3 {
    let form = symbolic_form(order);
    let mut rows = [[0.0; 3]; 3];
    for (r, row) in form.iter().enumerate() {
        for (c, entry) in row.iter().enumerate() {
            rows[r][c] = entry
                .iter()
                .map(|term| {
                    let product: f64 = term
                        .factors
                        .iter()
                        .map(|factor| match factor.trig {
                            Trig::Sin => radians[factor.slot].sin(),
                            Trig::Cos => radians[factor.slot].cos(),
                        })
                        .product();
                    if term.negative { -product } else { product }
                })
                .sum();
        }
    }
    matrix_from_rows(rows)
}

/// The symbolic single-axis rotation matrix `R_axis(symbol)` as a LaTeX `pmatrix`.
pub fn elementary_symbolic_matrix(axis: Axis, symbol: &str) -> String {
    let cos: &str = &format!("\\cos {symbol}");
    let sin: &str = &format!("\\sin {symbol}");
    let neg_sin: &str = &format!("-\\sin {symbol}");
    let rows = match axis {
        Axis::X => [["1", "0", "0"], ["0", cos, neg_sin], ["0", sin, cos]],
        Axis::Y => [[cos, "0", sin], ["0", "1", "0"], [neg_sin, "0", cos]],
        Axis::Z => [[cos, neg_sin, "0"], [sin, cos, "0"], ["0", "0", "1"]],
    };
    let body = rows
        .iter()
        .map(|row| format!("{} \\\\\n", row.join(" & ")))
        .collect::<String>();
    format!("\\begin{{pmatrix}}\n{body}\\end{{pmatrix}}")
}
