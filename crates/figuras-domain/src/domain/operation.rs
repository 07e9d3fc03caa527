//! Computation strategies.
//!
//! An [`OperationKind`] names one of the eleven strategies and declares the
//! parameters it needs, in prompt order. An [`Operation`] is the same strategy
//! with its validated parameters bound, ready for a single [`Calculate::calculate`]
//! call.

use std::fmt;

use super::error::DomainError;
use super::shape::OperationChoice;
use super::shape::Shape;

/// Low-precision circle constant kept for output parity.
pub const CIRCLE_PI: f64 = 3.1416;

pub trait Calculate {
    fn calculate(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Real number strictly greater than zero.
    PositiveReal,
    /// Integer greater than or equal to zero.
    NonNegativeInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub label: &'static str,
    pub kind: ParameterKind,
}

impl Parameter {
    const fn real(label: &'static str) -> Self {
        Self {
            label,
            kind: ParameterKind::PositiveReal,
        }
    }

    const fn integer(label: &'static str) -> Self {
        Self {
            label,
            kind: ParameterKind::NonNegativeInteger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Real(f64),
    Integer(u32),
}

const RADIUS: &[Parameter] = &[Parameter::real("Radio:")];
const SIDE: &[Parameter] = &[Parameter::real("Lado:")];
const BASE_HEIGHT: &[Parameter] = &[Parameter::real("Base:"), Parameter::real("Altura:")];
const THREE_SIDES: &[Parameter] = &[
    Parameter::real("Lado 1:"),
    Parameter::real("Lado 2:"),
    Parameter::real("Lado 3:"),
];
const SIDE_APOTHEM: &[Parameter] = &[Parameter::real("Lado:"), Parameter::real("Apotema:")];
const BASE_EXPONENT: &[Parameter] = &[
    Parameter::real("Base:"),
    Parameter::integer("Exponente (entero):"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CircleArea,
    CirclePerimeter,
    SquareArea,
    SquarePerimeter,
    TriangleArea,
    TrianglePerimeter,
    RectangleArea,
    RectanglePerimeter,
    PentagonArea,
    PentagonPerimeter,
    Power,
}

impl OperationKind {
    pub const ALL: [OperationKind; 11] = [
        OperationKind::CircleArea,
        OperationKind::CirclePerimeter,
        OperationKind::SquareArea,
        OperationKind::SquarePerimeter,
        OperationKind::TriangleArea,
        OperationKind::TrianglePerimeter,
        OperationKind::RectangleArea,
        OperationKind::RectanglePerimeter,
        OperationKind::PentagonArea,
        OperationKind::PentagonPerimeter,
        OperationKind::Power,
    ];

    /// Maps raw menu choices to a strategy.
    ///
    /// Power ignores the shape entirely; any other operation needs a known shape.
    pub fn resolve(shape_choice: u8, operation_choice: u8) -> Result<Self, DomainError> {
        let operation = OperationChoice::from_choice(operation_choice)?;
        if operation == OperationChoice::Power {
            return Ok(OperationKind::Power);
        }
        let shape = Shape::from_choice(shape_choice)?;
        Ok(Self::for_shape(shape, operation))
    }

    pub fn for_shape(shape: Shape, operation: OperationChoice) -> Self {
        let area = match operation {
            OperationChoice::Power => return OperationKind::Power,
            OperationChoice::Area => true,
            OperationChoice::Perimeter => false,
        };
        match (shape, area) {
            (Shape::Circle, true) => OperationKind::CircleArea,
            (Shape::Circle, false) => OperationKind::CirclePerimeter,
            (Shape::Square, true) => OperationKind::SquareArea,
            (Shape::Square, false) => OperationKind::SquarePerimeter,
            (Shape::Triangle, true) => OperationKind::TriangleArea,
            (Shape::Triangle, false) => OperationKind::TrianglePerimeter,
            (Shape::Rectangle, true) => OperationKind::RectangleArea,
            (Shape::Rectangle, false) => OperationKind::RectanglePerimeter,
            (Shape::Pentagon, true) => OperationKind::PentagonArea,
            (Shape::Pentagon, false) => OperationKind::PentagonPerimeter,
        }
    }

    /// Parameters in the order they are prompted for.
    pub fn parameters(&self) -> &'static [Parameter] {
        match self {
            OperationKind::CircleArea | OperationKind::CirclePerimeter => RADIUS,
            OperationKind::SquareArea
            | OperationKind::SquarePerimeter
            | OperationKind::PentagonPerimeter => SIDE,
            OperationKind::TriangleArea
            | OperationKind::RectangleArea
            | OperationKind::RectanglePerimeter => BASE_HEIGHT,
            OperationKind::TrianglePerimeter => THREE_SIDES,
            OperationKind::PentagonArea => SIDE_APOTHEM,
            OperationKind::Power => BASE_EXPONENT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::CircleArea => "circle_area",
            OperationKind::CirclePerimeter => "circle_perimeter",
            OperationKind::SquareArea => "square_area",
            OperationKind::SquarePerimeter => "square_perimeter",
            OperationKind::TriangleArea => "triangle_area",
            OperationKind::TrianglePerimeter => "triangle_perimeter",
            OperationKind::RectangleArea => "rectangle_area",
            OperationKind::RectanglePerimeter => "rectangle_perimeter",
            OperationKind::PentagonArea => "pentagon_area",
            OperationKind::PentagonPerimeter => "pentagon_perimeter",
            OperationKind::Power => "power",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    CircleArea { radius: f64 },
    CirclePerimeter { radius: f64 },
    SquareArea { side: f64 },
    SquarePerimeter { side: f64 },
    TriangleArea { base: f64, height: f64 },
    TrianglePerimeter { a: f64, b: f64, c: f64 },
    RectangleArea { base: f64, height: f64 },
    RectanglePerimeter { base: f64, height: f64 },
    PentagonArea { side: f64, apothem: f64 },
    PentagonPerimeter { side: f64 },
    Power { base: f64, exponent: u32 },
}

impl Operation {
    /// Binds `values` to `kind`, checking count, type and positivity against
    /// [`OperationKind::parameters`].
    pub fn from_values(kind: OperationKind, values: &[ParameterValue]) -> Result<Self, DomainError> {
        let params = kind.parameters();
        if params.len() != values.len() {
            return Err(DomainError::ParameterCount {
                kind,
                expected: params.len(),
                got: values.len(),
            });
        }

        let mut reals = [0.0_f64; 3];
        let mut integer = 0_u32;
        let mut real_count = 0;
        for (param, value) in params.iter().zip(values) {
            match (param.kind, *value) {
                (ParameterKind::PositiveReal, ParameterValue::Real(v)) => {
                    if v.is_nan() || v <= 0.0 {
                        return Err(DomainError::NonPositive {
                            kind,
                            label: param.label,
                            value: v,
                        });
                    }
                    reals[real_count] = v;
                    real_count += 1;
                }
                (ParameterKind::NonNegativeInteger, ParameterValue::Integer(v)) => integer = v,
                _ => {
                    return Err(DomainError::ParameterType {
                        kind,
                        label: param.label,
                    });
                }
            }
        }

        let [r0, r1, r2] = reals;
        Ok(match kind {
            OperationKind::CircleArea => Operation::CircleArea { radius: r0 },
            OperationKind::CirclePerimeter => Operation::CirclePerimeter { radius: r0 },
            OperationKind::SquareArea => Operation::SquareArea { side: r0 },
            OperationKind::SquarePerimeter => Operation::SquarePerimeter { side: r0 },
            OperationKind::TriangleArea => Operation::TriangleArea {
                base: r0,
                height: r1,
            },
            OperationKind::TrianglePerimeter => Operation::TrianglePerimeter {
                a: r0,
                b: r1,
                c: r2,
            },
            OperationKind::RectangleArea => Operation::RectangleArea {
                base: r0,
                height: r1,
            },
            OperationKind::RectanglePerimeter => Operation::RectanglePerimeter {
                base: r0,
                height: r1,
            },
            OperationKind::PentagonArea => Operation::PentagonArea {
                side: r0,
                apothem: r1,
            },
            OperationKind::PentagonPerimeter => Operation::PentagonPerimeter { side: r0 },
            OperationKind::Power => Operation::Power {
                base: r0,
                exponent: integer,
            },
        })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::CircleArea { .. } => OperationKind::CircleArea,
            Operation::CirclePerimeter { .. } => OperationKind::CirclePerimeter,
            Operation::SquareArea { .. } => OperationKind::SquareArea,
            Operation::SquarePerimeter { .. } => OperationKind::SquarePerimeter,
            Operation::TriangleArea { .. } => OperationKind::TriangleArea,
            Operation::TrianglePerimeter { .. } => OperationKind::TrianglePerimeter,
            Operation::RectangleArea { .. } => OperationKind::RectangleArea,
            Operation::RectanglePerimeter { .. } => OperationKind::RectanglePerimeter,
            Operation::PentagonArea { .. } => OperationKind::PentagonArea,
            Operation::PentagonPerimeter { .. } => OperationKind::PentagonPerimeter,
            Operation::Power { .. } => OperationKind::Power,
        }
    }
}

impl Calculate for Operation {
    // Evaluation order is left to right as written; reordering changes the
    // last bit of some results.
    fn calculate(&self) -> f64 {
        match *self {
            Operation::CircleArea { radius } => CIRCLE_PI * radius * radius,
            Operation::CirclePerimeter { radius } => 2.0 * CIRCLE_PI * radius,
            Operation::SquareArea { side } => side * side,
            Operation::SquarePerimeter { side } => 4.0 * side,
            Operation::TriangleArea { base, height } => 0.5 * base * height,
            Operation::TrianglePerimeter { a, b, c } => a + b + c,
            Operation::RectangleArea { base, height } => base * height,
            Operation::RectanglePerimeter { base, height } => 2.0 * (base + height),
            Operation::PentagonArea { side, apothem } => (5.0 * side * apothem) / 2.0,
            Operation::PentagonPerimeter { side } => 5.0 * side,
            Operation::Power { base, exponent } => power(base, exponent),
        }
    }
}

/// `base` raised to `exponent` by repeated multiplication.
///
/// Stops once the accumulator stops changing (infinity, zero, or a base of
/// one). Otherwise it costs one multiplication per unit of `exponent`, up to
/// `i32::MAX` for the largest accepted input.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut acc = 1.0_f64;
    for _ in 0..exponent {
        let next = acc * base;
        if next == acc {
            break;
        }
        acc = next;
    }
    acc
}
