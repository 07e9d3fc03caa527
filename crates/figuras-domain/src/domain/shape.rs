//! Menu selections: which shape, which operation.

use std::fmt;

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Rectangle,
    Pentagon,
}

impl Shape {
    /// Shapes in menu order; the menu number is the index plus one.
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Rectangle,
        Shape::Pentagon,
    ];

    pub fn from_choice(choice: u8) -> Result<Self, DomainError> {
        match choice {
            1 => Ok(Shape::Circle),
            2 => Ok(Shape::Square),
            3 => Ok(Shape::Triangle),
            4 => Ok(Shape::Rectangle),
            5 => Ok(Shape::Pentagon),
            other => Err(DomainError::UnknownShape(other)),
        }
    }

    pub fn choice(&self) -> u8 {
        match self {
            Shape::Circle => 1,
            Shape::Square => 2,
            Shape::Triangle => 3,
            Shape::Rectangle => 4,
            Shape::Pentagon => 5,
        }
    }

    /// Menu label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Circle => "Círculo",
            Shape::Square => "Cuadrado",
            Shape::Triangle => "Triángulo",
            Shape::Rectangle => "Rectángulo",
            Shape::Pentagon => "Pentágono",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Rectangle => "rectangle",
            Shape::Pentagon => "pentagon",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationChoice {
    Area,
    Perimeter,
    Power,
}

impl OperationChoice {
    pub const ALL: [OperationChoice; 3] = [
        OperationChoice::Area,
        OperationChoice::Perimeter,
        OperationChoice::Power,
    ];

    pub fn from_choice(choice: u8) -> Result<Self, DomainError> {
        match choice {
            1 => Ok(OperationChoice::Area),
            2 => Ok(OperationChoice::Perimeter),
            3 => Ok(OperationChoice::Power),
            other => Err(DomainError::UnknownOperation(other)),
        }
    }

    pub fn choice(&self) -> u8 {
        match self {
            OperationChoice::Area => 1,
            OperationChoice::Perimeter => 2,
            OperationChoice::Power => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationChoice::Area => "Área",
            OperationChoice::Perimeter => "Perímetro",
            OperationChoice::Power => "Potencia",
        }
    }
}
