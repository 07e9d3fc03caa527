//! User-facing text. The calculator speaks Spanish.

pub const SHAPE_MENU_TITLE: &str = "Elige una figura:";
pub const OPERATION_MENU_TITLE: &str = "Elige una operación:";
pub const EXIT_OPTION: &str = "0. Salir";
pub const BACK_OPTION: &str = "0. Volver";
pub const OPTION_PROMPT: &str = "Opción: ";

pub const INVALID_OPTION: &str = "Por favor ingresa un número válido.";
pub const OPTION_OUT_OF_RANGE: &str = "Opción fuera de rango.";
pub const INVALID_NUMBER: &str = "Entrada inválida. Ingresa un número válido.";
pub const NOT_POSITIVE: &str = "El valor debe ser mayor que 0.";
pub const INVALID_INTEGER: &str = "Número inválido.";
pub const NEGATIVE_INTEGER: &str = "Debe ser 0 o mayor.";

pub const RESULT_PREFIX: &str = "Resultado: ";
pub const STORED_RESULTS_HEADER: &str = "Resultados almacenados:";
