//! Process exit codes.

pub const SUCCESS: i32 = 0;
/// The document given to `validate` is not a valid CPF or CNPJ.
pub const INVALID_DOCUMENT: i32 = 1;
/// Bad configuration or an internal failure.
pub const INTERNAL_ERROR: i32 = 2;
