// Public exports.
pub use scanner::{ScanError, ScanErrorReason, Scanner};
pub use token::{Position, Token, TokenValue};

// Public mods.
pub mod scanner;
pub mod token;
