//! Command implementations.

pub mod alert;
pub mod dictionary;
pub mod load;
pub mod resolve;
pub mod types;

pub use self::alert::execute_alert;
pub use self::dictionary::execute_dictionary;
pub use self::load::execute_load;
pub use self::resolve::execute_resolve;
pub use self::types::execute_types;
