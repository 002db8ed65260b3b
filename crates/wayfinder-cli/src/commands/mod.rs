//! Command implementations.

pub mod authorities;
pub mod classify;
pub mod evidence;
pub mod generate;
pub mod journey;
pub mod readability;
pub mod route;

pub use self::authorities::execute_authorities;
pub use self::classify::execute_classify;
pub use self::evidence::execute_evidence;
pub use self::generate::execute_generate;
pub use self::journey::execute_journey;
pub use self::readability::execute_readability;
pub use self::route::execute_route;
