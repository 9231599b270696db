pub mod prediction;
pub mod registry;
pub mod risk_calculator;

pub use prediction::*;
pub use registry::*;
pub use risk_calculator::*;
