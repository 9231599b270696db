pub mod assessor;
pub mod forecast;
pub mod vault;

pub use assessor::*;
pub use forecast::*;
pub use vault::*;
