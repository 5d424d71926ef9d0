pub mod crop;
pub mod environment;
pub mod plant;

pub use crop::*;
pub use environment::*;
pub use plant::*;
