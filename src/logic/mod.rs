pub mod financial;
pub mod modifier;
pub mod yields;

pub use financial::*;
pub use modifier::*;
pub use yields::*;
