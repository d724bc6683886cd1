mod error;
mod monoid;
mod policy;

pub use error::{Error, Result};
pub use monoid::{LazyMonoid, Monoid};
pub use policy::{I64Max, I64Min, I64Sum, MinAdd, SumAdd, SumAssign};
