//! The data model: arguments, attacks and the indexed framework.

mod argument;
mod attack;
mod framework;
mod label;
mod semantics;

pub use argument::{Argument, ArgumentSet};
pub use attack::Attack;
pub use framework::Framework;
pub use label::Label;
pub use semantics::{Problem, Semantics, Task};
