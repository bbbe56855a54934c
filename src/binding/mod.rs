//! Dynamic binding support for execution contexts.
//!
//! Bindings pushed here shadow a var's root without modifying it, and
//! are visible only through the context that owns the stack.

mod frame;

pub use frame::{BindingStack, Frame};
