//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs with synchronous transitions. Pages wrap
//! them in `RwSignal`s; tests drive them directly.

pub mod signup;
