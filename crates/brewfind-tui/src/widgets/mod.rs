//! Reusable widget helpers shared by screens.

pub mod selector;
