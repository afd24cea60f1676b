//! Application layer services orchestrating the domain transforms.

pub mod services;
