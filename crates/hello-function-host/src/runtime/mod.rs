//! Runtime module - function registration and dispatch

pub mod registry;

pub use registry::FunctionRegistry;
