//! Shared contracts between the TSX Optimizer frontend and the optimization endpoint.
//!
//! Everything here is plain data: no browser types, no I/O.

pub mod usecases;
