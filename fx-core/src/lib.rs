#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for the currency conversion service.
///
/// This module contains the rate table, the converter, the operation log, and
/// the value types they exchange. The models carry the service's invariants
/// (normalized currency codes, positive rates, rounding policy, append-only
/// ordering) so that adapters and boundaries can stay thin.
pub mod models;

/// Interface traits for composing the service.
///
/// These traits define the contract between the domain components and the
/// boundary that serves them, without fixing how the components are shared or
/// constructed. The runnable application and the boundary's tests each provide
/// their own implementation.
pub mod ports;
