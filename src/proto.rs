// Generated protobuf types and gRPC stubs for the DebtSimplifier service

#![allow(clippy::derive_partial_eq_without_eq)]

tonic::include_proto!("debt_simpl");

pub use debt_simplifier_client::DebtSimplifierClient;
pub use debt_simplifier_server::{DebtSimplifier, DebtSimplifierServer};
