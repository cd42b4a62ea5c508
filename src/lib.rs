pub mod cli;
pub mod commands;
pub mod config;
pub mod grpc;
pub mod logging;
pub mod proto;
pub mod server;
pub mod simplify;
pub mod view;

pub use grpc::{Completion, Endpoint, RequestInvoker, Transport};
pub use simplify::{DebtGraph, ExpenseSimplifier, Transaction};
pub use view::App;
