//! Names the contract exports to the host.
//!
//! The interface description itself is emitted by `#[contractimpl]` at build
//! time; this module is the single place the action names are spelled out.

use soroban_sdk::{symbol_short, Symbol};

/// Action name of [`crate::PingContract::ping`].
pub const PING: Symbol = symbol_short!("ping");

/// Topic of the event carrying printed output.
pub const PRINT: Symbol = symbol_short!("print");

/// Message written by every ping.
pub const PONG: &str = "Pong";

/// Every action the contract exports, in declaration order.
pub const ACTIONS: [Symbol; 1] = [PING];
