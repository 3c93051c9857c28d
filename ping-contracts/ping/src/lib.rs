#![no_std]
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

mod events;
pub mod manifest;

use events::Events;

contractmeta!(key = "Description", val = "Answers every ping with Pong");
contractmeta!(key = "Actions", val = "ping");

#[contract]
pub struct PingContract;

#[contractimpl]
impl PingContract {
    /// Prints `Pong` on the host output channel.
    ///
    /// The receiver is accepted as dispatched and not validated.
    pub fn ping(env: Env, receiver: Address) {
        #[cfg(feature = "logging")]
        {
            use soroban_sdk::log;
            log!(&env, "ping received", receiver);
        }
        #[cfg(not(feature = "logging"))]
        let _ = receiver;

        Events::print(&env, manifest::PONG);
    }
}
