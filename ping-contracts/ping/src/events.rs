use soroban_sdk::{Env, String};

use crate::manifest::PRINT;

pub struct Events;

impl Events {
    pub fn print(env: &Env, message: &str) {
        env.events().publish((PRINT,), String::from_str(env, message));
    }
}
