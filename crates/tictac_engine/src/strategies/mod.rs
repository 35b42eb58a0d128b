//! Strategies that need no console.

mod scripted;
mod simple_stupidity;

pub use scripted::ScriptedStrategy;
pub use simple_stupidity::SimpleStupidity;
