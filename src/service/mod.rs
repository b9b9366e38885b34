//! Services shared across command handlers.

pub mod delivery;

#[cfg(test)]
mod test;
