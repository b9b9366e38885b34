//! Discord bot integration.
//!
//! The bot serves a single guild. It registers its three slash commands
//! guild-scoped once the gateway connection is ready, then dispatches each
//! command interaction to a handler in [`handler`]. Invocations are handled
//! independently; no state is shared across them beyond the read-only
//! [`crate::config::Config`].
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel cache used for permission math
//! - `GUILD_MESSAGES` - Follow-up messages collected during the relay flow
//! - `GUILD_MEMBERS` - Member role data for command gating (privileged intent)
//! - `MESSAGE_CONTENT` - Content of collected relay messages (privileged
//!   intent)
//!
//! Privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod auth;
pub mod commands;
pub mod handler;
pub mod start;

#[cfg(test)]
mod test;
