use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration, read once at startup from the environment.
///
/// All values are fixed for the lifetime of the process. The bot serves a
/// single guild; role gates are matched by role *name* within that guild.
pub struct Config {
    pub discord_bot_token: String,
    pub discord_application_id: u64,
    pub guild_id: u64,

    /// Role required for `/scrole`; also satisfies the `/eventnc` and
    /// `/ifevent` gates.
    pub admin_role_name: String,
    /// Second role accepted by the `/eventnc` and `/ifevent` gates.
    pub member_role_name: String,

    /// Fixed destination channel for `/ifevent` announcements.
    pub events_channel_id: u64,
    /// Role mentioned (spoiler-wrapped) above `/ifevent` announcements.
    pub ping_role_id: u64,

    /// Port for the keep-alive HTTP endpoint.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            discord_application_id: require_u64("DISCORD_APPLICATION_ID")?,
            guild_id: require_u64("GUILD_ID")?,
            admin_role_name: require("ADMIN_ROLE_NAME")?,
            member_role_name: require("MEMBER_ROLE_NAME")?,
            events_channel_id: require_u64("EVENTS_CHANNEL_ID")?,
            ping_role_id: require_u64("PING_ROLE_ID")?,
            port: match std::env::var("PORT") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    let value = require(name)?;
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
