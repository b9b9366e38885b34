use thiserror::Error;

/// Failure of a single command invocation.
///
/// Every variant maps to a user-facing reply via [`CommandError::user_message`];
/// none of these crash the process and none is retried.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invoker lacks the role(s) required by the command.
    #[error("user lacks the required role")]
    AccessDenied,

    /// Datetime option did not match the fixed `YYYY-MM-DD HH:MM` format.
    #[error("invalid datetime '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidDatetime(String),

    /// Link option is not a syntactically valid URL.
    #[error("'{0}' is not a valid URL")]
    InvalidUrl(String),

    /// Selected channel cannot receive messages.
    #[error("selected channel is not text-based")]
    NotTextChannel,

    /// Target channel could not be resolved from cache or the API.
    #[error("target channel could not be resolved")]
    ChannelUnavailable,

    /// The guild is missing from the gateway cache, so effective permissions
    /// cannot be computed.
    #[error("guild not present in cache")]
    GuildNotCached,

    /// Bot lacks send permissions in the target channel and has no
    /// MANAGE_CHANNELS to grant itself temporary access.
    #[error("bot missing permissions: {}", .0.join(", "))]
    MissingPermissions(Vec<&'static str>),

    /// Send call rejected by Discord. Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Discord(Box::new(err))
    }
}

impl CommandError {
    /// The reply shown to the invoking user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::AccessDenied => {
                "❌ You do not have permission to use this command.".to_string()
            }
            Self::InvalidDatetime(_) => {
                "❌ Invalid datetime format. Use YYYY-MM-DD HH:MM PST.".to_string()
            }
            Self::InvalidUrl(_) => "❌ The provided link is not a valid URL.".to_string(),
            Self::NotTextChannel => "❌ Please select a text channel.".to_string(),
            Self::ChannelUnavailable => {
                "❌ Channel not found or not a text channel.".to_string()
            }
            Self::GuildNotCached => {
                "❌ Could not send embed: guild is not available.".to_string()
            }
            Self::MissingPermissions(missing) => format!(
                "❌ Bot missing permissions in that channel: {}. Either give the bot those \
                 permissions or give it MANAGE_CHANNELS so it can temporarily grant itself \
                 access.",
                missing.join(", ")
            ),
            Self::Discord(err) => format!("❌ Could not send embed: {}", err),
        }
    }
}
