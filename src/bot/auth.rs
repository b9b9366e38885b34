//! Role-based command gating.
//!
//! Commands are gated on role *names* within the configured guild. The
//! invoking member's role IDs arrive with the interaction; names are resolved
//! through the gateway cache so no extra API round trip is needed.

use serenity::all::{Context, GuildId, Member};

use crate::config::Config;

/// Fallback role label when the invoker holds neither gate role.
pub const DEFAULT_ROLE_LABEL: &str = "Member";

/// Access level granted by a member's roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Holds the admin role. Passes every gate.
    Admin,
    /// Holds the member role but not the admin role.
    Member,
    /// Holds neither gate role.
    Denied,
}

/// The two role names an invocation is checked against.
pub struct RoleGate<'a> {
    admin_role: &'a str,
    member_role: &'a str,
}

impl<'a> RoleGate<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            admin_role: &config.admin_role_name,
            member_role: &config.member_role_name,
        }
    }

    /// Classifies a member by the gate roles present in `role_names`.
    pub fn check(&self, role_names: &[String]) -> Access {
        if role_names.iter().any(|name| name == self.admin_role) {
            Access::Admin
        } else if role_names.iter().any(|name| name == self.member_role) {
            Access::Member
        } else {
            Access::Denied
        }
    }

    /// The role label shown for the invoker in announcement footers.
    ///
    /// Prefers the admin role, then the member role, then a generic label.
    pub fn display_role(&self, role_names: &[String]) -> &'a str {
        match self.check(role_names) {
            Access::Admin => self.admin_role,
            Access::Member => self.member_role,
            Access::Denied => DEFAULT_ROLE_LABEL,
        }
    }
}

/// Resolves the names of a member's roles from the gateway cache.
///
/// Roles missing from the cache are skipped; an uncached guild yields an
/// empty list, which fails every gate closed.
pub fn member_role_names(ctx: &Context, guild_id: GuildId, member: &Member) -> Vec<String> {
    let Some(guild) = ctx.cache.guild(guild_id) else {
        tracing::warn!("Guild {} not in cache during role resolution", guild_id);
        return Vec::new();
    };

    member
        .roles
        .iter()
        .filter_map(|role_id| guild.roles.get(role_id).map(|role| role.name.clone()))
        .collect()
}
