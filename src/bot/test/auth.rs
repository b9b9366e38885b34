use crate::bot::auth::{Access, RoleGate, DEFAULT_ROLE_LABEL};
use crate::config::Config;

fn test_config() -> Config {
    Config {
        discord_bot_token: "token".to_string(),
        discord_application_id: 1,
        guild_id: 2,
        admin_role_name: "The Administrator".to_string(),
        member_role_name: "Class - A".to_string(),
        events_channel_id: 3,
        ping_role_id: 4,
        port: 3000,
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Tests that the admin role grants full access.
#[test]
fn grants_admin_access() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    let roles = names(&["Some Role", "The Administrator"]);
    assert_eq!(gate.check(&roles), Access::Admin);
}

/// Tests that the member role grants member-level access.
#[test]
fn grants_member_access() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    let roles = names(&["Class - A"]);
    assert_eq!(gate.check(&roles), Access::Member);
}

/// Tests that admin wins when both gate roles are held.
#[test]
fn prefers_admin_over_member() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    let roles = names(&["Class - A", "The Administrator"]);
    assert_eq!(gate.check(&roles), Access::Admin);
    assert_eq!(gate.display_role(&roles), "The Administrator");
}

/// Tests that holding neither gate role is denied, including the empty set.
///
/// An uncached guild resolves to an empty role list, so the empty case is the
/// fail-closed path.
#[test]
fn denies_without_gate_roles() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    assert_eq!(gate.check(&names(&["Other Role"])), Access::Denied);
    assert_eq!(gate.check(&[]), Access::Denied);
}

/// Tests that role matching is exact, not a substring match.
#[test]
fn matches_role_names_exactly() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    assert_eq!(gate.check(&names(&["The Administrators"])), Access::Denied);
    assert_eq!(gate.check(&names(&["administrator"])), Access::Denied);
}

/// Tests the footer label resolution for each access level.
#[test]
fn resolves_display_role() {
    let config = test_config();
    let gate = RoleGate::from_config(&config);

    assert_eq!(
        gate.display_role(&names(&["The Administrator"])),
        "The Administrator"
    );
    assert_eq!(gate.display_role(&names(&["Class - A"])), "Class - A");
    assert_eq!(gate.display_role(&[]), DEFAULT_ROLE_LABEL);
}
