use crate::core::dispatcher::CommandContext;
use crate::core::error::CommandError;
use crate::validation::args::require;
use tracing::info;

/// Grant the half-operator role
///
/// !hop <player>
pub fn hop_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let target = require(args, 0, "player")?;
    let name = ctx.state.roster.find(target).unwrap_or_else(|| target.to_string());

    let changed = ctx.state.half_operators.grant(&name);

    info!(by = ctx.user, player = %name, changed = changed, "Half-operator granted");

    ctx.out.say(format!("{} is now a half-operator", name));
    Ok(())
}

/// Revoke the half-operator role
///
/// !dehop <player>
pub fn dehop_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let target = require(args, 0, "player")?;
    let name = ctx.state.roster.find(target).unwrap_or_else(|| target.to_string());

    let changed = ctx.state.half_operators.revoke(&name);

    info!(by = ctx.user, player = %name, changed = changed, "Half-operator revoked");

    ctx.out.say(format!("{} is no longer a half-operator", name));
    Ok(())
}
