use crate::console::statement::Statement;
use crate::core::dispatcher::CommandContext;
use crate::core::error::{CommandError, ValidationError};
use crate::validation::args::require;
use tracing::info;

fn teleport(subject: &str, destination: &str) -> Statement {
    Statement::Teleport {
        subject: subject.to_string(),
        destination: destination.to_string(),
    }
}

/// Move the requester to another connected player
///
/// !tp <player>
pub fn teleport_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let requested = require(args, 0, "player")?;
    let target = ctx
        .state
        .roster
        .find(requested)
        .ok_or_else(|| CommandError::NotOnline(requested.to_string()))?;

    if target == ctx.user {
        let reason = "you cannot teleport to yourself".to_string();
        return Err(ValidationError::InvalidFormat(reason).into());
    }

    info!(user = ctx.user, target = %target, "Teleport");
    ctx.out.push(teleport(ctx.user, &target));
    Ok(())
}

/// Bring every other connected player to the requester
///
/// !tpall
pub fn teleport_all_handler(
    ctx: &mut CommandContext<'_>,
    _args: &[String],
) -> Result<(), CommandError> {
    let user = ctx.user;
    let others: Vec<String> = ctx
        .state
        .roster
        .names()
        .into_iter()
        .filter(|name| name != user)
        .collect();

    if others.is_empty() {
        ctx.out.info(user, "Nobody else is online");
        return Ok(());
    }

    info!(user = user, players = others.len(), "Teleport all");
    ctx.out.extend(others.iter().map(|name| teleport(name, user)));
    Ok(())
}
