use crate::core::dispatcher::CommandContext;
use crate::core::error::CommandError;
use crate::utils::time::ticks_since;
use crate::validation::args::require;
use tracing::debug;

/// !property <key>
///
/// Unknown keys are silently ignored.
pub fn property_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let key = require(args, 0, "key")?;

    match ctx.state.properties.get(key) {
        Some(value) => ctx.out.info(ctx.user, format!("{} = {}", key, value)),
        None => debug!(user = ctx.user, key = %key, "Unknown property"),
    }
    Ok(())
}

/// !tick
pub fn tick_handler(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
    let ticks = ticks_since(ctx.state.started_at, ctx.now);
    ctx.out.info(ctx.user, format!("Current tick: {}", ticks));
    Ok(())
}

/// !rules
pub fn rules_handler(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
    let rules = &ctx.state.config.info.rules;

    if rules.is_empty() {
        ctx.out.info(ctx.user, "No rules have been set");
        return Ok(());
    }

    for (i, rule) in rules.iter().enumerate() {
        ctx.out.info(ctx.user, format!("{}. {}", i + 1, rule));
    }
    Ok(())
}

/// !kits
pub fn kits_handler(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
    let names = ctx.state.kits.names();

    let message = if names.is_empty() {
        "No kits are configured".to_string()
    } else {
        format!("Kits: {}", names.join(", "))
    };
    ctx.out.info(ctx.user, message);
    Ok(())
}

/// One line per command the requester is allowed to run
pub fn help_handler(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
    let prefix = ctx.prefix();
    let role = ctx.state.role_of(ctx.user);

    for spec in ctx.table().specs().iter().filter(|spec| spec.role <= role) {
        ctx.out.info(ctx.user, format!("{}{} - {}", prefix, spec.usage, spec.summary));
    }
    Ok(())
}
