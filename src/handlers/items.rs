use crate::console::batcher::grant;
use crate::core::dispatcher::CommandContext;
use crate::core::error::{CommandError, ValidationError};
use crate::validation::args::{require, split_item_args, ItemArgs};
use crate::validation::quantity::{is_quantifier, parse_quantity};
use tracing::{info, warn};

/// Give the requester an item
///
/// !give <item phrase> [quantity]
pub fn give_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let ItemArgs { phrase, quantity } = split_item_args(1, args)?;
    let item = ctx.state.catalog.resolve(&phrase)?;

    let statements = grant(ctx.user, &item, quantity);

    info!(
        user = ctx.user,
        phrase = %phrase,
        item = %item,
        quantity = quantity,
        lines = statements.len(),
        "Item granted"
    );

    ctx.out.extend(statements);
    Ok(())
}

/// Give the requester every entry of a named kit
///
/// !kit <name>
pub fn kit_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let state = ctx.state;
    let user = ctx.user;
    let name = require(args, 0, "kit")?;

    let entries = state.kits.get(name).ok_or_else(|| CommandError::UnknownKit {
        name: name.to_string(),
        available: state.kits.names().join(", "),
    })?;

    // A bad entry is reported but does not stop the rest of the kit
    for entry in entries {
        match state.catalog.resolve(entry.item()) {
            Ok(item) => ctx.out.extend(grant(user, &item, entry.quantity())),
            Err(err) => {
                warn!(kit = %name, item = %entry.item(), "Kit entry does not resolve");
                ctx.out.push(CommandError::from(err).into_notice(user));
            }
        }
    }

    info!(user = user, kit = %name, entries = entries.len(), "Kit granted");
    Ok(())
}

/// Give the requester the configured consumable
///
/// !food [quantity]
pub fn consumable_handler(
    ctx: &mut CommandContext<'_>,
    args: &[String],
) -> Result<(), CommandError> {
    let state = ctx.state;
    let consumable = &state.config.consumable;

    let quantity = match args.first() {
        None => consumable.quantity,
        Some(token) if is_quantifier(token) => parse_quantity(token),
        Some(token) => {
            let reason = format!("'{}' is not an amount", token);
            return Err(ValidationError::InvalidFormat(reason).into());
        }
    };

    let item = state.catalog.resolve(&consumable.item)?;
    ctx.out.extend(grant(ctx.user, &item, quantity));

    info!(user = ctx.user, item = %item, quantity = quantity, "Consumable granted");
    Ok(())
}
