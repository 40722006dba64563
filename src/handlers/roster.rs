use crate::core::dispatcher::CommandContext;
use crate::core::error::CommandError;
use crate::core::state::AppState;

/// Connected players joined by commas, with role sigils and the requester bracketed
///
/// Operators carry `@`, half-operators `%`. Returns `None` when nobody is online.
pub fn render_roster(state: &AppState, requester: &str) -> Option<String> {
    let names = state.roster.names();
    if names.is_empty() {
        return None;
    }

    let rendered: Vec<String> = names
        .iter()
        .map(|name| {
            let mut label = String::new();
            if state.operators.contains(name) {
                label.push('@');
            }
            if state.half_operators.contains(name) {
                label.push('%');
            }
            label.push_str(name);

            if name == requester {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    Some(format!("Online ({}): {}", names.len(), rendered.join(", ")))
}

/// !list
pub fn list_handler(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
    let message =
        render_roster(ctx.state, ctx.user).unwrap_or_else(|| "Nobody is online".to_string());
    ctx.out.info(ctx.user, message);
    Ok(())
}
