use crate::core::dispatcher::CommandContext;
use crate::core::error::CommandError;
use crate::core::state::AppState;
use crate::utils::time::elapsed_minutes;

fn minutes(n: i64) -> String {
    if n == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", n)
    }
}

/// Describe how long `name` has played, counting whole minutes
pub fn uptime_report(state: &AppState, name: &str, now: i64) -> Result<String, CommandError> {
    let session = state
        .roster
        .session_start(name)
        .map(|started| elapsed_minutes(started, now));
    let history = state.uptime_log.total(name);

    match (session, history) {
        (Some(current), Some(logged)) => Ok(format!(
            "{} has been online for {} ({} in total)",
            name,
            minutes(current),
            minutes(current + logged)
        )),
        (Some(current), None) => {
            Ok(format!("{} has been online for {}", name, minutes(current)))
        }
        (None, Some(logged)) => {
            Ok(format!("{} is offline and has logged {}", name, minutes(logged)))
        }
        (None, None) => Err(CommandError::UnknownUser(name.to_string())),
    }
}

/// !uptime [player]
pub fn uptime_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let requested = args.first().map(String::as_str).unwrap_or(ctx.user);
    let name = ctx
        .state
        .roster
        .find(requested)
        .or_else(|| ctx.state.uptime_log.find(requested))
        .unwrap_or_else(|| requested.to_string());

    let report = uptime_report(ctx.state, &name, ctx.now)?;
    ctx.out.info(ctx.user, report);
    Ok(())
}
