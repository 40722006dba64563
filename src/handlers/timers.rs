use crate::core::dispatcher::CommandContext;
use crate::core::error::{CommandError, ValidationError};
use crate::core::state::AppState;
use crate::models::timer::Timer;
use crate::validation::args::{split_item_args, ItemArgs};
use tracing::info;

fn item_label(state: &AppState, item: &str) -> String {
    state.catalog.name_of(item).unwrap_or(item).to_string()
}

/// Receive one item every few seconds
///
/// !timer <item phrase> [seconds]
pub fn timer_add_handler(
    ctx: &mut CommandContext<'_>,
    args: &[String],
) -> Result<(), CommandError> {
    let state = ctx.state;
    let default_frequency = state.config.timers.default_frequency;

    let ItemArgs { phrase, quantity: frequency } = split_item_args(default_frequency, args)?;
    if frequency == 0 {
        let reason = "timer frequency must be at least 1 second".to_string();
        return Err(ValidationError::InvalidFormat(reason).into());
    }

    let item = state.catalog.resolve(&phrase)?;
    let label = item_label(state, &item);
    let replaced = state.timers.set(ctx.user, Timer::new(item.clone(), frequency, ctx.now));

    info!(user = ctx.user, item = %item, frequency = frequency, "Timer set");

    let message = match replaced {
        Some(old) => format!(
            "Timer for {} changed from every {}s to every {}s",
            label, old.frequency, frequency
        ),
        None => format!("You will receive {} every {}s", label, frequency),
    };
    ctx.out.info(ctx.user, message);
    Ok(())
}

/// !untimer <item phrase>
pub fn timer_remove_handler(
    ctx: &mut CommandContext<'_>,
    args: &[String],
) -> Result<(), CommandError> {
    let state = ctx.state;
    if args.is_empty() {
        return Err(ValidationError::MissingParameter("item".to_string()).into());
    }

    let item = state.catalog.resolve(&args.join(" "))?;
    let label = item_label(state, &item);

    let message = match state.timers.remove(ctx.user, &item) {
        Some(_) => {
            info!(user = ctx.user, item = %item, "Timer removed");
            format!("Timer for {} removed", label)
        }
        None => format!("You have no timer for {}", label),
    };
    ctx.out.info(ctx.user, message);
    Ok(())
}

/// !timers
pub fn timer_list_handler(
    ctx: &mut CommandContext<'_>,
    _args: &[String],
) -> Result<(), CommandError> {
    let state = ctx.state;
    let timers = state.timers.list(ctx.user);

    if timers.is_empty() {
        ctx.out.info(ctx.user, "You have no timers");
        return Ok(());
    }

    let rendered: Vec<String> = timers
        .iter()
        .map(|timer| format!("{} every {}s", item_label(state, &timer.item), timer.frequency))
        .collect();
    ctx.out.info(ctx.user, format!("Timers: {}", rendered.join(", ")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::dispatcher::tests::{create_test_dispatcher, is_error, texts, NOW};

    #[test]
    fn test_add_with_default_frequency() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Jeb", "!timer diamond", NOW);
        assert_eq!(texts(&out), vec!["You will receive diamond every 30s".to_string()]);

        let timers = dispatcher.state().timers.list("Jeb");
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].item, "264");
        assert_eq!(timers[0].frequency, 30);
    }

    #[test]
    fn test_add_replaces_frequency() {
        let dispatcher = create_test_dispatcher();

        dispatcher.handle_chat("Jeb", "!timer diamond", NOW);
        let out = dispatcher.handle_chat("Jeb", "!timer diam 90", NOW);
        assert_eq!(
            texts(&out),
            vec!["Timer for diamond changed from every 30s to every 90s".to_string()]
        );
        assert_eq!(dispatcher.state().timers.list("Jeb")[0].frequency, 90);
    }

    #[test]
    fn test_add_unknown_item() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Jeb", "!timer unobtainium", NOW);
        assert!(is_error(&out));
        assert!(dispatcher.state().timers.list("Jeb").is_empty());
    }

    #[test]
    fn test_add_zero_frequency() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Jeb", "!timer diamond 0", NOW);
        assert!(is_error(&out));
        assert!(dispatcher.state().timers.list("Jeb").is_empty());
    }

    #[test]
    fn test_remove() {
        let dispatcher = create_test_dispatcher();
        dispatcher.handle_chat("Jeb", "!timer torch 10", NOW);

        let out = dispatcher.handle_chat("Jeb", "!untimer torch", NOW);
        assert_eq!(texts(&out), vec!["Timer for torch removed".to_string()]);

        let out = dispatcher.handle_chat("Jeb", "!untimer torch", NOW);
        assert!(!is_error(&out));
        assert_eq!(texts(&out), vec!["You have no timer for torch".to_string()]);
    }

    #[test]
    fn test_list() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!timers", NOW);
        assert_eq!(texts(&out), vec!["You have no timers".to_string()]);

        dispatcher.handle_chat("Jeb", "!timer torch 10", NOW);
        dispatcher.handle_chat("Jeb", "!timer diamond", NOW);
        let out = dispatcher.handle_chat("Jeb", "!timers", NOW);
        assert_eq!(
            texts(&out),
            vec!["Timers: diamond every 30s, torch every 10s".to_string()]
        );
    }
}
