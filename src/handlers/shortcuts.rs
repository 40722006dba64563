use crate::core::commands::SHORTCUT_VERB;
use crate::core::dispatcher::CommandContext;
use crate::core::error::{CommandError, ValidationError};
use crate::models::shortcut::SavedCommand;
use crate::validation::args::require;
use tracing::{debug, info};

/// Split `cmd args ; cmd args` into saved commands, checking each verb exists
fn parse_sequence(
    ctx: &CommandContext<'_>,
    label: &str,
    tokens: &[String],
) -> Result<Vec<SavedCommand>, CommandError> {
    let prefix = ctx.prefix();
    let mut commands = Vec::new();

    for segment in tokens.split(|token| token == ";") {
        let Some((verb, args)) = segment.split_first() else {
            continue;
        };
        let verb = verb.strip_prefix(prefix).unwrap_or(verb).to_lowercase();

        let spec = ctx
            .table()
            .lookup(&verb)
            .ok_or_else(|| CommandError::UnknownCommand(verb.clone(), prefix.to_string()))?;
        if spec.verb == SHORTCUT_VERB {
            return Err(CommandError::NestedShortcut(label.to_string()));
        }

        commands.push(SavedCommand::new(verb, args.to_vec()));
    }

    if commands.is_empty() {
        return Err(ValidationError::MissingParameter("command".to_string()).into());
    }

    Ok(commands)
}

/// Save a shortcut, or run it when only the label is given
///
/// !s <label> [command ; command ...]
pub fn shortcut_handler(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
    let state = ctx.state;
    let user = ctx.user;
    let label = require(args, 0, "label")?;
    let body = &args[1..];

    if body.is_empty() {
        let commands = state
            .shortcuts
            .get(user, label)
            .ok_or_else(|| CommandError::UnknownShortcut(label.to_string()))?;

        debug!(user = user, label = %label, commands = commands.len(), "Running shortcut");
        return ctx.replay(&commands);
    }

    let commands = parse_sequence(ctx, label, body)?;
    let count = commands.len();
    let replaced = state.shortcuts.save(user, label, commands);

    info!(user = user, label = %label, commands = count, replaced = replaced, "Shortcut saved");

    let noun = if count == 1 { "command" } else { "commands" };
    ctx.out.info(user, format!("Saved shortcut '{}' ({} {})", label, count, noun));
    Ok(())
}

/// !shortcuts
pub fn shortcut_list_handler(
    ctx: &mut CommandContext<'_>,
    _args: &[String],
) -> Result<(), CommandError> {
    let labels = ctx.state.shortcuts.labels(ctx.user);

    let message = if labels.is_empty() {
        "You have no shortcuts".to_string()
    } else {
        format!("Shortcuts: {}", labels.join(", "))
    };
    ctx.out.info(ctx.user, message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::dispatcher::tests::{create_test_dispatcher, is_error, texts, NOW};
    use crate::models::shortcut::SavedCommand;

    #[test]
    fn test_define_then_invoke() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Jeb", "!s gear give diamond 2 ; !tp Steve", NOW);
        assert_eq!(texts(&out), vec!["Saved shortcut 'gear' (2 commands)".to_string()]);

        let saved = dispatcher.state().shortcuts.get("Jeb", "gear").unwrap();
        assert_eq!(
            saved,
            vec![
                SavedCommand::new("give", vec!["diamond".to_string(), "2".to_string()]),
                SavedCommand::new("tp", vec!["Steve".to_string()]),
            ]
        );

        let out = dispatcher.handle_chat("Jeb", "!s gear", NOW);
        assert_eq!(
            out.lines(),
            vec!["give Jeb 264 2".to_string(), "tp Jeb Steve".to_string()]
        );
    }

    #[test]
    fn test_redefine_overwrites() {
        let dispatcher = create_test_dispatcher();

        dispatcher.handle_chat("Jeb", "!s x give diamond", NOW);
        dispatcher.handle_chat("Jeb", "!s x give torch", NOW);

        let out = dispatcher.handle_chat("Jeb", "!s x", NOW);
        assert_eq!(out.lines(), vec!["give Jeb 50 1".to_string()]);
    }

    #[test]
    fn test_invoke_unknown() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!s home", NOW);
        assert_eq!(texts(&out), vec!["You have no shortcut named 'home'".to_string()]);
    }

    #[test]
    fn test_shortcuts_are_per_user() {
        let dispatcher = create_test_dispatcher();
        dispatcher.handle_chat("Jeb", "!s gear give diamond", NOW);

        let out = dispatcher.handle_chat("Steve", "!s gear", NOW);
        assert!(is_error(&out));
    }

    #[test]
    fn test_cannot_nest_shortcuts() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!s loop s loop", NOW);
        assert!(is_error(&out));
        assert!(dispatcher.state().shortcuts.get("Steve", "loop").is_none());
    }

    #[test]
    fn test_replay_refuses_stored_shortcut_verb() {
        let dispatcher = create_test_dispatcher();
        let state = dispatcher.state();

        // Bypasses the check made when a shortcut is saved
        state.shortcuts.save(
            "Steve",
            "loop",
            vec![
                SavedCommand::new("uptime", vec![]),
                SavedCommand::new("s", vec!["loop".to_string()]),
            ],
        );

        let out = dispatcher.handle_chat("Steve", "!s loop", NOW);
        assert_eq!(
            texts(&out),
            vec![
                "Steve has been online for 0 minutes".to_string(),
                "Shortcuts cannot run other shortcuts (!s)".to_string(),
            ]
        );
        assert!(is_error(&out));
    }

    #[test]
    fn test_unknown_verb_rejected_at_definition() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!s fly fly high", NOW);
        assert_eq!(texts(&out), vec!["Unknown command 'fly'. Try !help".to_string()]);
        assert!(dispatcher.state().shortcuts.labels("Steve").is_empty());
    }

    #[test]
    fn test_replay_checks_permissions() {
        let dispatcher = create_test_dispatcher();

        // Saving is allowed, running a command above your role is not
        dispatcher.handle_chat("Steve", "!s gear give diamond", NOW);
        let out = dispatcher.handle_chat("Steve", "!s gear", NOW);
        assert_eq!(texts(&out), vec!["You do not have permission to use !give".to_string()]);
    }

    #[test]
    fn test_replay_stops_at_first_failure() {
        let dispatcher = create_test_dispatcher();

        dispatcher.handle_chat("Jeb", "!s gear give unobtainium ; give diamond", NOW);
        let out = dispatcher.handle_chat("Jeb", "!s gear", NOW);
        assert_eq!(out.len(), 1);
        assert_eq!(texts(&out), vec!["No such item: unobtainium".to_string()]);
    }

    #[test]
    fn test_only_separators_is_missing_command() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!s empty ; ;", NOW);
        assert!(texts(&out)[0].starts_with("Missing required argument: command"));
    }

    #[test]
    fn test_list() {
        let dispatcher = create_test_dispatcher();

        let out = dispatcher.handle_chat("Steve", "!shortcuts", NOW);
        assert_eq!(texts(&out), vec!["You have no shortcuts".to_string()]);

        dispatcher.handle_chat("Steve", "!s up uptime", NOW);
        dispatcher.handle_chat("Steve", "!s at list", NOW);
        let out = dispatcher.handle_chat("Steve", "!shortcuts", NOW);
        assert_eq!(texts(&out), vec!["Shortcuts: at, up".to_string()]);
    }
}
