// Chat command table

use crate::core::dispatcher::CommandContext;
use crate::core::error::CommandError;
use crate::handlers::{info, items, roles, roster, shortcuts, teleport, timers, uptime};
use crate::security::roles::Role;
use std::collections::HashMap;

/// Verb that saves and replays shortcuts; never allowed inside one
pub const SHORTCUT_VERB: &str = "s";

pub type Handler = fn(&mut CommandContext<'_>, &[String]) -> Result<(), CommandError>;

pub struct CommandSpec {
    pub verb: &'static str,
    pub aliases: &'static [&'static str],
    /// Minimum role needed to run the command
    pub role: Role,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

/// Verb and alias lookup over every chat command
pub struct CommandTable {
    specs: Vec<CommandSpec>,
    index: HashMap<&'static str, usize>,
}

impl CommandTable {
    pub fn new() -> Self {
        let specs = build_commands();
        let mut index = HashMap::with_capacity(specs.len() * 2);

        for (i, spec) in specs.iter().enumerate() {
            index.insert(spec.verb, i);
            for alias in spec.aliases {
                index.insert(*alias, i);
            }
        }

        Self { specs, index }
    }

    pub fn lookup(&self, verb: &str) -> Option<&CommandSpec> {
        self.index.get(verb).map(|&i| &self.specs[i])
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

fn build_commands() -> Vec<CommandSpec> {
    vec![
        // Operator commands
        CommandSpec {
            verb: "hop",
            aliases: &[],
            role: Role::Operator,
            usage: "hop <player>",
            summary: "make a player half-operator",
            handler: roles::hop_handler,
        },
        CommandSpec {
            verb: "dehop",
            aliases: &[],
            role: Role::Operator,
            usage: "dehop <player>",
            summary: "remove a player's half-operator role",
            handler: roles::dehop_handler,
        },
        CommandSpec {
            verb: "tpall",
            aliases: &[],
            role: Role::Operator,
            usage: "tpall",
            summary: "bring every online player to you",
            handler: teleport::teleport_all_handler,
        },

        // Half-operator commands
        CommandSpec {
            verb: "give",
            aliases: &["i"],
            role: Role::HalfOperator,
            usage: "give <item> [amount]",
            summary: "give yourself items, e.g. 2m for two stacks",
            handler: items::give_handler,
        },
        CommandSpec {
            verb: "kit",
            aliases: &[],
            role: Role::HalfOperator,
            usage: "kit <name>",
            summary: "give yourself a kit",
            handler: items::kit_handler,
        },
        CommandSpec {
            verb: "food",
            aliases: &[],
            role: Role::HalfOperator,
            usage: "food [amount]",
            summary: "give yourself food",
            handler: items::consumable_handler,
        },
        CommandSpec {
            verb: "tp",
            aliases: &["teleport"],
            role: Role::HalfOperator,
            usage: "tp <player>",
            summary: "teleport to a player",
            handler: teleport::teleport_handler,
        },
        CommandSpec {
            verb: "timer",
            aliases: &[],
            role: Role::HalfOperator,
            usage: "timer <item> [seconds]",
            summary: "receive an item every few seconds",
            handler: timers::timer_add_handler,
        },
        CommandSpec {
            verb: "untimer",
            aliases: &[],
            role: Role::HalfOperator,
            usage: "untimer <item>",
            summary: "stop an item timer",
            handler: timers::timer_remove_handler,
        },

        // Public commands
        CommandSpec {
            verb: "timers",
            aliases: &[],
            role: Role::Player,
            usage: "timers",
            summary: "list your item timers",
            handler: timers::timer_list_handler,
        },
        CommandSpec {
            verb: SHORTCUT_VERB,
            aliases: &[],
            role: Role::Player,
            usage: "s <label> [command ; command ...]",
            summary: "save a shortcut, or run it when no command is given",
            handler: shortcuts::shortcut_handler,
        },
        CommandSpec {
            verb: "shortcuts",
            aliases: &[],
            role: Role::Player,
            usage: "shortcuts",
            summary: "list your shortcuts",
            handler: shortcuts::shortcut_list_handler,
        },
        CommandSpec {
            verb: "uptime",
            aliases: &[],
            role: Role::Player,
            usage: "uptime [player]",
            summary: "how long a player has been online",
            handler: uptime::uptime_handler,
        },
        CommandSpec {
            verb: "list",
            aliases: &["who"],
            role: Role::Player,
            usage: "list",
            summary: "show who is online",
            handler: roster::list_handler,
        },
        CommandSpec {
            verb: "property",
            aliases: &["prop"],
            role: Role::Player,
            usage: "property <key>",
            summary: "show a server property",
            handler: info::property_handler,
        },
        CommandSpec {
            verb: "tick",
            aliases: &[],
            role: Role::Player,
            usage: "tick",
            summary: "show the current tick",
            handler: info::tick_handler,
        },
        CommandSpec {
            verb: "rules",
            aliases: &[],
            role: Role::Player,
            usage: "rules",
            summary: "show the server rules",
            handler: info::rules_handler,
        },
        CommandSpec {
            verb: "kits",
            aliases: &[],
            role: Role::Player,
            usage: "kits",
            summary: "list available kits",
            handler: info::kits_handler,
        },
        CommandSpec {
            verb: "help",
            aliases: &[],
            role: Role::Player,
            usage: "help",
            summary: "show this list",
            handler: info::help_handler,
        },
    ]
}
