use crate::console::batcher::grant;
use crate::console::Console;
use crate::core::commands::{CommandTable, SHORTCUT_VERB};
use crate::core::error::CommandError;
use crate::core::state::AppState;
use crate::models::shortcut::SavedCommand;
use crate::transport::log_line::ServerEvent;
use crate::utils::time::elapsed_minutes;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything a handler sees while running one command
pub struct CommandContext<'a> {
    pub state: &'a AppState,
    /// Requesting player
    pub user: &'a str,
    pub now: i64,
    pub out: &'a mut Console,
    table: &'a CommandTable,
    replaying: bool,
}

impl<'a> CommandContext<'a> {
    pub fn prefix(&self) -> &'a str {
        self.state.prefix()
    }

    pub fn table(&self) -> &'a CommandTable {
        self.table
    }

    /// Look up, authorize and run one command
    pub fn run(&mut self, verb: &str, args: &[String]) -> Result<(), CommandError> {
        let prefix = self.prefix();
        let spec = self
            .table
            .lookup(verb)
            .ok_or_else(|| CommandError::UnknownCommand(verb.to_string(), prefix.to_string()))?;

        if self.replaying && spec.verb == SHORTCUT_VERB {
            return Err(CommandError::NestedShortcut(format!("{}{}", prefix, verb)));
        }

        if self.state.role_of(self.user) < spec.role {
            warn!(user = self.user, verb = spec.verb, "Permission denied");
            return Err(CommandError::PermissionDenied(format!("{}{}", prefix, spec.verb)));
        }

        (spec.handler)(self, args).map_err(|err| match err {
            CommandError::Validation(reason) => CommandError::Malformed {
                reason: reason.to_string(),
                usage: format!("{}{}", prefix, spec.usage),
            },
            other => other,
        })
    }

    /// Run saved commands in order, stopping at the first failure
    pub fn replay(&mut self, commands: &[SavedCommand]) -> Result<(), CommandError> {
        let was_replaying = std::mem::replace(&mut self.replaying, true);
        let result = commands
            .iter()
            .try_for_each(|command| self.run(&command.verb, &command.args));
        self.replaying = was_replaying;
        result
    }
}

/// Routes chat commands and roster events to handlers over shared state
///
/// Callers must feed it one event at a time; every method runs to completion
/// and returns the console statements it produced.
pub struct Dispatcher {
    state: Arc<AppState>,
    table: CommandTable,
}

impl Dispatcher {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            table: CommandTable::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Handle a chat message. Messages without the command prefix produce nothing.
    pub fn handle_chat(&self, user: &str, message: &str, now: i64) -> Console {
        let Some(body) = message.trim().strip_prefix(self.state.prefix()) else {
            return Console::new();
        };

        let mut tokens = body.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Console::new();
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        self.dispatch(user, &verb.to_lowercase(), &args, now)
    }

    /// Run one command. Failures become a private notice for `user`.
    pub fn dispatch(&self, user: &str, verb: &str, args: &[String], now: i64) -> Console {
        let mut out = Console::new();

        let result = {
            let mut ctx = CommandContext {
                state: &self.state,
                user,
                now,
                out: &mut out,
                table: &self.table,
                replaying: false,
            };
            ctx.run(verb, args)
        };

        self.state.metrics.increment_handled();

        match result {
            Ok(()) => {
                debug!(user = user, verb = verb, lines = out.len(), "Command handled");
            }
            Err(err) => {
                self.state.metrics.increment_failed();
                info!(user = user, verb = verb, error = %err, "Command failed");
                out.push(err.into_notice(user));
            }
        }

        self.state.metrics.add_console_lines(out.len());
        out
    }

    /// Feed one parsed log event
    pub fn handle_event(&self, event: &ServerEvent, now: i64) -> Console {
        match event {
            ServerEvent::Chat { user, message } => self.handle_chat(user, message, now),
            ServerEvent::Joined { user } => {
                self.player_joined(user, now);
                Console::new()
            }
            ServerEvent::Left { user } => {
                self.player_left(user, now);
                Console::new()
            }
        }
    }

    pub fn player_joined(&self, user: &str, now: i64) {
        self.state.roster.connect(user, now);
        info!(user = user, online = self.state.roster.len(), "Player joined");
    }

    /// Close a session and fold its whole minutes into the uptime log
    pub fn player_left(&self, user: &str, now: i64) -> Option<i64> {
        let started = self.state.roster.disconnect(user)?;
        let minutes = elapsed_minutes(started, now);
        let total = self.state.uptime_log.record(user, minutes);

        info!(
            user = user,
            session_minutes = minutes,
            total_minutes = total,
            online = self.state.roster.len(),
            "Player left"
        );

        Some(minutes)
    }

    /// Grant every timer period elapsed since the previous call, one unit per period
    ///
    /// Calls with a `now` at or before the last one grant nothing.
    pub fn fire_timers(&self, now: i64) -> Console {
        let mut out = Console::new();

        let after = self.state.timers_fired_at.fetch_max(now, Ordering::Relaxed);
        if now <= after {
            return out;
        }

        let mut fired = 0;
        for (user, timer, periods) in self.state.timers.due(after, now) {
            if !self.state.roster.is_connected(&user) {
                continue;
            }
            out.extend(grant(&user, &timer.item, periods));
            fired += periods as usize;
        }

        if fired > 0 {
            debug!(grants = fired, window = now - after, "Timers fired");
            self.state.metrics.add_timer_grants(fired);
            self.state.metrics.add_console_lines(out.len());
        }

        out
    }
}
