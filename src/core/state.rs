// Application state (AppState)

use crate::catalog::items::Catalog;
use crate::catalog::kits::KitTable;
use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::security::roles::{Role, RoleSet};
use crate::stores::{
    properties::PropertyTable, roster::Roster, shortcut_store::ShortcutStore,
    timer_store::TimerStore, uptime_log::UptimeLog,
};
use std::sync::atomic::AtomicI64;
use std::sync::Arc;

/// Shared state for one run of the processor
///
/// Catalog, kits and properties are fixed after startup. Everything else is
/// mutated only by the dispatcher, one command at a time.
#[derive(Clone)]
pub struct AppState {
    /// Item names and identifiers
    pub catalog: Arc<Catalog>,

    /// Named item bundles
    pub kits: Arc<KitTable>,

    /// Server properties snapshot
    pub properties: Arc<PropertyTable>,

    pub operators: Arc<RoleSet>,

    pub half_operators: Arc<RoleSet>,

    /// Connected players and their session start times
    pub roster: Arc<Roster>,

    /// Minutes from finished sessions
    pub uptime_log: Arc<UptimeLog>,

    pub timers: Arc<TimerStore>,

    pub shortcuts: Arc<ShortcutStore>,

    pub metrics: Arc<Metrics>,

    pub config: Arc<Config>,

    /// Last second timer grants were issued for
    pub timers_fired_at: Arc<AtomicI64>,

    /// Unix timestamp the processor started
    pub started_at: i64,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        properties: PropertyTable,
        started_at: i64,
    ) -> Self {
        let config = Arc::new(config);

        let operators = Arc::new(RoleSet::with_members(&config.roles.operators));
        let half_operators = Arc::new(RoleSet::with_members(&config.roles.half_operators));

        Self {
            catalog: Arc::new(catalog),
            kits: Arc::new(KitTable::new(&config.kits)),
            properties: Arc::new(properties),
            operators,
            half_operators,
            roster: Arc::new(Roster::new()),
            uptime_log: Arc::new(UptimeLog::new()),
            timers: Arc::new(TimerStore::new()),
            shortcuts: Arc::new(ShortcutStore::new()),
            metrics: Arc::new(Metrics::new(started_at)),
            config,
            timers_fired_at: Arc::new(AtomicI64::new(started_at)),
            started_at,
        }
    }

    /// Highest role a player holds
    pub fn role_of(&self, name: &str) -> Role {
        if self.operators.contains(name) {
            Role::Operator
        } else if self.half_operators.contains(name) {
            Role::HalfOperator
        } else {
            Role::Player
        }
    }

    pub fn prefix(&self) -> &str {
        &self.config.server.command_prefix
    }
}
