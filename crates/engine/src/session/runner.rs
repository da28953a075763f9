//! Interactive point-buy session.
//!
//! Wraps an [`AttributeEngine`] with the draft store and clock ports and turns
//! parsed [`Command`]s into text replies.

use std::fmt::Write as _;
use std::sync::Arc;

use pointbuy_domain::{
    AttributeEngine, DeltaOutcome, ModifierKind, PointBuyError, CUSTOM_ID, DEFAULT_SYSTEM_ID,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, DraftStore, DraftStoreError};
use crate::infrastructure::TracingObserver;
use crate::session::command::{Command, CommandError, HELP};

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Domain(#[from] PointBuyError),
    #[error(transparent)]
    Store(#[from] DraftStoreError),
    #[error("No saved draft")]
    NoDraft,
    #[error("Saved draft is {days} days old; use 'load force' to restore it anyway")]
    StaleDraft { days: i64 },
}

pub struct Session {
    engine: AttributeEngine,
    store: Arc<dyn DraftStore>,
    clock: Arc<dyn ClockPort>,
    rng: StdRng,
}

impl Session {
    pub fn new(
        engine: AttributeEngine,
        store: Arc<dyn DraftStore>,
        clock: Arc<dyn ClockPort>,
        rng: StdRng,
    ) -> Self {
        Self {
            engine,
            store,
            clock,
            rng,
        }
    }

    /// Build a session with every built-in system registered, the custom
    /// system configured and the default system selected.
    ///
    /// Invalid custom settings keep the built-in custom defaults, and an
    /// unknown default system falls back to D&D 5e.
    pub fn from_config(
        config: &EngineConfig,
        store: Arc<dyn DraftStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, SessionError> {
        let mut engine = AttributeEngine::with_builtin_systems()?;
        engine.subscribe(TracingObserver);

        if let Err(err) =
            engine.configure_custom(config.custom_min, config.custom_max, config.custom_budget)
        {
            tracing::warn!(error = %err, "Invalid custom system settings, using defaults");
        }
        if let Err(err) = engine.select_system(&config.default_system) {
            tracing::warn!(
                error = %err,
                fallback = DEFAULT_SYSTEM_ID,
                "Default system not available, falling back"
            );
            engine.select_system(DEFAULT_SYSTEM_ID)?;
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::new(engine, store, clock, rng))
    }

    pub fn engine(&self) -> &AttributeEngine {
        &self.engine
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, SessionError> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, SessionError> {
        let text = match command {
            Command::Systems => self.render_systems(),
            Command::Select(system_id) => {
                self.engine.select_system(&system_id)?;
                self.render_status()
            }
            Command::Custom {
                min_value,
                max_value,
                point_budget,
            } => {
                self.engine
                    .configure_custom(min_value, max_value, point_budget)?;
                self.engine.select_system(CUSTOM_ID)?;
                self.render_status()
            }
            Command::Delta { attribute, step } => {
                let outcome = self.engine.apply_delta(attribute, step);
                format!("{}\n{}", describe_outcome(&outcome), self.render_status())
            }
            Command::Reset => {
                self.engine.reset_to_minimum();
                self.render_status()
            }
            Command::Default => {
                self.engine.reset_to_default();
                self.render_status()
            }
            Command::Random => {
                self.engine.generate_random_valid_distribution(&mut self.rng);
                self.render_status()
            }
            Command::Show => self.render_status(),
            Command::Save => {
                let draft = self.engine.snapshot(self.clock.now());
                self.store.save(&draft)?;
                format!(
                    "Draft saved ({} at {})",
                    draft.system_id(),
                    draft.saved_at().format("%Y-%m-%d %H:%M UTC")
                )
            }
            Command::Load { force } => self.load_draft(force)?,
            Command::Clear => {
                self.store.clear()?;
                "Draft cleared".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn load_draft(&mut self, force: bool) -> Result<String, SessionError> {
        let draft = self.store.load()?.ok_or(SessionError::NoDraft)?;
        let now = self.clock.now();
        if draft.is_stale(now) && !force {
            let days = draft.age(now).num_days();
            tracing::info!(days, "Refusing stale draft without confirmation");
            return Err(SessionError::StaleDraft { days });
        }
        self.engine.restore(&draft)?;

        let mut text = format!(
            "Restored draft saved {}",
            draft.saved_at().format("%Y-%m-%d %H:%M UTC")
        );
        if draft.is_stale(now) {
            text.push_str(" (older than a week)");
        }
        text.push('\n');
        text.push_str(&self.render_status());
        Ok(text)
    }

    /// Registered systems, active one marked with `*`.
    pub fn render_systems(&self) -> String {
        let active = self.engine.active_system().id();
        self.engine
            .systems()
            .iter()
            .map(|system| {
                format!(
                    "{} {:<12} {:<12} {:>2}-{:<2}  budget {}",
                    if system.id() == active { "*" } else { " " },
                    system.id(),
                    system.display_name(),
                    system.min_value(),
                    system.max_value(),
                    system.point_budget()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Values, modifiers, +/- availability and remaining points.
    pub fn render_status(&self) -> String {
        let system = self.engine.active_system();
        let mut out = format!(
            "{} ({})  range {}-{}  budget {}\n",
            system.display_name(),
            system.id(),
            system.min_value(),
            system.max_value(),
            system.point_budget()
        );
        for (attribute, value) in self.engine.attributes().iter() {
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "  {:<13} {:>3}  {:>3}  [{}{}]",
                attribute.as_str(),
                value,
                ModifierKind::Attribute.display(value),
                if self.engine.can_decrease(attribute) { "-" } else { " " },
                if self.engine.can_increase(attribute) { "+" } else { " " },
            );
        }
        let _ = write!(
            out,
            "Remaining points: {} / {}",
            self.engine.remaining_budget(),
            system.point_budget()
        );
        out
    }
}

fn describe_outcome(outcome: &DeltaOutcome) -> String {
    let name = outcome.attribute.abbreviation();
    if outcome.is_rejected() {
        format!("{} stays at {}", name, outcome.value)
    } else if outcome.is_partial() {
        format!(
            "{} {} -> {} (applied {:+} of {:+})",
            name, outcome.previous_value, outcome.value, outcome.applied, outcome.requested
        )
    } else {
        format!("{} {} -> {}", name, outcome.previous_value, outcome.value)
    }
}
