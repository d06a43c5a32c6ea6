//! Console output for search and suggestion events.
//!
//! Provides a `tracing` layer that prints one line per search run and per
//! suggestion. Call [`init`] once at startup.

use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "teamforge=info";

/// Installs the console subscriber.
///
/// Safe to call multiple times; only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

/// Formats TeamForge events as single lines on stdout.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("teamforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        if let Some(line) = visitor.format() {
            let _ = writeln!(io::stdout(), "{line}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    search: Option<String>,
    matcher: Option<String>,
    duration_ms: Option<u64>,
    score_calculations: Option<u64>,
    expansions: Option<u64>,
    speed: Option<u64>,
    move_budget: Option<u64>,
    partitions: Option<u64>,
    score: Option<f64>,
    team_a: Option<String>,
    team_b: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        let s = format!("{value:?}");
        match field.name() {
            "team_a" => self.team_a = Some(s),
            "team_b" => self.team_b = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "search" => self.search = Some(value.to_string()),
            "matcher" => self.matcher = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "duration_ms" => self.duration_ms = Some(value),
            "score_calculations" => self.score_calculations = Some(value),
            "expansions" => self.expansions = Some(value),
            "speed" => self.speed = Some(value),
            "move_budget" => self.move_budget = Some(value),
            "partitions" => self.partitions = Some(value),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.score = Some(value);
        }
    }
}

impl EventVisitor {
    fn format(&self) -> Option<String> {
        let search = self.search.as_deref().unwrap_or("search");
        match self.event.as_deref()? {
            "search_start" => {
                let limit = match (self.partitions, self.move_budget) {
                    (Some(p), _) => format!("{p} partitions"),
                    (None, Some(b)) => format!("budget {b}"),
                    (None, None) => String::new(),
                };
                Some(format!("[{search}] started ({limit})"))
            }
            "search_end" => {
                let mut line = format!(
                    "[{search}] ended in {}ms, {} score calculations ({}/s)",
                    self.duration_ms.unwrap_or(0),
                    self.score_calculations.unwrap_or(0),
                    self.speed.unwrap_or(0),
                );
                if let Some(expansions) = self.expansions {
                    line.push_str(&format!(", {expansions} expansions"));
                }
                if let Some(score) = self.score {
                    line.push_str(&format!(", best {score:.4}"));
                }
                Some(line)
            }
            "suggestion" => Some(format!(
                "[{}] {} vs {} (score {:.4})",
                self.matcher.as_deref().unwrap_or("matcher"),
                self.team_a.as_deref().unwrap_or("?"),
                self.team_b.as_deref().unwrap_or("?"),
                self.score.unwrap_or(f64::NAN),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_noop() {
        init();
        init();
    }

    #[test]
    fn test_format_search_end() {
        let visitor = EventVisitor {
            event: Some("search_end".into()),
            search: Some("LocalSearch".into()),
            duration_ms: Some(3),
            score_calculations: Some(451),
            expansions: Some(10),
            score: Some(1.5),
            ..EventVisitor::default()
        };
        let line = visitor.format().unwrap();
        assert!(line.starts_with("[LocalSearch] ended in 3ms, 451 score calculations"));
        assert!(line.ends_with("10 expansions, best 1.5000"));
    }

    #[test]
    fn test_format_ignores_unknown_events() {
        let visitor = EventVisitor {
            event: Some("expand".into()),
            ..EventVisitor::default()
        };
        assert_eq!(visitor.format(), None);
    }
}
