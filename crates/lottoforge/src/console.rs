//! Colorful console output for generation events.
//!
//! Provides a custom `tracing` layer that formats generator events with colors.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: &str = "lottoforge=info,lottoforge_generator=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `info` level for the generator crates.
pub fn init() {
    INIT.get_or_init(|| {
        // stdout carries generated lines only.
        write_banner(&mut io::stderr().lock());

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // Another global subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GeneratorConsoleLayer)
            .try_init();
    });
}

fn write_banner(out: &mut impl Write) {
    let version_line = format!(
        "LottoForge v{} - constrained lottery line generator",
        env!("CARGO_PKG_VERSION")
    );

    let _ = writeln!(out, "{}", version_line.bright_cyan().bold());
    let _ = out.flush();
}

/// A tracing layer that formats generator events with colors.
pub struct GeneratorConsoleLayer;

impl<S: Subscriber> Layer<S> for GeneratorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("lottoforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    shape: Option<String>,
    numbers: Option<String>,
    preset: Option<String>,
    lottery: Option<String>,
    quantity: Option<u64>,
    requested: Option<u64>,
    generated: Option<u64>,
    attempts: Option<u64>,
    rules: Option<u64>,
    sum: Option<u64>,
    cancelled: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "shape" => self.shape = Some(value),
            "numbers" => self.numbers = Some(value),
            "preset" => self.preset = Some(value),
            "lottery" => self.lottery = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "quantity" => self.quantity = Some(value),
            "requested" => self.requested = Some(value),
            "generated" => self.generated = Some(value),
            "attempts" => self.attempts = Some(value),
            "rules" => self.rules = Some(value),
            "sum" => self.sum = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "cancelled" {
            self.cancelled = Some(value);
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("batch_start") => format_batch_start(v),
        Some("batch_end") => format_batch_end(v),
        Some("candidate_accepted") => format_accepted(v),
        Some("generation_exhausted") => format_exhausted(v),
        Some("preset_selected") => format_preset(v),
        Some("batch_short") => format_short(v),
        _ => match &v.message {
            Some(msg) => format!("{} {} {}", timestamp().bright_black(), level_tag(level), msg),
            None => String::new(),
        },
    }
}

fn format_batch_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} generating {} line(s) of {} with {} rule(s)",
        timestamp().bright_black(),
        level_tag(Level::INFO),
        "[Batch]".bright_cyan(),
        v.quantity.unwrap_or(0).to_string().bright_yellow(),
        v.shape.as_deref().unwrap_or("?").white().bold(),
        v.rules.unwrap_or(0).to_string().yellow()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let requested = v.requested.unwrap_or(0);
    let generated = v.generated.unwrap_or(0);
    let ratio = format!("{}/{}", generated, requested);
    let ratio = if generated < requested {
        ratio.bright_red().to_string()
    } else {
        ratio.bright_green().to_string()
    };

    let mut line = format!(
        "{} {} {} finished: lines ({}), attempts ({})",
        timestamp().bright_black(),
        level_tag(Level::INFO),
        "[Batch]".bright_cyan(),
        ratio,
        v.attempts.unwrap_or(0).to_string().bright_magenta()
    );
    if v.cancelled == Some(true) {
        line.push_str(&format!(" {}", "cancelled".yellow().bold()));
    }
    line
}

fn format_accepted(v: &EventVisitor) -> String {
    format!(
        "    {} {} | sum {:>4} | after {} attempt(s)",
        "->".bright_blue(),
        v.numbers.as_deref().unwrap_or("").white().bold(),
        v.sum.unwrap_or(0),
        v.attempts.unwrap_or(0)
    )
}

fn format_exhausted(v: &EventVisitor) -> String {
    format!(
        "    {} no line met the rules within {} attempts",
        "x".bright_red(),
        v.attempts.unwrap_or(0).to_string().yellow()
    )
}

fn format_preset(v: &EventVisitor) -> String {
    format!(
        "{} {} {} using preset {} ({})",
        timestamp().bright_black(),
        level_tag(Level::INFO),
        "[Preset]".bright_cyan(),
        v.preset.as_deref().unwrap_or("?").white().bold(),
        v.lottery.as_deref().unwrap_or("?")
    )
}

fn format_short(v: &EventVisitor) -> String {
    format!(
        "{} {} {} preset {} produced {} of {} requested lines",
        timestamp().bright_black(),
        level_tag(Level::WARN),
        "[Preset]".bright_cyan(),
        v.preset.as_deref().unwrap_or("?").white().bold(),
        v.generated.unwrap_or(0).to_string().bright_red(),
        v.requested.unwrap_or(0)
    )
}

fn level_tag(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
