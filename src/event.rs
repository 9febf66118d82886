// Event envelope: every fact flowing to storage travels in one of these.

use crate::models::{ProcessMetricsAggregate, SystemInformation, SystemMetricsBasic};
use serde::{Deserialize, Serialize};

/// Signal identity as observed by the watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalInfo {
    pub name: String,
    pub number: i32,
}

/// Closed union over everything the bus carries. The dispatcher matches on
/// this exhaustively, so adding a variant without a persistence route is a
/// compile error.
#[derive(Debug)]
pub enum EventPayload {
    SystemInformation(SystemInformation),
    SystemMetricsBasic(SystemMetricsBasic),
    ProcessMetricsAggregate(ProcessMetricsAggregate),
    Log(String),
    Error(anyhow::Error),
    Signal(SignalInfo),
}

impl EventPayload {
    /// Wire discriminator, also stored in the events_log `type` column.
    pub fn kind(&self) -> &'static str {
        match self {
            EventPayload::SystemInformation(_) => "SystemInformation",
            EventPayload::SystemMetricsBasic(_) => "SystemMetricsBasic",
            EventPayload::ProcessMetricsAggregate(_) => "ProcessMetricsAggregate",
            EventPayload::Log(_) => "EVENT",
            EventPayload::Error(_) => "ERROR",
            EventPayload::Signal(_) => "SIGNAL",
        }
    }

    /// One-line rendering for the console echo sink.
    pub fn render(&self) -> String {
        match self {
            EventPayload::SystemInformation(info) => {
                serde_json::to_string(info).unwrap_or_else(|e| format!("<unrenderable: {e}>"))
            }
            EventPayload::SystemMetricsBasic(metrics) => {
                serde_json::to_string(metrics).unwrap_or_else(|e| format!("<unrenderable: {e}>"))
            }
            EventPayload::ProcessMetricsAggregate(proc_metrics) => serde_json::to_string(
                proc_metrics,
            )
            .unwrap_or_else(|e| format!("<unrenderable: {e}>")),
            EventPayload::Log(content) => content.clone(),
            EventPayload::Error(err) => format!("{err:#}"),
            EventPayload::Signal(sig) => format!("{} ({})", sig.name, sig.number),
        }
    }
}

/// Immutable envelope; ownership moves producer -> bus -> dispatcher.
#[derive(Debug)]
pub struct Event {
    /// Free-text origin tag, e.g. the provider operation name or "OS".
    pub source: String,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(source: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            source: source.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_are_the_wire_discriminators() {
        assert_eq!(
            EventPayload::SystemInformation(Default::default()).kind(),
            "SystemInformation"
        );
        assert_eq!(
            EventPayload::SystemMetricsBasic(Default::default()).kind(),
            "SystemMetricsBasic"
        );
        assert_eq!(
            EventPayload::ProcessMetricsAggregate(Default::default()).kind(),
            "ProcessMetricsAggregate"
        );
        assert_eq!(EventPayload::Log(String::new()).kind(), "EVENT");
        assert_eq!(EventPayload::Error(anyhow::anyhow!("x")).kind(), "ERROR");
        assert_eq!(
            EventPayload::Signal(SignalInfo {
                name: "SIGINT".into(),
                number: 2
            })
            .kind(),
            "SIGNAL"
        );
    }

    #[test]
    fn render_is_one_line_per_payload() {
        assert_eq!(EventPayload::Log("hello".into()).render(), "hello");
        assert_eq!(
            EventPayload::Signal(SignalInfo {
                name: "SIGHUP".into(),
                number: 1
            })
            .render(),
            "SIGHUP (1)"
        );
        let json = EventPayload::ProcessMetricsAggregate(Default::default()).render();
        assert!(json.starts_with('{') && json.contains("procCount"));
    }
}
