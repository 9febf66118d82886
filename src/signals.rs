// Signal watcher: every observed signal becomes one event on the bus; the
// signals mapped by the policy then terminate the process with their exit
// code. Fire-and-forget: the watcher never waits for the dispatcher to drain.

use crate::bus::EventPublisher;
use crate::event::{Event, EventPayload, SignalInfo};
use std::collections::HashMap;

pub const SOURCE_OS: &str = "OS";

/// Signal-number to exit-code policy, injected at startup so platform
/// variance is a configuration choice rather than conditional compilation.
#[derive(Debug, Clone, Default)]
pub struct SignalPolicy {
    exit_codes: HashMap<i32, i32>,
}

impl SignalPolicy {
    /// interrupt -> 2, hangup -> 1, segmentation fault -> 11.
    pub fn standard() -> Self {
        Self {
            exit_codes: HashMap::from([(SIGINT, 2), (SIGHUP, 1), (SIGSEGV, 11)]),
        }
    }

    /// No signal forces an exit; all signals only produce events.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn exit_code(&self, signal_number: i32) -> Option<i32> {
        self.exit_codes.get(&signal_number).copied()
    }

    pub fn mapped_signals(&self) -> impl Iterator<Item = i32> + '_ {
        self.exit_codes.keys().copied()
    }
}

pub const SIGHUP: i32 = 1;
pub const SIGINT: i32 = 2;
pub const SIGSEGV: i32 = 11;

/// Publish the signal event and return the exit code the policy demands, if
/// any. Split out of the watch loop so the termination decision is testable
/// without killing the test process.
pub async fn handle_signal(
    publisher: &EventPublisher,
    policy: &SignalPolicy,
    name: &str,
    number: i32,
) -> Option<i32> {
    let event = Event::new(
        SOURCE_OS,
        EventPayload::Signal(SignalInfo {
            name: name.to_string(),
            number,
        }),
    );
    if publisher.publish(event).await.is_err() {
        tracing::debug!(signal = name, "event bus closed; signal not recorded");
    }
    policy.exit_code(number)
}

/// Subscribe to every deliverable signal and run the watcher for the process
/// lifetime. Signals the OS refuses to deliver to a handler (e.g. SIGKILL,
/// and SIGSEGV on most registries) are skipped with a warning.
pub fn spawn(publisher: EventPublisher, policy: SignalPolicy) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        watch(publisher, policy).await;
    })
}

#[cfg(unix)]
async fn watch(publisher: EventPublisher, policy: SignalPolicy) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut subscriptions: Vec<(SignalKind, String)> = vec![
        (SignalKind::hangup(), "SIGHUP".into()),
        (SignalKind::interrupt(), "SIGINT".into()),
        (SignalKind::quit(), "SIGQUIT".into()),
        (SignalKind::user_defined1(), "SIGUSR1".into()),
        (SignalKind::user_defined2(), "SIGUSR2".into()),
        (SignalKind::pipe(), "SIGPIPE".into()),
        (SignalKind::alarm(), "SIGALRM".into()),
        (SignalKind::terminate(), "SIGTERM".into()),
        (SignalKind::child(), "SIGCHLD".into()),
        (SignalKind::io(), "SIGIO".into()),
        (SignalKind::window_change(), "SIGWINCH".into()),
    ];
    for number in policy.mapped_signals() {
        if !subscriptions.iter().any(|(k, _)| k.as_raw_value() == number) {
            subscriptions.push((SignalKind::from_raw(number), signal_name(number)));
        }
    }

    let mut handles = Vec::new();
    for (kind, name) in subscriptions {
        let mut stream = match signal(kind) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(signal = %name, error = %e, "cannot subscribe to signal");
                continue;
            }
        };
        let publisher = publisher.clone();
        let policy = policy.clone();
        handles.push(tokio::spawn(async move {
            while stream.recv().await.is_some() {
                tracing::info!(signal = %name, "signal received");
                if let Some(code) =
                    handle_signal(&publisher, &policy, &name, kind.as_raw_value()).await
                {
                    std::process::exit(code);
                }
            }
        }));
    }
    for handle in handles {
        let _ = handle.await;
    }
}

#[cfg(not(unix))]
async fn watch(publisher: EventPublisher, policy: SignalPolicy) {
    // Only Ctrl-C is observable here; it is reported like any other signal
    // and exits only when the policy maps it.
    loop {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::info!(signal = "SIGINT", "signal received");
        if let Some(code) = handle_signal(&publisher, &policy, "SIGINT", SIGINT).await {
            std::process::exit(code);
        }
    }
}

/// Name for a policy-mapped signal that is not in the static subscription
/// list; numbers outside the mapped set fall back to a numeric form.
pub fn signal_name(number: i32) -> String {
    match number {
        SIGHUP => "SIGHUP".into(),
        SIGINT => "SIGINT".into(),
        SIGSEGV => "SIGSEGV".into(),
        other => format!("signal {other}"),
    }
}
