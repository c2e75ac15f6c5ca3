//! Collecting and printing the steps observed during a demo run

use anyhow::Result;
use auth_flow::{AuthMethod, AuthStep, ClientAppAuthentication, RecordingTap};
use console::style;
use serde::Serialize;

/// One `authenticate()` call as seen by the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub method: AuthMethod,
    pub attempt: u32,
    pub steps: Vec<AuthStep>,
}

/// Authenticate with each method `repeat` times, recording every attempt.
pub fn run_attempts(methods: &[AuthMethod], repeat: u32) -> Vec<Attempt> {
    let mut attempts = Vec::new();

    for &method in methods {
        let process = method.process();

        for attempt in 1..=repeat {
            let mut tap = RecordingTap::new();
            ClientAppAuthentication::authenticate_with_tap(process.as_ref(), &mut tap);

            tracing::debug!(%method, attempt, "attempt finished");
            attempts.push(Attempt {
                method,
                attempt,
                steps: tap.into_steps(),
            });
        }
    }

    attempts
}

pub fn render_json(attempts: &[Attempt]) -> Result<String> {
    Ok(serde_json::to_string_pretty(attempts)?)
}

pub fn render_text(attempts: &[Attempt], quiet: bool) -> String {
    let mut out = String::new();

    for attempt in attempts {
        if !quiet {
            out.push_str(&format!(
                "{}\n",
                style(format!("{} (attempt {})", attempt.method, attempt.attempt)).bold()
            ));
        }
        for step in &attempt.steps {
            out.push_str(&format!("  {}. {}\n", step.position(), step));
        }
    }

    out
}
