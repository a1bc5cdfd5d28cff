//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use storefront_core::{LifecyclePhase, PageError, TimingContext};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink so it works with any
/// `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), PageError> {
        if self.state != SinkState::Initial {
            return Err(PageError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), PageError> {
        if self.state == SinkState::Initial {
            return Err(PageError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(PageError::StreamError("Sink already completed".to_string()));
        }

        self.timing.mark_section_start(name);
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), PageError> {
        if self.state == SinkState::Initial {
            return Err(PageError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(PageError::StreamError("Sink already completed".to_string()));
        }

        self.inner
            .send(bytes)
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;

        Ok(())
    }

    /// Complete the response.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
    }

    /// Get the list of sections sent so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(last) => LifecyclePhase::SectionSent(last.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}
