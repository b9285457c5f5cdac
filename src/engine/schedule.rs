//! Host frame scheduling.
//!
//! The engine never drives time itself. It asks the host for "one more
//! frame" and gets back a token; the host later hands that token to
//! `AnimationLoop::tick`. Tokens are strictly increasing, so a token that
//! was cancelled can never be confused with a newer one.

use crate::engine::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// The host's "run again before the next repaint" primitive.
///
/// At most one token is outstanding: scheduling again replaces the
/// previous one.
pub trait FrameScheduler {
    fn schedule(&mut self) -> Result<FrameToken, EngineError>;

    /// Withdraw `token` if it is still outstanding.
    fn cancel(&mut self, token: FrameToken);

    /// The outstanding token, if its frame is due now.
    fn poll(&mut self) -> Option<FrameToken>;
}

/// Deterministic host clock. Each `poll` is one repaint opportunity.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    next: u64,
    pending: Option<FrameToken>,
    fail_next: Option<String>,
    scheduled: u64,
    cancelled: u64,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `schedule` call fail with `reason`.
    pub fn fail_next(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for VirtualScheduler {
    fn schedule(&mut self) -> Result<FrameToken, EngineError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(EngineError::SchedulingFailure(reason));
        }
        self.next += 1;
        let token = FrameToken(self.next);
        self.pending = Some(token);
        self.scheduled += 1;
        Ok(token)
    }

    fn cancel(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
            self.cancelled += 1;
        }
    }

    fn poll(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }
}

/// Scheduler backed by egui's repaint loop.
///
/// `schedule` requests a repaint; the next `update` call is the due frame.
pub struct RepaintScheduler {
    ctx: egui::Context,
    next: u64,
    pending: Option<FrameToken>,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, next: 0, pending: None }
    }
}

impl FrameScheduler for RepaintScheduler {
    fn schedule(&mut self) -> Result<FrameToken, EngineError> {
        self.next += 1;
        let token = FrameToken(self.next);
        self.pending = Some(token);
        self.ctx.request_repaint();
        Ok(token)
    }

    fn cancel(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn poll(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }
}
