//! The work/break session clock.
//!
//! The clock never reads the system time itself: every operation that needs
//! the current instant takes it as an argument, so the whole state machine is
//! driven by whoever owns the loop (or by a test).

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

/// Length of a work interval in seconds.
pub const WORK_SECONDS: i64 = 25 * 60;
/// Length of a short break in seconds.
pub const SHORT_BREAK_SECONDS: i64 = 5 * 60;
/// Length of a long break in seconds.
pub const LONG_BREAK_SECONDS: i64 = 15 * 60;
/// Number of work intervals in one cycle.
pub const TOTAL_SESSIONS: u32 = 4;

/// The interval type currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Focus interval.
    Work,
    /// Rest interval.
    Break,
}

impl Phase {
    /// Label shown in the info panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pomodoro state: current phase, countdown, and cumulative counters.
#[derive(Debug, Clone)]
pub struct SessionClock {
    phase: Phase,
    session_index: u32,
    remaining_seconds: i64,
    nominal_seconds: i64,
    deadline: Option<DateTime<Utc>>,
    paused: bool,
    session_start: Option<DateTime<Utc>>,
    completed_pomodoros: u32,
    total_work_seconds: i64,
    total_break_seconds: i64,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// Create a clock at the beginning of the first work interval.
    ///
    /// The countdown does not run until [`SessionClock::start`] is called.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Work,
            session_index: 1,
            remaining_seconds: WORK_SECONDS,
            nominal_seconds: WORK_SECONDS,
            deadline: None,
            paused: false,
            session_start: None,
            completed_pomodoros: 0,
            total_work_seconds: 0,
            total_break_seconds: 0,
        }
    }

    /// Arm the deadline for the current interval. Idempotent once armed.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.deadline.is_some() {
            return;
        }
        self.deadline = Some(now + Duration::seconds(self.remaining_seconds));
        self.session_start = Some(now);
        info!(phase = %self.phase, remaining = self.remaining_seconds, "session started");
    }

    /// Recompute the remaining time from the deadline.
    ///
    /// Returns true if the phase advanced during this call. At most one
    /// advance happens per call, however late the call is.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.paused {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };

        // A skip leaves remaining at zero; the deadline must not revive it.
        if self.remaining_seconds > 0 {
            self.remaining_seconds = (deadline - now).num_seconds().max(0);
        }

        if self.remaining_seconds == 0 {
            self.advance_phase(now);
            true
        } else {
            false
        }
    }

    /// End the current interval at `now` and begin the next one.
    pub fn advance_phase(&mut self, now: DateTime<Utc>) {
        let elapsed = self
            .session_start
            .map_or(0, |start| (now - start).num_seconds().max(0));

        let next_nominal = match self.phase {
            Phase::Work => {
                let completed = self.session_index;
                self.completed_pomodoros += 1;
                self.total_work_seconds += elapsed;
                self.session_index = if completed >= TOTAL_SESSIONS {
                    1
                } else {
                    completed + 1
                };
                self.phase = Phase::Break;
                break_seconds_after(completed)
            }
            Phase::Break => {
                self.total_break_seconds += elapsed;
                self.phase = Phase::Work;
                WORK_SECONDS
            }
        };

        self.nominal_seconds = next_nominal;
        self.remaining_seconds = next_nominal;
        self.deadline = Some(now + Duration::seconds(next_nominal));
        self.session_start = Some(now);

        info!(
            phase = %self.phase,
            session = self.session_index,
            elapsed,
            remaining = self.remaining_seconds,
            "phase advanced"
        );
    }

    /// Freeze the countdown. No-op if already paused.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused {
            return;
        }
        if let Some(deadline) = self.deadline {
            if self.remaining_seconds > 0 {
                self.remaining_seconds = (deadline - now).num_seconds().max(0);
            }
        }
        self.deadline = None;
        self.paused = true;
        debug!(remaining = self.remaining_seconds, "paused");
    }

    /// Continue the countdown from the frozen remaining time. No-op if running.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if !self.paused {
            return;
        }
        self.deadline = Some(now + Duration::seconds(self.remaining_seconds));
        self.paused = false;
        debug!(remaining = self.remaining_seconds, "resumed");
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) {
        if self.paused {
            self.resume(now);
        } else {
            self.pause(now);
        }
    }

    /// End the current interval early; the next tick advances the phase.
    ///
    /// Only the time actually spent in the interval is credited. A paused
    /// clock is resumed so the advance fires and the next interval runs.
    pub fn skip(&mut self, now: DateTime<Utc>) {
        self.remaining_seconds = 0;
        if self.paused {
            self.resume(now);
        } else if self.deadline.is_none() {
            self.start(now);
        }
        debug!(phase = %self.phase, "skipped");
    }

    /// Fraction of the current interval that has elapsed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.nominal_seconds <= 0 {
            return 1.0;
        }
        (1.0 - self.remaining_seconds as f64 / self.nominal_seconds as f64).clamp(0.0, 1.0)
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based index of the work interval within the cycle.
    #[must_use]
    pub const fn session_index(&self) -> u32 {
        self.session_index
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Nominal length of the current interval in seconds.
    #[must_use]
    pub const fn nominal_seconds(&self) -> i64 {
        self.nominal_seconds
    }

    /// Whether the current interval is a long break.
    #[must_use]
    pub fn is_long_break(&self) -> bool {
        self.phase == Phase::Break && self.nominal_seconds == LONG_BREAK_SECONDS
    }

    /// When the current interval ends, if the clock is running.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Whether the countdown is frozen.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of finished work intervals.
    #[must_use]
    pub const fn completed_pomodoros(&self) -> u32 {
        self.completed_pomodoros
    }

    /// Seconds spent in finished or skipped work intervals.
    #[must_use]
    pub const fn total_work_seconds(&self) -> i64 {
        self.total_work_seconds
    }

    /// Seconds spent in finished or skipped breaks.
    #[must_use]
    pub const fn total_break_seconds(&self) -> i64 {
        self.total_break_seconds
    }
}

/// Break length following the work interval with index `completed`.
///
/// The first work interval of every cycle earns the long break.
const fn break_seconds_after(completed: u32) -> i64 {
    if (completed.saturating_sub(1)) % TOTAL_SESSIONS == 0 {
        LONG_BREAK_SECONDS
    } else {
        SHORT_BREAK_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        t0() + Duration::seconds(seconds)
    }

    fn started() -> SessionClock {
        let mut clock = SessionClock::new();
        clock.start(t0());
        clock
    }

    /// Tick until the current interval runs out, starting at `now`.
    fn finish_interval(clock: &mut SessionClock, now: i64) -> i64 {
        let end = now + clock.remaining_seconds();
        assert!(clock.tick(at(end)));
        end
    }

    #[test]
    fn test_new_clock() {
        let clock = SessionClock::new();
        assert_eq!(clock.phase(), Phase::Work);
        assert_eq!(clock.remaining_seconds(), 1500);
        assert_eq!(clock.session_index(), 1);
        assert_eq!(clock.deadline(), None);
        assert!(!clock.is_paused());
        assert_eq!(clock.completed_pomodoros(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = started();
        assert_eq!(clock.deadline(), Some(at(1500)));

        clock.start(at(100));
        assert_eq!(clock.deadline(), Some(at(1500)));
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut clock = SessionClock::new();
        assert!(!clock.tick(at(5000)));
        assert_eq!(clock.remaining_seconds(), 1500);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut clock = started();
        assert!(!clock.tick(at(60)));
        assert_eq!(clock.remaining_seconds(), 1440);

        // Partial seconds are truncated
        assert!(!clock.tick(at(60) + Duration::milliseconds(900)));
        assert_eq!(clock.remaining_seconds(), 1439);
    }

    #[test]
    fn test_first_work_interval_ends_in_long_break() {
        let mut clock = started();

        assert!(clock.tick(at(1500)));

        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.remaining_seconds(), 900);
        assert!(clock.is_long_break());
        assert_eq!(clock.completed_pomodoros(), 1);
        assert_eq!(clock.session_index(), 2);
        assert_eq!(clock.total_work_seconds(), 1500);
        assert_eq!(clock.deadline(), Some(at(2400)));
    }

    #[test]
    fn test_break_ends_in_work() {
        let mut clock = started();
        assert!(clock.tick(at(1500)));

        assert!(clock.tick(at(2400)));

        assert_eq!(clock.phase(), Phase::Work);
        assert_eq!(clock.remaining_seconds(), 1500);
        assert_eq!(clock.session_index(), 2);
        assert_eq!(clock.total_break_seconds(), 900);
        assert_eq!(clock.completed_pomodoros(), 1);
    }

    #[test]
    fn test_long_break_cycle() {
        let mut clock = started();
        let mut now = 0;
        let mut breaks = Vec::new();

        for _ in 0..8 {
            now = finish_interval(&mut clock, now);
            assert_eq!(clock.phase(), Phase::Break);
            breaks.push((clock.session_index(), clock.remaining_seconds()));
            now = finish_interval(&mut clock, now);
            assert_eq!(clock.phase(), Phase::Work);
        }

        assert_eq!(
            breaks,
            vec![
                (2, 900),
                (3, 300),
                (4, 300),
                (1, 300),
                (2, 900),
                (3, 300),
                (4, 300),
                (1, 300),
            ]
        );
        assert_eq!(clock.completed_pomodoros(), 8);
    }

    #[test]
    fn test_one_advance_per_crossing() {
        let mut clock = started();
        assert!(clock.tick(at(1500)));
        assert!(!clock.tick(at(1500)));
        assert!(!clock.tick(at(1501)));

        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.completed_pomodoros(), 1);
    }

    #[test]
    fn test_late_tick_advances_once() {
        let mut clock = started();

        // Far past both the work interval and the following break
        assert!(clock.tick(at(10_000)));

        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.remaining_seconds(), 900);
        assert_eq!(clock.total_work_seconds(), 10_000);
        assert_eq!(clock.completed_pomodoros(), 1);
    }

    #[test]
    fn test_skip_credits_elapsed_time() {
        let mut clock = started();
        clock.tick(at(10));

        clock.skip(at(10));
        assert_eq!(clock.remaining_seconds(), 0);
        assert_eq!(clock.deadline(), Some(at(1500)));

        assert!(clock.tick(at(10)));
        assert_eq!(clock.total_work_seconds(), 10);
        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.completed_pomodoros(), 1);
    }

    #[test]
    fn test_skip_break_does_not_count_pomodoro() {
        let mut clock = started();
        clock.tick(at(1500));

        clock.skip(at(1530));
        assert!(clock.tick(at(1530)));

        assert_eq!(clock.phase(), Phase::Work);
        assert_eq!(clock.total_break_seconds(), 30);
        assert_eq!(clock.completed_pomodoros(), 1);
    }

    #[test]
    fn test_skip_while_paused_resumes() {
        let mut clock = started();
        clock.pause(at(100));

        clock.skip(at(200));
        assert!(!clock.is_paused());

        assert!(clock.tick(at(200)));
        assert_eq!(clock.phase(), Phase::Break);
        assert!(!clock.is_paused());
        assert_eq!(clock.total_work_seconds(), 200);
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let mut clock = started();
        clock.tick(at(100));
        clock.pause(at(100));

        assert!(clock.is_paused());
        assert_eq!(clock.deadline(), None);

        assert!(!clock.tick(at(5000)));
        assert_eq!(clock.remaining_seconds(), 1400);

        clock.resume(at(5000));
        assert!(!clock.is_paused());
        assert_eq!(clock.deadline(), Some(at(6400)));

        clock.tick(at(5060));
        assert_eq!(clock.remaining_seconds(), 1340);
    }

    #[test]
    fn test_pause_and_resume_are_noops_when_repeated() {
        let mut clock = started();
        clock.resume(at(50));
        assert_eq!(clock.deadline(), Some(at(1500)));

        clock.pause(at(100));
        clock.pause(at(900));
        assert_eq!(clock.remaining_seconds(), 1400);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = started();
        clock.toggle_pause(at(10));
        assert!(clock.is_paused());
        clock.toggle_pause(at(20));
        assert!(!clock.is_paused());
        assert_eq!(clock.deadline(), Some(at(1510)));
    }

    #[test]
    fn test_remaining_within_bounds() {
        let mut clock = started();
        for step in (0..20_000).step_by(37) {
            clock.tick(at(step));
            assert!(clock.remaining_seconds() >= 0);
            assert!(clock.remaining_seconds() <= clock.nominal_seconds());
        }
    }

    #[test]
    fn test_progress_fraction() {
        let mut clock = started();
        assert!(clock.progress_fraction().abs() < f64::EPSILON);

        clock.tick(at(750));
        assert!((clock.progress_fraction() - 0.5).abs() < 0.01);

        clock.tick(at(1500));
        // Fresh long break
        assert!(clock.progress_fraction().abs() < f64::EPSILON);
        clock.tick(at(1500 + 450));
        assert!((clock.progress_fraction() - 0.5).abs() < 0.01);
    }
}
