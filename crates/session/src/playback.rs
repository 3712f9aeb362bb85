//! Playback: a pure scrub clock and the interval timer that drives it.
//!
//! [`PlaybackClock`] holds no timer; it only knows how to advance. The
//! timer lives in [`PlaybackTimer`], an owned guard around a spawned tokio
//! task. Dropping the guard aborts the task, so every exit path (pause,
//! reaching the end, selecting another game, tearing the session down)
//! stops ticking.

use std::time::Duration;

use rinkview_common::error::{RinkviewError, RinkviewResult};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Whether the clock is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Scrub position on the game timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackClock {
    current_time: u32,
    max_time: u32,
    secs_per_tick: u32,
    state: PlaybackState,
}

impl PlaybackClock {
    pub fn new(max_time: u32, secs_per_tick: u32) -> Self {
        Self {
            current_time: 0,
            max_time,
            secs_per_tick: secs_per_tick.max(1),
            state: PlaybackState::Stopped,
        }
    }

    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn max_time(&self) -> u32 {
        self.max_time
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Change the timeline length, pulling the scrub position inside it.
    pub fn set_max_time(&mut self, max_time: u32) {
        self.max_time = max_time;
        if self.current_time > max_time {
            self.current_time = max_time;
        }
    }

    /// Start playing. At the end of the timeline playback restarts from 0.
    ///
    /// Returns `false` (and stays stopped) when the timeline is empty.
    pub fn play(&mut self) -> bool {
        if self.max_time == 0 {
            return false;
        }
        if self.current_time >= self.max_time {
            self.current_time = 0;
        }
        self.state = PlaybackState::Playing;
        true
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Flip between playing and stopped; returns whether now playing.
    pub fn toggle(&mut self) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    /// Jump to `t`, clamped to `[0, max_time]`. Does not change state.
    pub fn seek(&mut self, t: u32) {
        self.current_time = t.min(self.max_time);
    }

    /// Advance one tick while playing. Reaching `max_time` stops playback.
    pub fn tick(&mut self) -> u32 {
        if !self.is_playing() {
            return self.current_time;
        }
        self.current_time = self
            .current_time
            .saturating_add(self.secs_per_tick)
            .min(self.max_time);
        if self.current_time >= self.max_time {
            self.state = PlaybackState::Stopped;
        }
        self.current_time
    }

    /// Back to 0, stopped.
    pub fn reset(&mut self) {
        self.current_time = 0;
        self.state = PlaybackState::Stopped;
    }
}

/// One timer firing. `generation` identifies the timer that sent it, so
/// ticks queued by a timer that has since been replaced can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTick {
    pub generation: u64,
}

/// Running interval timer. Stops when dropped.
#[derive(Debug)]
pub struct PlaybackTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl PlaybackTimer {
    /// Spawn a task that sends one [`PlaybackTick`] per `interval`.
    ///
    /// The first tick arrives one full interval after start. Fails when
    /// called outside a tokio runtime.
    pub fn start(
        interval: Duration,
        generation: u64,
        ticks: mpsc::UnboundedSender<PlaybackTick>,
    ) -> RinkviewResult<Self> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| RinkviewError::playback(format!("no async runtime for playback: {e}")))?;
        let period = interval.max(Duration::from_millis(1));

        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() completes its first tick immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if ticks.send(PlaybackTick { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(generation, interval_ms = period.as_millis() as u64, "playback timer started");
        Ok(Self { generation, handle })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the timer now.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "playback timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_stops_at_end() {
        let mut clock = PlaybackClock::new(3, 1);
        assert!(clock.play());
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert!(clock.is_playing());
        assert_eq!(clock.tick(), 3);
        assert_eq!(clock.state(), PlaybackState::Stopped);
        assert_eq!(clock.tick(), 3);
    }

    #[test]
    fn test_tick_clamps_large_steps() {
        let mut clock = PlaybackClock::new(10, 4);
        clock.seek(8);
        clock.play();
        assert_eq!(clock.tick(), 10);
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_play_at_end_restarts() {
        let mut clock = PlaybackClock::new(60, 1);
        clock.seek(60);
        assert!(clock.play());
        assert_eq!(clock.current_time(), 0);
    }

    #[test]
    fn test_empty_range_never_plays() {
        let mut clock = PlaybackClock::new(0, 1);
        assert!(!clock.play());
        assert!(!clock.toggle());
        assert_eq!(clock.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_seek_and_shrink_clamp() {
        let mut clock = PlaybackClock::new(100, 1);
        clock.seek(500);
        assert_eq!(clock.current_time(), 100);
        clock.set_max_time(40);
        assert_eq!(clock.current_time(), 40);
        clock.reset();
        assert_eq!(clock.current_time(), 0);
    }

    #[test]
    fn test_timer_requires_runtime() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let result = PlaybackTimer::start(Duration::from_millis(500), 1, tx);
        assert!(matches!(result, Err(RinkviewError::Playback { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_on_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = PlaybackTimer::start(Duration::from_millis(500), 7, tx).unwrap();

        let start = tokio::time::Instant::now();
        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.generation, 7);
        assert!(start.elapsed() >= Duration::from_millis(500));

        rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        drop(timer);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timer_stops_sending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = PlaybackTimer::start(Duration::from_millis(500), 1, tx).unwrap();
        rx.recv().await.unwrap();
        timer.stop();

        // the aborted task drops its sender, closing the channel
        tokio::time::sleep(Duration::from_secs(5)).await;
        let mut received = 0;
        while let Ok(_tick) = rx.try_recv() {
            received += 1;
        }
        assert!(received <= 1);
        assert!(rx.recv().await.is_none());
    }
}
