use std::time::{Duration, Instant};

use eframe::egui;

use crate::store::SlideStore;

pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_secs(5);

/// Something that can switch the window in and out of fullscreen.
pub trait Fullscreen {
    fn set_fullscreen(&mut self, on: bool) -> anyhow::Result<()>;
}

/// Keys understood while presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKey {
    ArrowRight,
    ArrowLeft,
    Space,
    Escape,
}

impl PresentationKey {
    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowRight => Some(Self::ArrowRight),
            egui::Key::ArrowLeft => Some(Self::ArrowLeft),
            egui::Key::Space => Some(Self::Space),
            egui::Key::Escape => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerKey {
    presenting: bool,
    auto_play: bool,
    duration: Duration,
    revision: u64,
}

/// Periodic advance timer. Recreated whenever its key changes, so there is
/// never more than one.
#[derive(Debug, Clone)]
struct AutoPlayTimer {
    key: TimerKey,
    next_due: Instant,
}

/// Presentation mode and autoplay state.
#[derive(Debug, Clone)]
pub struct PresentationController {
    presenting: bool,
    auto_play: bool,
    duration: Duration,
    timer: Option<AutoPlayTimer>,
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_DURATION)
    }
}

impl PresentationController {
    pub fn new(duration: Duration) -> Self {
        Self {
            presenting: false,
            auto_play: false,
            duration,
            timer: None,
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Enter presentation mode. A fullscreen failure is logged and the mode
    /// is entered windowed.
    pub fn enter(&mut self, fullscreen: &mut dyn Fullscreen) {
        if let Err(e) = fullscreen.set_fullscreen(true) {
            log::warn!("Could not enter fullscreen: {e:#}");
        }
        self.presenting = true;
        self.auto_play = false;
    }

    pub fn exit(&mut self, fullscreen: &mut dyn Fullscreen) {
        if let Err(e) = fullscreen.set_fullscreen(false) {
            log::warn!("Could not leave fullscreen: {e:#}");
        }
        self.presenting = false;
        self.auto_play = false;
    }

    /// The platform left fullscreen on its own.
    pub fn on_fullscreen_lost(&mut self) {
        if self.presenting {
            log::debug!("Fullscreen lost, leaving presentation");
        }
        self.presenting = false;
        self.auto_play = false;
    }

    /// Flip autoplay. Ignored unless presenting.
    pub fn toggle_auto_play(&mut self) {
        if self.presenting {
            self.auto_play = !self.auto_play;
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        if !duration.is_zero() {
            self.duration = duration;
        }
    }

    pub fn set_custom_duration_secs(&mut self, secs: u64) {
        if secs > 0 {
            self.duration = Duration::from_secs(secs);
        }
    }

    /// Advance the autoplay clock. Returns true when the deck should move to
    /// the next slide (wrapping).
    pub fn tick(&mut self, now: Instant, deck_len: usize, revision: u64) -> bool {
        if !(self.presenting && self.auto_play) || deck_len == 0 {
            self.timer = None;
            return false;
        }

        let key = TimerKey {
            presenting: self.presenting,
            auto_play: self.auto_play,
            duration: self.duration,
            revision,
        };
        if self.timer.as_ref().is_none_or(|timer| timer.key != key) {
            self.timer = Some(AutoPlayTimer {
                key,
                next_due: now + self.duration,
            });
            return false;
        }
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        if now < timer.next_due {
            return false;
        }
        timer.next_due += self.duration;
        if timer.next_due <= now {
            timer.next_due = now + self.duration;
        }
        true
    }

    /// Time until the next autoplay advance, for scheduling repaints.
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.next_due.saturating_duration_since(now))
    }

    /// Handle a key press. Ignored unless presenting.
    pub fn handle_key(
        &mut self,
        key: PresentationKey,
        store: &mut SlideStore,
        fullscreen: &mut dyn Fullscreen,
    ) {
        if !self.presenting {
            return;
        }
        match key {
            PresentationKey::ArrowRight => store.next(),
            PresentationKey::ArrowLeft => store.prev(),
            PresentationKey::Space => self.toggle_auto_play(),
            PresentationKey::Escape => self.exit(fullscreen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Layout, Slide};

    #[derive(Default)]
    struct FakeScreen {
        on: bool,
        fail: bool,
        calls: usize,
    }

    impl Fullscreen for FakeScreen {
        fn set_fullscreen(&mut self, on: bool) -> anyhow::Result<()> {
            self.calls += 1;
            if self.fail {
                anyhow::bail!("not allowed");
            }
            self.on = on;
            Ok(())
        }
    }

    fn store(n: usize) -> SlideStore {
        let mut store = SlideStore::new();
        store.set_deck(
            (0..n)
                .map(|i| Slide::new(format!("{i}"), Layout::Title, &[]))
                .collect(),
        );
        store
    }

    #[test]
    fn test_enter_sets_presenting_without_autoplay() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::default();
        controller.toggle_auto_play();
        controller.enter(&mut screen);
        assert!(controller.is_presenting());
        assert!(!controller.is_auto_play());
        assert!(screen.on);
    }

    #[test]
    fn test_enter_survives_fullscreen_failure() {
        let mut screen = FakeScreen {
            fail: true,
            ..Default::default()
        };
        let mut controller = PresentationController::default();
        controller.enter(&mut screen);
        assert!(controller.is_presenting());
        assert!(!screen.on);
    }

    #[test]
    fn test_autoplay_toggle_requires_presenting() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::default();
        controller.toggle_auto_play();
        assert!(!controller.is_auto_play());

        controller.enter(&mut screen);
        controller.toggle_auto_play();
        assert!(controller.is_auto_play());
        controller.toggle_auto_play();
        assert!(!controller.is_auto_play());
    }

    #[test]
    fn test_exit_clears_flags() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::default();
        controller.enter(&mut screen);
        controller.toggle_auto_play();
        controller.exit(&mut screen);
        assert!(!controller.is_presenting());
        assert!(!controller.is_auto_play());
        assert!(!screen.on);

        let mut screen = FakeScreen {
            fail: true,
            ..Default::default()
        };
        controller.enter(&mut screen);
        controller.toggle_auto_play();
        controller.exit(&mut screen);
        assert!(!controller.is_presenting());
        assert!(!controller.is_auto_play());
    }

    #[test]
    fn test_fullscreen_lost_clears_flags() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::default();
        controller.enter(&mut screen);
        controller.toggle_auto_play();
        controller.on_fullscreen_lost();
        assert!(!controller.is_presenting());
        assert!(!controller.is_auto_play());
    }

    #[test]
    fn test_autoplay_wraps_two_slide_deck() {
        let mut screen = FakeScreen::default();
        let mut store = store(2);
        let mut controller = PresentationController::new(Duration::from_millis(3000));
        controller.enter(&mut screen);
        controller.toggle_auto_play();

        let start = Instant::now();
        assert!(!controller.tick(start, store.len(), store.revision()));

        let mut seen = Vec::new();
        for i in 1..=4 {
            let now = start + Duration::from_millis(3000 * i);
            if controller.tick(now, store.len(), store.revision()) {
                store.advance_wrapping();
            }
            seen.push(store.current_index());
        }
        assert_eq!(seen, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_no_advance_between_periods() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::new(Duration::from_secs(3));
        controller.enter(&mut screen);
        controller.toggle_auto_play();
        let start = Instant::now();
        controller.tick(start, 3, 1);
        assert!(!controller.tick(start + Duration::from_millis(2999), 3, 1));
        assert!(controller.tick(start + Duration::from_millis(3000), 3, 1));
        assert!(!controller.tick(start + Duration::from_millis(3500), 3, 1));
    }

    #[test]
    fn test_timer_restarts_on_key_change() {
        let mut screen = FakeScreen::default();
        let mut controller = PresentationController::new(Duration::from_secs(3));
        controller.enter(&mut screen);
        controller.toggle_auto_play();
        let start = Instant::now();
        controller.tick(start, 3, 1);

        controller.set_duration(Duration::from_secs(10));
        let later = start + Duration::from_secs(3);
        assert!(!controller.tick(later, 3, 1));
        assert!(!controller.tick(later + Duration::from_secs(9), 3, 1));
        assert!(controller.tick(later + Duration::from_secs(10), 3, 1));

        // A new deck revision restarts the period too.
        let t = later + Duration::from_secs(20);
        assert!(!controller.tick(t, 3, 2));
    }

    #[test]
    fn test_no_ticks_unless_presenting_with_autoplay() {
        let mut controller = PresentationController::new(Duration::from_secs(1));
        let start = Instant::now();
        controller.toggle_auto_play();
        controller.tick(start, 2, 1);
        assert!(!controller.tick(start + Duration::from_secs(5), 2, 1));
        assert!(controller.time_until_advance(start).is_none());
    }

    #[test]
    fn test_custom_duration_ignores_zero() {
        let mut controller = PresentationController::default();
        controller.set_custom_duration_secs(0);
        assert_eq!(controller.duration(), DEFAULT_SLIDE_DURATION);
        controller.set_custom_duration_secs(12);
        assert_eq!(controller.duration(), Duration::from_secs(12));
    }

    #[test]
    fn test_keys() {
        let mut screen = FakeScreen::default();
        let mut store = store(3);
        let mut controller = PresentationController::default();

        controller.handle_key(PresentationKey::ArrowRight, &mut store, &mut screen);
        assert_eq!(store.current_index(), 0, "ignored when not presenting");

        controller.enter(&mut screen);
        controller.handle_key(PresentationKey::ArrowRight, &mut store, &mut screen);
        controller.handle_key(PresentationKey::ArrowRight, &mut store, &mut screen);
        controller.handle_key(PresentationKey::ArrowRight, &mut store, &mut screen);
        assert_eq!(store.current_index(), 2);
        controller.handle_key(PresentationKey::ArrowLeft, &mut store, &mut screen);
        assert_eq!(store.current_index(), 1);

        controller.handle_key(PresentationKey::Space, &mut store, &mut screen);
        assert!(controller.is_auto_play());

        controller.handle_key(PresentationKey::Escape, &mut store, &mut screen);
        assert!(!controller.is_presenting());
        assert!(!controller.is_auto_play());
        assert_eq!(screen.calls, 2);
    }
}
