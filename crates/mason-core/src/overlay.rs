//! Transient overlays: loading screens, skeletons and toasts.
//!
//! One model covers all three. An [`OverlaySpec`] says what to show and how
//! it goes away; [`OverlayState`] tracks visibility and hands out
//! generation-stamped [`TimerTicket`]s so a timer scheduled for an earlier
//! showing can never hide a later one. [`OverlayDriver`] pairs the state with
//! a [`TimerScheduler`] and owns the one pending dismissal timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Default time before a skeleton reports completion.
pub const SKELETON_DURATION: Duration = Duration::from_millis(2000);
/// Default time before a toast dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// What kind of overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    LoadingScreen,
    Skeleton,
    Toast,
}

impl OverlayKind {
    /// CSS class of the overlay root.
    pub fn class(&self) -> &'static str {
        match self {
            OverlayKind::LoadingScreen => "overlay overlay-loading",
            OverlayKind::Skeleton => "overlay overlay-skeleton",
            OverlayKind::Toast => "overlay overlay-toast",
        }
    }
}

/// Visual tone, mostly for toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// How an overlay goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// Stays until the owner hides it.
    Manual,
    /// Hides itself after the delay.
    After(Duration),
}

/// Content and dismissal policy of an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySpec {
    pub kind: OverlayKind,
    pub message: Option<String>,
    pub tone: Tone,
    pub dismiss: Dismiss,
}

impl OverlaySpec {
    /// Full-screen loading indicator, hidden by its owner.
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: OverlayKind::LoadingScreen,
            message: Some(message.into()),
            tone: Tone::Info,
            dismiss: Dismiss::Manual,
        }
    }

    /// Placeholder that completes after [`SKELETON_DURATION`].
    pub fn skeleton() -> Self {
        Self {
            kind: OverlayKind::Skeleton,
            message: None,
            tone: Tone::Info,
            dismiss: Dismiss::After(SKELETON_DURATION),
        }
    }

    /// Notification that dismisses after [`TOAST_DURATION`].
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            kind: OverlayKind::Toast,
            message: Some(message.into()),
            tone: Tone::Info,
            dismiss: Dismiss::After(TOAST_DURATION),
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Replace the dismissal delay.
    pub fn with_duration(mut self, delay: Duration) -> Self {
        self.dismiss = Dismiss::After(delay);
        self
    }
}

/// A timer owed to one showing of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub generation: u64,
    pub delay: Duration,
}

/// Visibility of one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    spec: OverlaySpec,
    visible: bool,
    generation: u64,
}

impl OverlayState {
    pub fn new(spec: OverlaySpec) -> Self {
        Self {
            spec,
            visible: false,
            generation: 0,
        }
    }

    pub fn spec(&self) -> &OverlaySpec {
        &self.spec
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the overlay.
    ///
    /// Returns the timer to schedule when the overlay dismisses itself.
    /// Any ticket from an earlier showing becomes stale.
    pub fn show(&mut self) -> Option<TimerTicket> {
        self.visible = true;
        self.generation += 1;
        match self.spec.dismiss {
            Dismiss::Manual => None,
            Dismiss::After(delay) => Some(TimerTicket {
                generation: self.generation,
                delay,
            }),
        }
    }

    /// Hide the overlay and invalidate outstanding tickets.
    pub fn hide(&mut self) {
        self.visible = false;
        self.generation += 1;
    }

    /// A timer went off. Hides and returns `true` only for a current ticket.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if !self.visible || ticket.generation != self.generation {
            tracing::trace!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale overlay timer"
            );
            return false;
        }
        self.hide();
        true
    }
}

/// Schedules one-shot timers for an [`OverlayDriver`].
pub trait TimerScheduler {
    type Handle;

    /// Run `fire` once after `delay`. `None` if the timer could not be set.
    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// An [`OverlayState`] kept in step with a visibility flag, owning at most
/// one pending dismissal timer.
///
/// Hiding, reshowing, [`cancel`](Self::cancel) and drop all clear the
/// pending timer, so `on_complete` only runs for the showing that is still
/// current when its timer fires.
pub struct OverlayDriver<S: TimerScheduler> {
    state: Rc<RefCell<OverlayState>>,
    scheduler: S,
    pending: Option<S::Handle>,
    on_complete: Option<Rc<dyn Fn()>>,
}

impl<S: TimerScheduler> OverlayDriver<S> {
    pub fn new(spec: OverlaySpec, scheduler: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(OverlayState::new(spec))),
            scheduler,
            pending: None,
            on_complete: None,
        }
    }

    /// Run `callback` when a timed showing dismisses itself.
    pub fn on_complete(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_complete = Some(Rc::new(callback));
        self
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }

    /// Follow the visibility flag.
    pub fn set_visible(&mut self, visible: bool) {
        self.cancel();
        if !visible {
            self.state.borrow_mut().hide();
            return;
        }
        let Some(ticket) = self.state.borrow_mut().show() else {
            return;
        };
        let state = Rc::downgrade(&self.state);
        let on_complete = self.on_complete.clone();
        let fire = Box::new(move || fire_ticket(&state, ticket, on_complete.as_deref()));
        self.pending = self.scheduler.schedule(ticket.delay, fire);
        if self.pending.is_none() {
            tracing::warn!(
                delay_ms = ticket.delay.as_millis() as u64,
                "could not schedule overlay timer"
            );
        }
    }

    /// Clear the pending timer, if any, leaving visibility alone.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: TimerScheduler> Drop for OverlayDriver<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn fire_ticket(
    state: &Weak<RefCell<OverlayState>>,
    ticket: TimerTicket,
    on_complete: Option<&dyn Fn()>,
) {
    // Driver already dropped.
    let Some(state) = state.upgrade() else {
        return;
    };
    let fired = state.borrow_mut().fire(ticket);
    if fired {
        if let Some(callback) = on_complete {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policies() {
        assert_eq!(OverlaySpec::loading("Verifying payment").dismiss, Dismiss::Manual);
        assert_eq!(
            OverlaySpec::skeleton().dismiss,
            Dismiss::After(Duration::from_millis(2000))
        );
        assert_eq!(
            OverlaySpec::toast("Added to cart").dismiss,
            Dismiss::After(Duration::from_millis(3000))
        );
        assert_eq!(
            OverlaySpec::toast("Saved").with_duration(Duration::from_millis(500)).dismiss,
            Dismiss::After(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_manual_overlay_has_no_timer() {
        let mut state = OverlayState::new(OverlaySpec::loading("Loading"));
        assert_eq!(state.show(), None);
        assert!(state.is_visible());
        state.hide();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_current_ticket_hides() {
        let mut state = OverlayState::new(OverlaySpec::toast("Added to cart"));
        let ticket = state.show().unwrap();
        assert_eq!(ticket.delay, TOAST_DURATION);
        assert!(state.fire(ticket));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_ticket_after_hide_is_ignored() {
        let mut state = OverlayState::new(OverlaySpec::toast("Added to cart"));
        let ticket = state.show().unwrap();
        state.hide();
        assert!(!state.fire(ticket));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_ticket_from_earlier_showing_is_ignored() {
        let mut state = OverlayState::new(OverlaySpec::toast("Added to cart"));
        let first = state.show().unwrap();
        state.hide();
        let second = state.show().unwrap();

        assert!(!state.fire(first));
        assert!(state.is_visible());
        assert!(state.fire(second));
        assert!(!state.fire(second));
    }

    /// Timers that only run when the test says so.
    #[derive(Clone, Default)]
    struct ManualTimers {
        queue: Rc<RefCell<Vec<(u64, Box<dyn FnOnce()>)>>>,
        next: Rc<RefCell<u64>>,
        ignore_cancel: bool,
    }

    impl ManualTimers {
        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn run_all(&self) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, fire) in due {
                fire();
            }
        }
    }

    impl TimerScheduler for ManualTimers {
        type Handle = u64;

        fn schedule(&self, _delay: Duration, fire: Box<dyn FnOnce()>) -> Option<u64> {
            let mut next = self.next.borrow_mut();
            *next += 1;
            self.queue.borrow_mut().push((*next, fire));
            Some(*next)
        }

        fn cancel(&self, handle: u64) {
            if !self.ignore_cancel {
                self.queue.borrow_mut().retain(|(id, _)| *id != handle);
            }
        }
    }

    fn counting_driver(timers: &ManualTimers) -> (OverlayDriver<ManualTimers>, Rc<RefCell<u32>>) {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let driver = OverlayDriver::new(OverlaySpec::skeleton(), timers.clone())
            .on_complete(move || *counter.borrow_mut() += 1);
        (driver, calls)
    }

    #[test]
    fn test_driver_completes_after_timer() {
        let timers = ManualTimers::default();
        let (mut driver, calls) = counting_driver(&timers);

        driver.set_visible(true);
        assert_eq!(timers.pending(), 1);
        timers.run_all();

        assert_eq!(*calls.borrow(), 1);
        assert!(!driver.is_visible());
    }

    #[test]
    fn test_driver_hide_cancels_pending_timer() {
        let timers = ManualTimers::default();
        let (mut driver, calls) = counting_driver(&timers);

        driver.set_visible(true);
        driver.set_visible(false);
        assert_eq!(timers.pending(), 0);
        timers.run_all();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_driver_reshow_keeps_one_timer() {
        let timers = ManualTimers::default();
        let (mut driver, calls) = counting_driver(&timers);

        driver.set_visible(true);
        driver.set_visible(true);
        assert_eq!(timers.pending(), 1);
        timers.run_all();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_driver_drop_cancels_pending_timer() {
        let timers = ManualTimers::default();
        let (mut driver, calls) = counting_driver(&timers);

        driver.set_visible(true);
        drop(driver);
        assert_eq!(timers.pending(), 0);
        timers.run_all();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_timer_outliving_driver_does_nothing() {
        let timers = ManualTimers {
            ignore_cancel: true,
            ..Default::default()
        };
        let (mut driver, calls) = counting_driver(&timers);

        driver.set_visible(true);
        driver.set_visible(false);
        driver.set_visible(true);
        drop(driver);

        assert_eq!(timers.pending(), 2);
        timers.run_all();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_manual_overlay_schedules_nothing() {
        let timers = ManualTimers::default();
        let mut driver = OverlayDriver::new(OverlaySpec::loading("Verifying"), timers.clone());
        driver.set_visible(true);
        assert_eq!(timers.pending(), 0);
        assert!(driver.is_visible());
    }
}
