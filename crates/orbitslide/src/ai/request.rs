use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Lifecycle of one request class.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<E> {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(E),
}

/// A single-flight slot for a background request. `begin` refuses while a
/// request is pending, so at most one call per slot is ever in flight.
#[derive(Debug)]
pub struct RequestSlot<T, E> {
    state: RequestState<E>,
    receiver: Option<Receiver<Result<T, E>>>,
}

impl<T, E> Default for RequestSlot<T, E> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            receiver: None,
        }
    }
}

impl<T: Send + 'static, E: Clone + Send + 'static> RequestSlot<T, E> {
    pub fn state(&self) -> &RequestState<E> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    /// Move to `Pending`. Returns false (and changes nothing) when a request
    /// is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.state = RequestState::Pending;
        true
    }

    /// Run `work` on a background thread for the pending request.
    pub fn spawn<F>(&mut self, work: F)
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);
        std::thread::spawn(move || {
            // The slot may have been dropped (window closed); nothing to report to.
            let _ = sender.send(work());
        });
    }

    /// Take the finished result, if the worker has reported.
    pub fn poll(&mut self) -> Option<Result<T, E>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Background request ended without a result");
                self.receiver = None;
                self.state = RequestState::Idle;
                None
            }
        }
    }

    /// Record the outcome of the pending request.
    pub fn finish<R>(&mut self, result: &Result<R, E>) {
        self.state = match result {
            Ok(_) => RequestState::Succeeded,
            Err(e) => RequestState::Failed(e.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait<T: Send + 'static>(slot: &mut RequestSlot<T, String>) -> Result<T, String> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = slot.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "worker did not report");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_begin_refuses_while_pending() {
        let mut slot: RequestSlot<u32, String> = RequestSlot::default();
        assert!(slot.begin());
        assert!(!slot.begin());
        assert!(slot.is_pending());

        slot.finish(&Ok::<u32, String>(1));
        assert_eq!(slot.state(), &RequestState::Succeeded);
        assert!(slot.begin());
    }

    #[test]
    fn test_spawn_and_poll() {
        let mut slot: RequestSlot<u32, String> = RequestSlot::default();
        assert!(slot.begin());
        slot.spawn(|| Ok(7));
        let result = wait(&mut slot);
        assert_eq!(result, Ok(7));
        assert!(slot.is_pending(), "still pending until finished");

        slot.finish(&result);
        assert_eq!(slot.state(), &RequestState::Succeeded);
        assert!(slot.poll().is_none());
    }

    #[test]
    fn test_failure_is_recorded() {
        let mut slot: RequestSlot<u32, String> = RequestSlot::default();
        slot.begin();
        slot.spawn(|| Err("boom".to_string()));
        let result = wait(&mut slot);
        slot.finish(&result);
        assert_eq!(slot.state(), &RequestState::Failed("boom".to_string()));
    }

    #[test]
    fn test_poll_without_request() {
        let mut slot: RequestSlot<u32, String> = RequestSlot::default();
        assert!(slot.poll().is_none());
        assert_eq!(slot.state(), &RequestState::Idle);
    }
}
