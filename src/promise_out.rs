use std::{
    fmt,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll, Waker},
};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

use crate::{Error, Settled};

/// promiseOut, blocking and async flavours sharing one state.
///
/// Every clone points at the same slot. Any holder may resolve, reject or
/// read; only the first resolution is kept.
///
/// # Examples
///
/// ```
/// use promise_out::{Error, PromiseOut};
/// use futures::executor::block_on;
/// use std::thread;
///
/// let op = PromiseOut::<(), Error>::new();
/// let op_a = op.clone();
/// let task1 = thread::spawn(move || block_on(async {
///     println!("我等到了{:?}", op_a.wait().await);
/// }));
/// op.reject(Error::msg("💥"));
/// assert!(!op.resolve(()));
/// task1.join().expect("The task1 thread has panicked");
/// ```
pub struct PromiseOut<T, E = Error> {
    promise: Arc<Inner<T, E>>,
}

struct Inner<T, E> {
    state: Mutex<State<T, E>>,
    cvar: Condvar,
}

struct State<T, E> {
    value: Option<Arc<Settled<T, E>>>,
    wakers: Vec<(usize, Waker)>,
    next_waiter: usize,
}

impl<T, E> PromiseOut<T, E> {
    pub fn new() -> Self {
        Self {
            promise: Arc::new(Inner {
                state: Mutex::new(State {
                    value: None,
                    wakers: vec![],
                    next_waiter: 0,
                }),
                cvar: Condvar::new(),
            }),
        }
    }

    /// promiseOut.resolve
    ///
    /// Returns `false` if the promise had already been settled, in which case
    /// `value` is dropped and the earlier outcome stands.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Settled::Resolved(value))
    }

    /// promiseOut.reject
    pub fn reject(&self, err: E) -> bool {
        self.settle(Settled::Rejected(err))
    }

    fn settle(&self, settled: Settled<T, E>) -> bool {
        let rejected = settled.is_rejected();
        let wakers = {
            let mut state = self.promise.state.lock();
            if state.value.is_some() {
                debug!(rejected, "promise already settled, discarding late outcome");
                return false;
            }
            state.value = Some(Arc::new(settled));
            std::mem::take(&mut state.wakers)
        };
        trace!(rejected, wakers = wakers.len(), "promise settled");
        self.promise.cvar.notify_all();
        for (_, waker) in wakers {
            waker.wake();
        }
        true
    }

    pub fn is_resolved(&self) -> bool {
        self.promise.state.lock().value.is_some()
    }

    /// Returns the outcome if there is one, without blocking.
    pub fn try_get(&self) -> Option<Arc<Settled<T, E>>> {
        self.promise.state.lock().value.clone()
    }

    /// Blocks the current thread until the promise is settled.
    pub fn settled(&self) -> Arc<Settled<T, E>> {
        let mut state = self.promise.state.lock();
        loop {
            if let Some(value) = &state.value {
                return value.clone();
            }
            trace!("waiting for promise to settle");
            self.promise.cvar.wait(&mut state);
        }
    }

    /// Future that completes once the promise is settled.
    pub fn wait(&self) -> Wait<T, E> {
        Wait {
            promise: self.promise.clone(),
            slot: None,
        }
    }
}

impl<T: Clone, E: Clone> PromiseOut<T, E> {
    /// Blocks until settled and returns the `(value, error)` pair.
    ///
    /// ```
    /// use promise_out::PromiseOut;
    ///
    /// let op = PromiseOut::<Option<i32>, ()>::new();
    /// op.resolve(None);
    /// assert_eq!(op.get(), (Some(None), None));
    /// assert!(op.is_resolved());
    /// ```
    pub fn get(&self) -> (Option<T>, Option<E>) {
        self.settled().to_pair()
    }

    pub fn await_promise(&self) -> Result<T, E> {
        match &*self.settled() {
            Settled::Resolved(value) => Ok(value.clone()),
            Settled::Rejected(err) => Err(err.clone()),
        }
    }
}

impl<T, E> Default for PromiseOut<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for PromiseOut<T, E> {
    fn clone(&self) -> Self {
        Self {
            promise: self.promise.clone(),
        }
    }
}

impl<T, E> fmt::Debug for PromiseOut<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromiseOut")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Returned by [`PromiseOut::wait`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Wait<T, E = Error> {
    promise: Arc<Inner<T, E>>,
    slot: Option<usize>,
}

impl<T, E> Future for Wait<T, E> {
    type Output = Arc<Settled<T, E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let mut state = this.promise.state.lock();
        if let Some(value) = &state.value {
            return Poll::Ready(value.clone());
        }
        // one entry per Wait, refreshed on every poll
        let registered = match this.slot {
            Some(slot) => state.wakers.iter_mut().find(|(id, _)| *id == slot),
            None => None,
        };
        match registered {
            Some((_, waker)) => {
                if !waker.will_wake(cx.waker()) {
                    *waker = cx.waker().clone();
                }
            }
            None => {
                let slot = state.next_waiter;
                state.next_waiter = state.next_waiter.wrapping_add(1);
                state.wakers.push((slot, cx.waker().clone()));
                this.slot = Some(slot);
            }
        }
        Poll::Pending
    }
}

impl<T, E> Drop for Wait<T, E> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            self.promise
                .state
                .lock()
                .wakers
                .retain(|(id, _)| *id != slot);
        }
    }
}

impl<T, E> fmt::Debug for Wait<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wait").finish_non_exhaustive()
    }
}
