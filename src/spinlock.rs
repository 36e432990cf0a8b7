// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A reader/writer spinlock.

On the wasm main thread we can't block, so shared logger state (the mode
registry, the rule list, the global logger slot) is guarded by a spinlock
instead of a `Mutex`.  Critical sections must stay short.

Locks are released by guards, so a closure that panics still unlocks.
*/

use std::cell::UnsafeCell;
use std::fmt::Debug;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u8 = 0;
//up to 254 readers, or one writer (u8::MAX)
const WRITER: u8 = u8::MAX;

pub(crate) struct Spinlock<T> {
    state: AtomicU8,
    data: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

struct ReadGuard<'a>(&'a AtomicU8);

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Release);
    }
}

struct WriteGuard<'a>(&'a AtomicU8);

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.0.store(UNLOCKED, Release);
    }
}

impl<T> Spinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        Spinlock {
            state: AtomicU8::new(UNLOCKED),
            data: UnsafeCell::new(data),
        }
    }

    fn read(&self) -> ReadGuard<'_> {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |readers| {
                (readers < WRITER - 1).then_some(readers + 1)
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        ReadGuard(&self.state)
    }

    fn write(&self) -> WriteGuard<'_> {
        while self
            .state
            .compare_exchange_weak(UNLOCKED, WRITER, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        WriteGuard(&self.state)
    }

    /// Runs `f` with shared access.  Other readers may run concurrently.
    pub(crate) fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let _guard = self.read();
        // SAFETY: the read guard excludes writers until it drops
        f(unsafe { &*self.data.get() })
    }

    /// Runs `f` with exclusive access.
    pub(crate) fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.write();
        // SAFETY: the write guard excludes everyone else until it drops
        f(unsafe { &mut *self.data.get() })
    }
}

impl<T: Debug> Debug for Spinlock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|data| f.debug_tuple("Spinlock").field(data).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_writers() {
        let lock = Arc::new(Spinlock::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let lock = lock.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        lock.with_mut(|v| v.push(t * 100 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(lock.with(|v| v.len()), 800);
    }

    #[test]
    fn panic_releases_lock() {
        let lock = Spinlock::new(1);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            lock.with_mut(|_| panic!("boom"));
        }));
        assert!(result.is_err());
        lock.with_mut(|v| *v += 1);
        assert_eq!(lock.with(|v| *v), 2);
    }

    #[test]
    fn nested_reads() {
        let lock = Spinlock::new(5);
        let sum = lock.with(|a| lock.with(|b| a + b));
        assert_eq!(sum, 10);
    }
}
