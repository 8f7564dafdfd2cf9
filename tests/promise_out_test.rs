#[cfg(test)]
mod tests {
    use promise_out::{all, Error, PromiseOut};
    use std::{sync::mpsc, thread, time::Duration};

    #[test]
    fn test_promise_out() {
        let promise = PromiseOut::<i32>::default();
        let promise_clone = promise.clone();

        thread::spawn(move || {
            promise_clone.resolve(4);
        });

        let (value, err) = promise.get();
        assert_eq!(value, Some(4));
        assert!(err.is_none());
    }

    #[test]
    fn test_promise_out_absent_value() {
        let promise = PromiseOut::<Option<i32>>::new();
        let promise_clone = promise.clone();

        thread::spawn(move || {
            promise_clone.resolve(None);
        });

        let (value, err) = promise.get();
        assert_eq!(value, Some(None));
        assert!(err.is_none());
        assert!(promise.is_resolved());
    }

    #[test]
    fn test_promise_out_timeout() {
        let promise = PromiseOut::<i32>::new();
        let promise_clone = promise.clone();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(promise_clone.get());
        });

        assert!(
            rx.recv_timeout(Duration::from_millis(1000)).is_err(),
            "expecting timeout, but the read returned"
        );
        assert!(!promise.is_resolved());
    }

    #[test]
    fn test_promise_out_reads_before_and_after_resolve_agree() {
        let promise = PromiseOut::<&str>::new();
        let promise_clone = promise.clone();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(promise_clone.get());
        });
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        promise.resolve("ok");
        let (early_value, early_err) = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("The reader never returned");
        let (late_value, late_err) = promise.get();
        assert_eq!(early_value, Some("ok"));
        assert_eq!(early_value, late_value);
        assert!(early_err.is_none());
        assert!(late_err.is_none());
    }

    #[test]
    fn test_promise_out_get_first() {
        let promise = PromiseOut::<&str>::new();
        let promise_clone = promise.clone();

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(1000));
            promise_clone.resolve("ok");
        });

        let (value, err) = promise.get();
        assert_eq!(value, Some("ok"));
        assert!(err.is_none());
    }

    #[test]
    fn test_promise_out_set_first() {
        let promise = PromiseOut::<&str>::new();
        let promise_clone = promise.clone();
        promise.resolve("ok");

        let reader = thread::spawn(move || promise_clone.get());

        let (value, err) = reader.join().expect("The reader thread has panicked");
        assert_eq!(value, Some("ok"));
        assert!(err.is_none());
    }

    #[test]
    fn test_promise_out_multiple_resolve() {
        let promise = PromiseOut::<&str>::new();
        let promise_clone = promise.clone();

        thread::spawn(move || {
            promise_clone.resolve("ok");
            promise_clone.resolve("not ok");
        });

        let (value, err) = promise.get();
        assert_eq!(value, Some("ok"));
        assert!(err.is_none());
        assert_eq!(promise.get().0, Some("ok"));
    }

    #[test]
    fn test_promise_out_error() {
        let promise = PromiseOut::<&str>::new();
        let promise_clone = promise.clone();

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(1000));
            promise_clone.reject(Error::msg("Expected error"));
        });

        let (value, err) = promise.get();
        assert_eq!(value, None);
        assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("Expected error"));
        assert!(promise.await_promise().is_err());
    }

    #[test]
    fn test_all() {
        let promises: Vec<PromiseOut<i32>> = (0..4).map(|_| PromiseOut::new()).collect();
        for (promise, v) in promises.iter().zip([1, 2, 3, 4]).rev() {
            promise.resolve(v);
        }

        let (values, errors) = all(&promises);
        assert!(errors.iter().all(Option::is_none));
        assert_eq!(values, vec![Some(1), Some(2), Some(3), Some(4)]);
    }
}
