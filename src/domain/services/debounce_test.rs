use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time;

use super::Debouncer;

fn record(calls: &Arc<Mutex<Vec<String>>>, text: &str) -> impl std::future::Future<Output = ()> {
    let calls = calls.clone();
    let text = text.to_string();
    return async move {
        calls.lock().await.push(text);
    };
}

#[tokio::test(start_paused = true)]
async fn it_runs_after_the_delay() {
    let calls = Arc::new(Mutex::new(vec![]));
    let mut debouncer = Debouncer::new(Duration::from_millis(1000));

    debouncer.schedule(record(&calls, "Bonjour"));
    assert!(debouncer.is_pending());

    time::sleep(Duration::from_millis(999)).await;
    assert!(calls.lock().await.is_empty());

    time::sleep(Duration::from_millis(10)).await;
    assert_eq!(*calls.lock().await, vec!["Bonjour".to_string()]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn it_only_runs_the_last_scheduled_job() {
    let calls = Arc::new(Mutex::new(vec![]));
    let mut debouncer = Debouncer::new(Duration::from_millis(1000));

    debouncer.schedule(record(&calls, "Bon"));
    time::sleep(Duration::from_millis(500)).await;
    debouncer.schedule(record(&calls, "Bonjour"));
    time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(*calls.lock().await, vec!["Bonjour".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn it_cancels_pending_jobs() {
    let calls = Arc::new(Mutex::new(vec![]));
    let mut debouncer = Debouncer::new(Duration::from_millis(1000));

    debouncer.schedule(record(&calls, "Bonjour"));
    debouncer.cancel();
    time::sleep(Duration::from_millis(2000)).await;

    assert!(calls.lock().await.is_empty());
    assert!(!debouncer.is_pending());
}
