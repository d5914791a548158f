use std::time::Duration;

use tokio::{sync::mpsc, time};

use wayfare_service::debounce::debounce;

const WINDOW: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn burst_commits_only_the_last_value() {
	let (tx, raw) = mpsc::channel(16);
	let mut committed = debounce(raw, WINDOW);

	for text in ["k", "ki", "kiv", "kivu"] {
		tx.send(text.to_string()).await.expect("Send must succeed.");
		time::sleep(Duration::from_millis(50)).await;
	}

	time::sleep(Duration::from_millis(400)).await;

	assert_eq!(committed.recv().await.as_deref(), Some("kivu"));
	assert!(committed.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn spaced_inputs_commit_one_each() {
	let (tx, raw) = mpsc::channel(16);
	let mut committed = debounce(raw, WINDOW);

	tx.send("kivu".to_string()).await.expect("Send must succeed.");
	time::sleep(Duration::from_millis(400)).await;
	tx.send("akagera".to_string()).await.expect("Send must succeed.");
	time::sleep(Duration::from_millis(400)).await;

	assert_eq!(committed.recv().await.as_deref(), Some("kivu"));
	assert_eq!(committed.recv().await.as_deref(), Some("akagera"));
	assert!(committed.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn consecutive_duplicates_are_suppressed() {
	let (tx, raw) = mpsc::channel(16);
	let mut committed = debounce(raw, WINDOW);

	tx.send("kivu".to_string()).await.expect("Send must succeed.");
	time::sleep(Duration::from_millis(400)).await;
	tx.send("kivu".to_string()).await.expect("Send must succeed.");
	time::sleep(Duration::from_millis(400)).await;

	assert_eq!(committed.recv().await.as_deref(), Some("kivu"));
	assert!(committed.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn empty_string_commits_immediately() {
	let (tx, raw) = mpsc::channel(16);
	let mut committed = debounce(raw, WINDOW);

	tx.send("kivu".to_string()).await.expect("Send must succeed.");
	time::sleep(Duration::from_millis(50)).await;
	tx.send(String::new()).await.expect("Send must succeed.");

	// The clear signal commits without waiting for the quiescence window, and
	// the superseded pending value is dropped.
	assert_eq!(committed.recv().await.as_deref(), Some(""));

	time::sleep(Duration::from_millis(400)).await;

	assert!(committed.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn closing_the_input_flushes_the_pending_value() {
	let (tx, raw) = mpsc::channel(16);
	let mut committed = debounce(raw, WINDOW);

	tx.send("kivu".to_string()).await.expect("Send must succeed.");

	drop(tx);

	assert_eq!(committed.recv().await.as_deref(), Some("kivu"));
	assert!(committed.recv().await.is_none());
}
