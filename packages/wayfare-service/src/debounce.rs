use std::time::Duration;

use tokio::{sync::mpsc, time};

const CHANNEL_CAPACITY: usize = 16;

/// Converts a raw keystroke stream into committed queries: the latest value is
/// committed once no new input arrives for `window`, consecutive duplicates
/// are suppressed, and the empty string commits immediately as a clear signal.
/// Any pending value flushes when the input closes.
pub fn debounce(input: mpsc::Receiver<String>, window: Duration) -> mpsc::Receiver<String> {
	let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

	tokio::spawn(run(input, tx, window));

	rx
}

async fn run(mut input: mpsc::Receiver<String>, tx: mpsc::Sender<String>, window: Duration) {
	let mut pending: Option<String> = None;
	let mut last_committed: Option<String> = None;

	loop {
		let received = if pending.is_some() {
			tokio::select! {
				received = input.recv() => received,
				() = time::sleep(window) => {
					if let Some(value) = pending.take()
						&& commit(&tx, &mut last_committed, value).await.is_err()
					{
						return;
					}

					continue;
				},
			}
		} else {
			input.recv().await
		};
		let Some(text) = received else {
			if let Some(value) = pending.take() {
				let _ = commit(&tx, &mut last_committed, value).await;
			}

			return;
		};

		if text.is_empty() {
			pending = None;

			if commit(&tx, &mut last_committed, text).await.is_err() {
				return;
			}
		} else {
			pending = Some(text);
		}
	}
}

async fn commit(
	tx: &mpsc::Sender<String>,
	last_committed: &mut Option<String>,
	value: String,
) -> Result<(), mpsc::error::SendError<String>> {
	if last_committed.as_deref() == Some(value.as_str()) {
		return Ok(());
	}

	*last_committed = Some(value.clone());

	tx.send(value).await
}
