use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use yatra_types::{AppEvent, Speaker};

/// Print whatever the event loop produces. Queued output is printed before
/// cancellation is honoured.
pub async fn display_loop(
    app_to_display_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            biased;
            event = app_to_display_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::ShowTranslation { result, .. } => {
                if result.succeeded {
                    println!("{}", result.translation);
                } else {
                    println!("{}  (offline placeholder)", result.translation);
                }
            }
            AppEvent::ShowTurn {
                speaker, translated, ..
            } => {
                let label = match speaker {
                    Speaker::A => "a",
                    Speaker::B => "b",
                };
                println!("{label} > {translated}");
            }
            AppEvent::StatusUpdate(status) => eprintln!("{status}"),
            AppEvent::Shutdown => break,
            _ => {}
        }
    }

    tracing::debug!("Display loop finished");
    Ok(())
}
