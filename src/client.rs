// Device stream client: connect once, fold frames into gauges

use futures_util::StreamExt;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::aggregator;
use crate::config::StreamConfig;
use crate::models::DerivedGauges;

/// Consume the device stream, invoking `on_update` with the initial zero
/// gauges and after every decodable frame. Frames are handled one at a time
/// to completion; a frame that fails to decode is logged and dropped.
///
/// Reconnect policy: none. A server close ends the loop cleanly and returns
/// the last gauges; a transport error is propagated.
pub async fn run<F>(config: &StreamConfig, mut on_update: F) -> anyhow::Result<DerivedGauges>
where
    F: FnMut(&DerivedGauges),
{
    let url = config.ws_url();
    tracing::info!("Connecting to device stream at {}{}", config.host, config.path);

    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);
    let (mut ws_stream, _) = timeout(connect_timeout, connect_async(url.as_str()))
        .await
        .map_err(|_| {
            anyhow::anyhow!(
                "timed out connecting to {}{} after {}s",
                config.host,
                config.path,
                config.connect_timeout_secs
            )
        })??;
    tracing::info!("Connected to device stream");

    let mut gauges = DerivedGauges::default();
    on_update(&gauges);

    while let Some(frame) = ws_stream.next().await {
        match frame {
            Ok(Message::Text(text)) => match aggregator::apply_frame(&gauges, text.as_str()) {
                Ok(next) => {
                    gauges = next;
                    on_update(&gauges);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping undecodable frame");
                }
            },
            Ok(Message::Close(_)) => {
                tracing::info!("Device stream closed by server");
                break;
            }
            // Ping/pong is answered by tungstenite; binary frames are not
            // part of the stream protocol
            Ok(_) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(gauges)
}
