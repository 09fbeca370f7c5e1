use std::sync::Arc;
use tracing::{debug, error, warn};
use crate::domain::{envelope::Envelope, error::EtlError, ports::Notifier};

/// Shared failure path for both handlers: log, alert when a notifier is
/// configured, and flatten the error into a failure envelope.
///
/// A notifier error is logged and dropped so it never replaces the
/// original failure in the envelope.
pub async fn report_failure(
    notifier: Option<&Arc<dyn Notifier>>,
    subject: &str,
    err: &EtlError,
) -> Envelope {
    let message = err.to_string();
    error!("{}: {}", subject, message);

    match notifier {
        Some(notifier) => {
            debug!("Dispatching failure alert");
            if let Err(e) = notifier.notify(subject, &message).await {
                warn!("Alert not delivered: {}", e);
            }
        }
        None => debug!("No notification target configured, skipping alert"),
    }

    Envelope::failure(message)
}
