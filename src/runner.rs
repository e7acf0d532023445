use crate::alert::AlertSink;
use crate::checks::url_check::UrlCheck;
use crate::checks::{Check, CheckFailure};
use crate::outcome::RunOutcome;
use log::{debug, error, info};
use reqwest::Client;

/// Runs every check in order and stops at the first failure.
///
/// The first failure is escalated to the alert sink exactly once. A failure to deliver the alert
/// is logged and does not change the outcome.
pub async fn run<S>(checks: Vec<Check>, alert_sink: &S) -> RunOutcome
where
    S: AlertSink + ?Sized,
{
    run_with_client(checks, Client::builder().build(), alert_sink).await
}

async fn run_with_client<S>(
    checks: Vec<Check>,
    client: Result<Client, reqwest::Error>,
    alert_sink: &S,
) -> RunOutcome
where
    S: AlertSink + ?Sized,
{
    info!("Running {} checks", checks.len());

    let client = match client {
        Ok(client) => client,
        Err(e) => {
            // Without a client not a single URL can be requested.
            let Some(check) = checks.first() else {
                return RunOutcome::AllPassed;
            };
            let failure = CheckFailure::Request {
                check: check.name.clone(),
                url: check.urls.first().cloned().unwrap_or_default(),
                source: e,
            };
            return escalate(failure, alert_sink).await;
        }
    };

    for check in &checks {
        let url_check = UrlCheck::new(check, &client);
        info!("Running check {}", url_check.name());
        if let Err(failure) = url_check.run().await {
            return escalate(failure, alert_sink).await;
        }
        info!("Check {} passed", url_check.name());
    }

    info!("All checks passed");
    RunOutcome::AllPassed
}

async fn escalate<S>(failure: CheckFailure, alert_sink: &S) -> RunOutcome
where
    S: AlertSink + ?Sized,
{
    error!("{}", failure);
    debug!("Escalating failure of {} at {}", failure.check(), failure.url());
    match alert_sink.send(&failure.to_string()).await {
        Ok(()) => info!("Alert has been sent"),
        Err(e) => error!("Failed to send alert: {}", e),
    }
    RunOutcome::Halted(failure)
}
