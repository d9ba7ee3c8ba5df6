// Standard library
use std::net::IpAddr;

// 3rd party crates
use futures::{stream::FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

// Project imports
use crate::utility::rotator::CredentialRotator;

// Current module imports
use super::errors::ProvisionError;
use super::traits::KeyPortal;
use super::types::{ApiKey, KeyRequest, ProvisionConfig, Session};

/// Runs the provisioning protocol and fills `rotator` with fresh keys.
///
/// Login, listing, and ending up with zero keys are fatal. Individual revoke or
/// create failures are logged and skipped. Returns the number of keys created.
pub async fn provision<P>(
    portal: &P,
    config: &ProvisionConfig,
    egress_ip: IpAddr,
    rotator: &CredentialRotator,
) -> Result<usize, ProvisionError>
where
    P: KeyPortal + ?Sized,
{
    let session: Session = portal.login(&config.email, &config.password).await?;
    info!("🔑 Logged in to the developer portal");

    let stale: Vec<ApiKey> = portal
        .list_keys(&session)
        .await?
        .into_iter()
        .filter(|key| key.name == config.key_name)
        .collect();

    if stale.is_empty() {
        debug!(key_name = %config.key_name, "No stale keys to revoke");
    } else {
        info!(
            key_name = %config.key_name,
            count = stale.len(),
            "Revoking keys left by a previous run"
        );
        for key in &stale {
            match portal.revoke_key(&session, key).await {
                Ok(()) => debug!(
                    id = %key.id,
                    cidr_ranges = ?key.cidr_ranges,
                    "Revoked stale key"
                ),
                Err(e) => warn!(id = %key.id, error = %e, "Failed to revoke stale key"),
            }
        }
    }

    let request: KeyRequest = KeyRequest::new(&config.key_name, egress_ip);
    let mut futures = FuturesUnordered::new();
    for _ in 0..config.key_count {
        futures.push(portal.create_key(&session, &request));
    }

    let mut created: usize = 0;
    while let Some(result) = futures.next().await {
        match result {
            Ok(token) => {
                rotator.push(token);
                created += 1;
                info!(ip = %egress_ip, "New key created");
            }
            Err(e) => {
                warn!(error = %e, "Key creation failed");
            }
        }
    }

    if created == 0 {
        return Err(ProvisionError::NoKeysCreated {
            attempted: config.key_count,
        });
    }

    info!(
        created,
        requested = config.key_count,
        pool_size = rotator.len(),
        "Credential pool ready"
    );
    Ok(created)
}
