//! Session lifecycle: probe, login, and re-probe.
//!
//! The client never tracks an expiry. The daemon drops sessions on timeout or restart,
//! so every operation verifies the session with a cheap probe first.

use tracing::{debug, info, warn};

use qbit_webui_types::DaemonError;

use super::{QbitClient, map_transport_error};
use crate::ops::WebUiOps;
use crate::response;

#[allow(private_bounds)]
impl<T: WebUiOps> QbitClient<T> {
    /// Makes sure the session is authorized, logging in at most once.
    ///
    /// The session is probed again after a login instead of trusting the login answer,
    /// as some daemons accept the login and still reject the resulting session.
    pub(crate) async fn ensure_authorized(&self) -> Result<(), DaemonError> {
        if self.authorized().await {
            return Ok(());
        }

        warn!("Session for {} is not authorized, logging in", self.endpoint);
        self.login().await?;

        if self.authorized().await {
            return Ok(());
        }
        Err(DaemonError::Unauthorized {
            endpoint: self.endpoint.clone(),
        })
    }

    /// Probes the session with the version endpoint.
    async fn authorized(&self) -> bool {
        match self.ops.app_version().await {
            Ok(response) => {
                let authorized = response::interpret_probe(&response);
                debug!("Authorization probe answered {}", response.status);
                authorized
            }
            Err(e) => {
                debug!("Authorization probe failed: {e}");
                false
            }
        }
    }

    async fn login(&self) -> Result<(), DaemonError> {
        debug!("Logging in as {}", self.credentials.username());
        let response = self
            .ops
            .auth_login(self.credentials.username(), self.credentials.password())
            .await
            .map_err(map_transport_error)?;
        response::interpret_login(&response, &self.endpoint)?;

        info!("Logged in to qBittorrent WebUI at {}", self.endpoint);
        Ok(())
    }
}
