//! Service directory endpoint.

use tracing::{debug, info};
use voxdesk_core::{Result, ServiceDirectory, ServiceList};

use crate::{endpoints::APIS_PATH, GatewayClient};

impl GatewayClient {
    /// Fetch the enabled services, failing on any transport, status or parse error.
    pub async fn fetch_services(&self) -> Result<ServiceList> {
        let directory: ServiceDirectory = self.send_json(self.get(APIS_PATH)).await?;
        Ok(ServiceList::from(directory))
    }

    /// Load the enabled services for display.
    ///
    /// Any failure resolves to an empty list. Nothing is retried.
    pub async fn load_services(&self) -> ServiceList {
        match self.fetch_services().await {
            Ok(services) => {
                info!("Loaded {} enabled services", services.len());
                services
            }
            Err(e) => {
                debug!("Service directory unavailable: {e}");
                ServiceList::empty()
            }
        }
    }
}
