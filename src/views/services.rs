//! Services page.

use serde::Serialize;

use super::{PageMount, ViewState};
use crate::access::DataAccess;
use crate::errors::AppError;
use crate::models::ServiceItem;

/// Shown in place of the list when no services could be loaded.
pub const SERVICES_PLACEHOLDER: &str = "Our service list is being updated. Please contact us for details.";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub services: Vec<ServiceItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl ServicesPage {
    fn new(services: Vec<ServiceItem>) -> Self {
        let placeholder = services.is_empty().then_some(SERVICES_PLACEHOLDER);
        Self {
            services,
            placeholder,
        }
    }
}

/// The Services page.
pub struct ServicesView {
    page: PageMount<ServicesPage>,
}

impl ServicesView {
    pub fn mount(data: DataAccess) -> Self {
        let page = PageMount::mount("services", async move {
            ServicesPage::new(data.services().await)
        });
        Self { page }
    }

    pub async fn ready(&mut self) -> Result<ServicesPage, AppError> {
        self.page.wait_ready().await
    }

    pub fn snapshot(&self) -> ViewState<ServicesPage> {
        self.page.state()
    }
}
