//! Contact page: the booking form and its submission flow.

use serde::{Deserialize, Serialize};

use super::{PageMount, ViewState};
use crate::access::DataAccess;
use crate::errors::AppError;
use crate::models::{CreateBookingRequest, ServiceItem, DEFAULT_EVENT_CATEGORY, EVENT_CATEGORIES};

/// Alert shown when a booking could not be written.
pub const SUBMIT_FAILED_ALERT: &str =
    "Something went wrong. Please try again or call us directly.";

/// Static contact details shown next to the form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudioContact {
    pub address: &'static str,
    pub maps_url: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const STUDIO_CONTACT: StudioContact = StudioContact {
    address: "KPS COMPLEX, 59, Dindigul Rd, Anna Nagar, Palani, Tamil Nadu 624601",
    maps_url: "https://maps.app.goo.gl/YE21hm8exzXvV4o96",
    phone: "+91 98942 25111",
    email: "aalamstudiopalani@gmail.com",
};

/// Field values of the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Date-only input, `YYYY-MM-DD`
    pub date: String,
    pub event_category: String,
    /// Selected service titles, in the order they were picked
    pub selected_services: Vec<String>,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            event_category: DEFAULT_EVENT_CATEGORY.to_string(),
            selected_services: Vec::new(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    /// Select the service if it is not selected, deselect it otherwise.
    pub fn toggle_service(&mut self, title: &str) {
        if let Some(pos) = self.selected_services.iter().position(|s| s == title) {
            self.selected_services.remove(pos);
        } else {
            self.selected_services.push(title.to_string());
        }
    }

    pub fn to_request(&self) -> CreateBookingRequest {
        CreateBookingRequest {
            client_name: self.name.clone(),
            client_email: Some(self.email.clone()),
            phone_number: self.phone.clone(),
            event_category: self.event_category.clone(),
            event_type: self.selected_services.clone(),
            date: self.date.clone(),
            notes: Some(self.message.clone()),
            status: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Booking form state machine: `Editing -> Submitting -> Submitted | Editing`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingFlow {
    pub form: ContactForm,
    pub phase: FormPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    pub can_submit: bool,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::with_form(ContactForm::default())
    }
}

impl BookingFlow {
    pub fn with_form(form: ContactForm) -> Self {
        Self::resume(form, FormPhase::Editing)
    }

    /// Rebuild a flow from the state the client is showing.
    pub fn resume(form: ContactForm, phase: FormPhase) -> Self {
        let mut flow = Self {
            form,
            phase,
            alert: None,
            can_submit: false,
        };
        flow.refresh();
        flow
    }

    fn refresh(&mut self) {
        self.can_submit = self.phase == FormPhase::Editing && !self.form.selected_services.is_empty();
    }

    pub fn toggle_service(&mut self, title: &str) {
        if self.phase == FormPhase::Editing {
            self.form.toggle_service(title);
            self.refresh();
        }
    }

    /// Submit the form as a new booking.
    ///
    /// On success the form is cleared and the flow is `Submitted`. On failure
    /// the flow returns to `Editing` with every field kept and an alert set.
    pub async fn submit(&mut self, data: &DataAccess) -> Result<String, AppError> {
        match self.phase {
            FormPhase::Editing => {}
            FormPhase::Submitting => {
                return Err(AppError::BadRequest(
                    "A submission is already in progress".to_string(),
                ))
            }
            FormPhase::Submitted => {
                return Err(AppError::BadRequest(
                    "This form was already sent".to_string(),
                ))
            }
        }
        if self.form.selected_services.is_empty() {
            return Err(AppError::invalid_field(
                "selectedServices",
                "Please select at least one service",
            ));
        }

        self.phase = FormPhase::Submitting;
        self.alert = None;
        self.refresh();

        let result = match self.form.to_request().into_new_booking() {
            Ok(booking) => data.create_booking(booking).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(id) => {
                self.form = ContactForm::default();
                self.phase = FormPhase::Submitted;
                self.refresh();
                Ok(id)
            }
            Err(e) => {
                tracing::error!("Booking error: {}", e);
                self.alert = Some(match &e {
                    AppError::Validation { message, .. } => message.clone(),
                    _ => SUBMIT_FAILED_ALERT.to_string(),
                });
                self.phase = FormPhase::Editing;
                self.refresh();
                Err(e)
            }
        }
    }

    /// Leave the confirmation and start a fresh form.
    pub fn send_another(&mut self) -> Result<(), AppError> {
        if self.phase != FormPhase::Submitted {
            return Err(AppError::BadRequest(
                "Nothing has been sent from this form yet".to_string(),
            ));
        }
        *self = Self::default();
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChip {
    pub id: String,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub studio: StudioContact,
    pub categories: &'static [&'static str],
    pub services: ViewState<Vec<ServiceChip>>,
    pub flow: BookingFlow,
}

/// The Contact page: service chips loaded on mount and the booking flow.
pub struct ContactView {
    page: PageMount<Vec<ServiceItem>>,
    flow: BookingFlow,
    preselected: Option<String>,
}

impl ContactView {
    /// Mount the page. `preselected` is a service title handed over by the
    /// Services page; it is applied once the services have loaded.
    pub fn mount(data: DataAccess, preselected: Option<String>) -> Self {
        let page = PageMount::mount("contact", async move { data.services().await });
        Self {
            page,
            flow: BookingFlow::default(),
            preselected,
        }
    }

    pub async fn ready(&mut self) -> Result<Vec<ServiceItem>, AppError> {
        let services = self.page.wait_ready().await?;
        if let Some(title) = self.preselected.take() {
            if services.iter().any(|s| s.title == title) {
                self.flow.toggle_service(&title);
            } else {
                tracing::debug!(%title, "Ignoring unknown pre-selected service");
            }
        }
        Ok(services)
    }

    pub fn snapshot(&self) -> ContactPage {
        let services = match self.page.state() {
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(services) => ViewState::Ready(
                services
                    .into_iter()
                    .map(|s| ServiceChip {
                        selected: self.flow.form.selected_services.contains(&s.title),
                        id: s.id,
                        title: s.title,
                    })
                    .collect(),
            ),
        };

        ContactPage {
            studio: STUDIO_CONTACT,
            categories: &EVENT_CATEGORIES,
            services,
            flow: self.flow.clone(),
        }
    }
}
