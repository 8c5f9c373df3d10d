//! Page view-model endpoints.
//!
//! Each request mounts the page's view binder, waits for its fetches to
//! settle, and returns the snapshot. The view is torn down when the handler
//! returns, which also stops any page timers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiJson, ApiQuery, ApiResponse, ApiResult};
use crate::errors::{AppError, ErrorDetails, ErrorResponse};
use crate::views::{
    BookingFlow, ContactForm, ContactPage, ContactView, FormPhase, GalleryView, HomePage,
    HomeView, MediaPartition, ServicesPage, ServicesView, ViewState,
};
use crate::AppState;

/// GET /api/pages/home - Home page view model.
pub async fn home_page(State(state): State<AppState>) -> ApiResult<ViewState<HomePage>> {
    let mut view = HomeView::mount(state.data.clone(), state.config.hero_interval);
    view.ready().await?;
    success(view.snapshot())
}

/// GET /api/pages/services - Services page view model.
pub async fn services_page(State(state): State<AppState>) -> ApiResult<ViewState<ServicesPage>> {
    let mut view = ServicesView::mount(state.data.clone());
    view.ready().await?;
    success(view.snapshot())
}

/// GET /api/pages/gallery - Gallery page view model.
pub async fn gallery_page(State(state): State<AppState>) -> ApiResult<ViewState<MediaPartition>> {
    let mut view = GalleryView::mount(state.data.clone());
    view.ready().await?;
    success(view.snapshot())
}

/// Navigation state handed over from the Services page.
#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub service: Option<String>,
}

/// GET /api/pages/contact - Contact page view model.
pub async fn contact_page(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ContactQuery>,
) -> ApiResult<ContactPage> {
    let mut view = ContactView::mount(state.data.clone(), params.service);
    view.ready().await?;
    success(view.snapshot())
}

/// What the client asks the booking form to do.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormAction {
    #[default]
    Submit,
    SendAnother,
}

/// Form endpoint body: the fields and phase the client shows, plus the action.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub action: FormAction,
    #[serde(default)]
    pub phase: FormPhase,
    #[serde(flatten)]
    pub form: ContactForm,
}

/// Result of a successful form action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// Set when a booking was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    pub flow: BookingFlow,
}

/// Failed form submission: the error plus the flow with the fields kept.
pub struct FormRejection {
    pub error: AppError,
    pub flow: BookingFlow,
}

#[derive(Serialize)]
struct FormRejectionBody {
    success: bool,
    error: ErrorDetails,
    data: BookingFlow,
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = FormRejectionBody {
            success: false,
            error: ErrorResponse::new(&self.error).error,
            data: self.flow,
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/pages/contact - Submit the booking form, or start another after a submission.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactSubmission>,
) -> Result<ApiResponse<SubmissionOutcome>, FormRejection> {
    let mut flow = BookingFlow::resume(request.form, request.phase);

    let result = match request.action {
        FormAction::Submit => flow.submit(&state.data).await.map(Some),
        FormAction::SendAnother => flow.send_another().map(|()| None),
    };

    match result {
        Ok(booking_id) => Ok(ApiResponse::new(SubmissionOutcome { booking_id, flow })),
        Err(error) => Err(FormRejection { error, flow }),
    }
}
