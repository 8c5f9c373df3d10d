//! Booking API endpoints.

use axum::extract::State;

use super::{success, ApiJson, ApiResult};
use crate::models::{Booking, CreateBookingRequest};
use crate::AppState;

/// POST /api/bookings - Create a new booking.
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> ApiResult<Booking> {
    let booking = request.into_new_booking()?;
    let id = state.data.create_booking(booking.clone()).await?;

    success(Booking { id, booking })
}
