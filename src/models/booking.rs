//! Booking model and request validation.

use chrono::{Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Event categories offered by the booking form, as configured for the admin tool.
pub const EVENT_CATEGORIES: [&str; 11] = [
    "Wedding",
    "Engagement",
    "Ear Piercing",
    "Model",
    "Portrait",
    "Other",
    "Reception",
    "Birthday",
    "Corporate",
    "Maternity",
    "Baby Shower",
];

pub const DEFAULT_EVENT_CATEGORY: &str = EVENT_CATEGORIES[0];

/// Review status of a booking. This system only ever writes `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A booking ready to be written to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    pub phone_number: String,
    pub event_category: String,
    /// Selected service titles. Linked to `ServiceItem::title` by value.
    pub event_type: Vec<String>,
    /// Local midnight of the event day, epoch milliseconds
    pub date: i64,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewBooking {
    /// Store payload for this booking, with the write timestamp added.
    pub fn to_document(&self, created_at: i64) -> Result<Map<String, Value>, AppError> {
        match serde_json::to_value(self)? {
            Value::Object(mut map) => {
                map.insert("createdAt".to_string(), Value::from(created_at));
                Ok(map)
            }
            _ => Err(AppError::Internal(
                "booking did not serialize to an object".to_string(),
            )),
        }
    }
}

/// A booking as stored, with its assigned identifier.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(flatten)]
    pub booking: NewBooking,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub client_name: String,
    #[serde(default)]
    pub client_email: Option<String>,
    pub phone_number: String,
    pub event_category: String,
    #[serde(default)]
    pub event_type: Vec<String>,
    /// Date-only input, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Accepted for compatibility; the stored status is always `Pending`
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl CreateBookingRequest {
    /// Validate the request and build the booking to store.
    pub fn into_new_booking(self) -> Result<NewBooking, AppError> {
        if self.client_name.trim().is_empty() {
            return Err(AppError::invalid_field("clientName", "Name is required"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(AppError::invalid_field(
                "phoneNumber",
                "Phone number is required",
            ));
        }
        if !EVENT_CATEGORIES.contains(&self.event_category.as_str()) {
            return Err(AppError::invalid_field(
                "eventCategory",
                format!("Unknown event category: {:?}", self.event_category),
            ));
        }
        let event_type = selected_services(self.event_type)?;
        let date = parse_event_date(&self.date)?;

        Ok(NewBooking {
            client_name: self.client_name,
            client_email: non_blank(self.client_email),
            phone_number: self.phone_number,
            event_category: self.event_category,
            event_type,
            date,
            status: BookingStatus::Pending,
            notes: non_blank(self.notes),
        })
    }
}

/// The selected service titles as a set: blanks rejected, repeats dropped,
/// first-selected order kept.
fn selected_services(titles: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut selected: Vec<String> = Vec::with_capacity(titles.len());
    for title in titles {
        if title.trim().is_empty() {
            return Err(AppError::invalid_field(
                "eventType",
                "Service names must not be blank",
            ));
        }
        if !selected.contains(&title) {
            selected.push(title);
        }
    }
    if selected.is_empty() {
        return Err(AppError::invalid_field(
            "eventType",
            "Please select at least one service",
        ));
    }
    Ok(selected)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a date-only input into the epoch milliseconds of local midnight.
pub fn parse_event_date(input: &str) -> Result<i64, AppError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::invalid_field("date", format!("Invalid event date: {:?}", input))
    })?;
    local_midnight_millis(date)
}

/// Epoch milliseconds of the first local instant of `date`.
pub fn local_midnight_millis(date: NaiveDate) -> Result<i64, AppError> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Zones that skip midnight on a DST change start the day an hour later.
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::invalid_field("date", format!("No local midnight on {}", date)))
}
