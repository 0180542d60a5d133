//! Turns a calendar selection into a booking payload.

use chrono::NaiveDate;
use chrono_tz::Tz;
use quickserve_core::availability::slot_bounds_utc;
use quickserve_core::errors::QuickServeResult;
use quickserve_core::models::booking::CreateBookingRequest;
use quickserve_core::models::slot::Slot;
use uuid::Uuid;

/// A customer's in-progress selection on the booking calendar: a listing,
/// a date, and one of the slots offered for it.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub service_listing_id: Uuid,
    pub date: NaiveDate,
    pub slot: Slot,
    /// Timezone the provider's working hours are expressed in.
    pub timezone: Tz,
}

impl BookingDraft {
    /// Builds the `POST /bookings` payload, anchoring the slot to absolute
    /// UTC boundaries.
    ///
    /// # Errors
    ///
    /// Validation error when the slot falls on a DST transition and has no
    /// unambiguous UTC equivalent.
    pub fn into_request(self) -> QuickServeResult<CreateBookingRequest> {
        let (start_time, end_time) = slot_bounds_utc(self.date, self.slot, self.timezone)?;
        Ok(CreateBookingRequest {
            service_listing_id: self.service_listing_id,
            start_time,
            end_time,
        })
    }
}
