/// Booking entity and request/response DTOs
pub mod booking;
/// One-hour bookable time window
pub mod slot;
/// Weekly working-hours template
pub mod working_hours;
