// =====================================================================================
// BOOKING CELL - SIMULATED APPOINTMENT BOOKING WEBHOOK
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    BookedSlot, BookingData, BookingRequest, BookingResult, BookingSuccess, ConfirmationNumber,
    DoctorType,
};
pub use router::{booking_routes, booking_routes_with};

pub mod api {
    pub use crate::services::booking::BookingService;
}
