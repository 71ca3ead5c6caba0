// libs/booking-cell/src/services/booking.rs
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info};

use crate::models::{BookingRequest, BookingResult, BookingSuccess};
use crate::services::confirmation::generate_confirmation_number;

/// Simulated booking. Nothing is reserved or stored: the slot is a fixed
/// function of the doctor type and the confirmation number is random.
#[derive(Debug, Default, Clone, Copy)]
pub struct BookingService;

impl BookingService {
    pub fn new() -> Self {
        Self
    }

    pub fn book_appointment(&self, request: BookingRequest) -> BookingResult {
        self.book_appointment_with_rng(request, &mut OsRng)
    }

    pub fn book_appointment_with_rng<R>(&self, request: BookingRequest, rng: &mut R) -> BookingResult
    where
        R: RngCore + ?Sized,
    {
        let doctor_type = request.doctor_type();
        let slot = doctor_type.booked_slot();
        debug!("Resolved doctor type {:?} to slot '{}'", doctor_type, slot);

        let confirmation_number = generate_confirmation_number(rng)?;

        info!(
            "Booked simulated appointment {} with a {} for {}",
            confirmation_number, request.doctor_type, slot
        );

        Ok(BookingSuccess::new(request, slot, confirmation_number))
    }
}
