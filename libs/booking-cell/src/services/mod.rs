pub mod booking;
pub mod confirmation;

pub use booking::BookingService;
pub use confirmation::generate_confirmation_number;
