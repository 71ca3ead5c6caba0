use rand::RngCore;
use tracing::error;

use shared_models::error::BookingError;

use crate::models::ConfirmationNumber;

/// Draws a fresh confirmation number from `rng`. No uniqueness is tracked;
/// collisions are only as unlikely as the random source makes them.
pub fn generate_confirmation_number<R>(rng: &mut R) -> Result<ConfirmationNumber, BookingError>
where
    R: RngCore + ?Sized,
{
    let mut bytes = [0u8; ConfirmationNumber::BYTES];
    rng.try_fill_bytes(&mut bytes).map_err(|e| {
        error!("Failed to draw confirmation number bytes: {}", e);
        BookingError::Internal(e.to_string())
    })?;

    Ok(ConfirmationNumber::from_bytes(bytes))
}
