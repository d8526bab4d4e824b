pub use super::accommodation::Entity as Accommodation;
pub use super::booking::Entity as Booking;
pub use super::user::Entity as User;
