mod accommodation;
mod booking;
