use crate::server::data::accommodation::AccommodationRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, accommodation::AccommodationFactory},
};

mod find_with_owner_email;
