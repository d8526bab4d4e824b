use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub accommodation_id: i32,
    pub package_id: Option<i32>,
    pub check_in: Date,
    pub check_out: Date,
    pub adults: i32,
    pub children: i32,
    pub rooms: i32,
    pub food_veg: i32,
    pub food_nonveg: i32,
    pub food_jain: i32,
    pub total_amount: f64,
    pub advance_amount: f64,
    /// One of `pending`, `success`, `failed`, `expired`.
    pub payment_status: String,
    #[sea_orm(unique)]
    pub payment_txn_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accommodation::Entity",
        from = "Column::AccommodationId",
        to = "super::accommodation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Accommodation,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
