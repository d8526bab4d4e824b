use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accommodation::Entity")]
    Accommodation,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
