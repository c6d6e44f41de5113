use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub maintenance_id: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::maintenance_updates::Entity")]
    MaintenanceUpdates,
}

impl Related<super::maintenance_updates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceUpdates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
