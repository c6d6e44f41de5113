use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_updates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub maintenance_update_id: String,
    pub maintenance_id: String,
    pub maintenance_status: String,
    pub message: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintenances::Entity",
        from = "Column::MaintenanceId",
        to = "super::maintenances::Column::MaintenanceId"
    )]
    Maintenance,
}

impl Related<super::maintenances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
