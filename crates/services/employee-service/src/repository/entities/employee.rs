//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub employee_id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: Date,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            employee_id: model.employee_id,
            email: model.email,
            phone: model.phone,
            department: model.department,
            date_of_joining: model.date_of_joining,
            role: model.role,
        }
    }
}
