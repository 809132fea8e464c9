//! School database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::School;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_delete = "Cascade"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for School {
    fn from(model: Model) -> Self {
        School {
            id: model.id,
            organization_id: model.organization_id,
            name: model.name,
            address: model.address,
            city: model.city,
            state: model.state,
            zip: model.zip,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_into_school() {
        let now = chrono::Utc::now();
        let org_id = Uuid::new_v4();
        let model = Model {
            id: Uuid::new_v4(),
            organization_id: org_id,
            name: "Springfield Elementary".to_string(),
            address: "19 Plympton St".to_string(),
            city: "Springfield".to_string(),
            state: "OR".to_string(),
            zip: "97477".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
        };

        let school = School::from(model);
        assert_eq!(school.organization_id, org_id);
        assert_eq!(school.zip, "97477");
    }
}
