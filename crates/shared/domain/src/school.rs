//! School record. Passive data belonging to an organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct School {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_round_trips_json() {
        let now = Utc::now();
        let school = School {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            name: "Springfield Elementary".to_string(),
            address: "19 Plympton St".to_string(),
            city: "Springfield".to_string(),
            state: "OR".to_string(),
            zip: "97477".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&school).unwrap();
        assert!(json.contains("\"organizationId\""));

        let back: School = serde_json::from_str(&json).unwrap();
        assert_eq!(back, school);
    }
}
