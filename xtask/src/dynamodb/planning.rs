//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the HASH key attribute, if the table reports one.
    pub partition_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Archived, archiving or locked by inaccessible encryption credentials.
    Unusable,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with the wrong key; it cannot be changed in place.
    KeyMismatch {
        table_name: String,
        expected: String,
        found: String,
    },
    /// Table exists but cannot serve requests.
    Unusable { table_name: String },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    if state.status == TableStatus::Unusable {
        return DeployPlan::Unusable {
            table_name: desired.table_name.clone(),
        };
    }

    match state.partition_key.as_deref() {
        Some(found) if found != desired.partition_key.name => DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.name.clone(),
            found: found.to_string(),
        },
        _ => DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => vec![
            format!("~ Table '{}' is keyed by '{}'", table_name, found),
            format!("  Expected partition key '{}' (recreate with --destroy)", expected),
        ],
        DeployPlan::Unusable { table_name } => vec![
            format!("~ Table '{}' exists but is not usable", table_name),
            "  Restore it or recreate with --destroy".to_string(),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::users_table_config;

    fn active_table(partition_key: &str) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition_key.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = users_table_config();
        assert_eq!(
            calculate_deploy_plan(None, &desired),
            DeployPlan::CreateTable { config: desired }
        );
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let plan = calculate_deploy_plan(Some(&active_table("id")), &users_table_config());
        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "users".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_partition_key_is_reported() {
        let plan = calculate_deploy_plan(Some(&active_table("PK")), &users_table_config());
        assert_eq!(
            plan,
            DeployPlan::KeyMismatch {
                table_name: "users".to_string(),
                expected: "id".to_string(),
                found: "PK".to_string(),
            }
        );
    }

    #[test]
    fn test_unusable_table_is_reported() {
        let state = TableState {
            status: TableStatus::Unusable,
            partition_key: Some("id".to_string()),
        };

        assert_eq!(
            calculate_deploy_plan(Some(&state), &users_table_config()),
            DeployPlan::Unusable {
                table_name: "users".to_string()
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(Some(&active_table("id")), "users"),
            DestroyPlan::DeleteTable {
                table_name: "users".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "users"),
            DestroyPlan::AlreadyGone {
                table_name: "users".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = DeployPlan::CreateTable {
            config: users_table_config(),
        };
        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: users",
                "  Partition key: id (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }

    #[test]
    fn test_format_destroy_plan() {
        let plan = DestroyPlan::DeleteTable {
            table_name: "users".to_string(),
        };
        assert_eq!(
            format_destroy_plan(&plan),
            vec!["- Delete table: users (ALL DATA WILL BE LOST)"]
        );
    }
}
