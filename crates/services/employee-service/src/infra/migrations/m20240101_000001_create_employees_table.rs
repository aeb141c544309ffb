//! Migration: Create the employees table.

use domain::{MAX_EMPLOYEE_ID_LENGTH, MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
use sea_orm_migration::prelude::*;

// Widths match the rule set's length limits.
const NAME_WIDTH: u32 = MAX_NAME_LENGTH as u32;
const LABEL_WIDTH: u32 = MAX_LABEL_LENGTH as u32;
const EMPLOYEE_ID_WIDTH: u32 = MAX_EMPLOYEE_ID_LENGTH as u32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique keys on employee_id and email are the authoritative
        // duplicate guard; the service's pre-check only short-circuits.
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string_len(NAME_WIDTH).not_null())
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .string_len(EMPLOYEE_ID_WIDTH)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string_len(NAME_WIDTH)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Employees::Department).string_len(LABEL_WIDTH).not_null())
                    .col(ColumnDef::new(Employees::DateOfJoining).date().not_null())
                    .col(ColumnDef::new(Employees::Role).string_len(LABEL_WIDTH).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    EmployeeId,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}
