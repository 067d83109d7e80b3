use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 教师表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::DisplayName).string().null())
                    .col(ColumnDef::new(Teachers::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ==================== 公告表 ====================
        // 时间字段以 ISO-8601 字符串存储，按字典序比较
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Message).text().not_null())
                    .col(ColumnDef::new(Announcements::StartDate).string().null())
                    .col(
                        ColumnDef::new(Announcements::ExpirationDate)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Announcements::CreatedAt).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_created_at")
                    .table(Announcements::Table)
                    .col(Announcements::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_expiration_date")
                    .table(Announcements::Table)
                    .col(Announcements::ExpirationDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Username,
    DisplayName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Message,
    StartDate,
    ExpirationDate,
    CreatedAt,
}
