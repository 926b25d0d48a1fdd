use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string(GuildConfig::Prefix))
                    .col(json(GuildConfig::TrustedUsers))
                    .col(string_null(GuildConfig::MuteRole))
                    .col(string_null(GuildConfig::JoinLogChannel))
                    .col(string_null(GuildConfig::ExitLogChannel))
                    .col(string_null(GuildConfig::ModLogChannel))
                    .col(
                        timestamp_with_time_zone(GuildConfig::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    Prefix,
    TrustedUsers,
    MuteRole,
    JoinLogChannel,
    ExitLogChannel,
    ModLogChannel,
    UpdatedAt,
}
