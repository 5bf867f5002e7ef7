use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cotacoes table: append-only log of fetched USD-BRL quotes.
        // Quote values stay text exactly as the upstream emits them.
        manager
            .create_table(
                Table::create()
                    .table(Cotacoes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cotacoes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cotacoes::Code).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Codein).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Name).string().not_null())
                    .col(ColumnDef::new(Cotacoes::High).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Low).string().not_null())
                    .col(ColumnDef::new(Cotacoes::VarBid).string().not_null())
                    .col(ColumnDef::new(Cotacoes::PctChange).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Bid).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Ask).string().not_null())
                    .col(ColumnDef::new(Cotacoes::Timestamp).string().not_null())
                    .col(ColumnDef::new(Cotacoes::CreateDate).string().not_null())
                    .col(ColumnDef::new(Cotacoes::CreatedAt).timestamp().null())
                    .col(ColumnDef::new(Cotacoes::UpdatedAt).timestamp().null())
                    .col(ColumnDef::new(Cotacoes::DeletedAt).timestamp().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cotacoes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Cotacoes {
    Table,
    Id,
    Code,
    Codein,
    Name,
    High,
    Low,
    VarBid,
    PctChange,
    Bid,
    Ask,
    Timestamp,
    CreateDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
