//! Tool tables migration
//!
//! Mirrors the schema the desktop tool creates, so an existing store is left untouched.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn seq_no<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CmdTools::Table)
                    .if_not_exists()
                    .col(seq_no(CmdTools::ISeqNo))
                    .col(ColumnDef::new(CmdTools::Cmd).text().null())
                    .col(ColumnDef::new(CmdTools::Example).text().null())
                    .col(ColumnDef::new(CmdTools::Remark1).text().null())
                    .col(ColumnDef::new(CmdTools::Remark2).text().null())
                    .col(ColumnDef::new(CmdTools::Type).string_len(100).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PromptTools::Table)
                    .if_not_exists()
                    .col(seq_no(PromptTools::ISeqNo))
                    .col(ColumnDef::new(PromptTools::Prompt).text().null())
                    .col(ColumnDef::new(PromptTools::PromptEng).text().null())
                    .col(ColumnDef::new(PromptTools::Classification).string_len(100).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WinProgram::Table)
                    .if_not_exists()
                    .col(seq_no(WinProgram::ISeqNo))
                    .col(ColumnDef::new(WinProgram::Remark1).text().null())
                    .col(ColumnDef::new(WinProgram::ProgramPathAndName).text().null())
                    .col(ColumnDef::new(WinProgram::ClickEndRun).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WebSite::Table)
                    .if_not_exists()
                    .col(seq_no(WebSite::ISeqNo))
                    .col(ColumnDef::new(WebSite::Remark).text().null())
                    .col(ColumnDef::new(WebSite::Classification).string_len(100).null())
                    .col(ColumnDef::new(WebSite::Website).text().null())
                    .col(ColumnDef::new(WebSite::Account).string_len(255).null())
                    .col(ColumnDef::new(WebSite::AccountWebid).string_len(255).null())
                    .col(ColumnDef::new(WebSite::Password).string_len(255).null())
                    .col(ColumnDef::new(WebSite::PasswordWebid).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebSite::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WinProgram::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PromptTools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CmdTools::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CmdTools {
    #[sea_orm(iden = "CmdTools")]
    Table,
    #[sea_orm(iden = "iSeqNo")]
    ISeqNo,
    Cmd,
    Example,
    Remark1,
    Remark2,
    #[sea_orm(iden = "Type")]
    Type,
}

#[derive(DeriveIden)]
enum PromptTools {
    #[sea_orm(iden = "PromptTools")]
    Table,
    #[sea_orm(iden = "iSeqNo")]
    ISeqNo,
    #[sea_orm(iden = "Prompt")]
    Prompt,
    #[sea_orm(iden = "Prompt_Eng")]
    PromptEng,
    #[sea_orm(iden = "Classification")]
    Classification,
}

#[derive(DeriveIden)]
enum WinProgram {
    #[sea_orm(iden = "WinProgram")]
    Table,
    #[sea_orm(iden = "iSeqNo")]
    ISeqNo,
    Remark1,
    #[sea_orm(iden = "ProgramPathAndName")]
    ProgramPathAndName,
    #[sea_orm(iden = "ClickEndRun")]
    ClickEndRun,
}

#[derive(DeriveIden)]
enum WebSite {
    #[sea_orm(iden = "WebSite")]
    Table,
    #[sea_orm(iden = "iSeqNo")]
    ISeqNo,
    #[sea_orm(iden = "Remark")]
    Remark,
    #[sea_orm(iden = "Classification")]
    Classification,
    #[sea_orm(iden = "Website")]
    Website,
    Account,
    AccountWebid,
    Password,
    PasswordWebid,
}
