use crate::core::resources::{ResourceItem, ResourceTable};
use crate::storage::ResourceStore;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, cmd_tool, prompt_tool, web_site, win_program};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// All rows of one tool table, ordered by sequence number
    pub async fn list_table(&self, table: ResourceTable) -> Result<Vec<ResourceItem>> {
        debug!("Listing table {}", table.table_name());

        let items = match table {
            ResourceTable::CmdTools => into_items(
                entities::CmdTool::find()
                    .order_by_asc(cmd_tool::Column::SeqNo)
                    .all(&self.db)
                    .await,
            )?,
            ResourceTable::PromptTools => into_items(
                entities::PromptTool::find()
                    .order_by_asc(prompt_tool::Column::SeqNo)
                    .all(&self.db)
                    .await,
            )?,
            ResourceTable::WinPrograms => into_items(
                entities::WinProgram::find()
                    .order_by_asc(win_program::Column::SeqNo)
                    .all(&self.db)
                    .await,
            )?,
            ResourceTable::Websites => into_items(
                entities::WebSite::find()
                    .order_by_asc(web_site::Column::SeqNo)
                    .all(&self.db)
                    .await,
            )?,
        };

        Ok(items)
    }
}

fn into_items<M>(rows: std::result::Result<Vec<M>, DbErr>) -> Result<Vec<ResourceItem>>
where
    M: Into<ResourceItem>,
{
    rows.map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(AppError::Database)
}

#[async_trait]
impl ResourceStore for SeaOrmDatabase {
    async fn list(&self, table: ResourceTable) -> Result<Vec<ResourceItem>> {
        self.list_table(table).await
    }

    async fn ping(&self) -> Result<()> {
        self.health_check().await
    }
}
