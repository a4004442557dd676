// src/application/commands/slugs/delete.rs
use super::SlugCommandService;
use crate::{application::error::ApplicationResult, domain::translation::RecordId};

pub struct DeleteRecordCommand {
    pub record_id: i64,
}

impl SlugCommandService {
    pub async fn delete_record(&self, command: DeleteRecordCommand) -> ApplicationResult<()> {
        let record_id = RecordId::new(command.record_id)?;
        self.write_store.delete_record(record_id).await?;
        tracing::info!(record_id = %record_id, "record deleted");
        Ok(())
    }
}
