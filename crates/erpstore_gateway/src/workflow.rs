use erpstore_contract::{Ack, FileRecord, UploadResponse};
use erpstore_upstream::{ByteStream, FileServer, MetadataService, UpstreamError};
use tracing::{error, info, warn};

/// How an insert ended when neither upstream was unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The storage service refused the upload. Metadata was never called.
    UploadRejected(UploadResponse),
    Inserted(Ack),
    /// The metadata store refused the records; `removed` of the stored
    /// files were deleted again.
    MetadataRejected { reply: Ack, removed: usize },
}

/// Store bytes, then store records. If the second step fails, the files
/// written by the first step are removed so no unreferenced bytes remain.
pub struct InsertWorkflow<'a> {
    files: &'a dyn FileServer,
    metadata: &'a dyn MetadataService,
}

impl<'a> InsertWorkflow<'a> {
    pub fn new(files: &'a dyn FileServer, metadata: &'a dyn MetadataService) -> Self {
        Self { files, metadata }
    }

    pub async fn run(
        &self,
        category: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<InsertOutcome, UpstreamError> {
        let upload = self.files.upload(category, content_type, body).await?;
        let Some(stored) = upload.stored_files() else {
            warn!(category, code = upload.code.0, "storage service rejected upload");
            return Ok(InsertOutcome::UploadRejected(upload));
        };
        let stored = stored.to_vec();

        match self.metadata.insert(&stored).await {
            Ok(reply) if reply.code.is_success() => {
                info!(category, count = stored.len(), "files stored and recorded");
                Ok(InsertOutcome::Inserted(reply))
            }
            Ok(reply) => {
                warn!(category, code = reply.code.0, "metadata store rejected records");
                let removed = self.compensate(&stored).await;
                Ok(InsertOutcome::MetadataRejected { reply, removed })
            }
            Err(err) => {
                error!(category, error = %err, "metadata store unreachable after upload");
                self.compensate(&stored).await;
                Err(err)
            }
        }
    }

    async fn compensate(&self, stored: &[FileRecord]) -> usize {
        let mut removed = 0;
        for record in stored {
            match self.files.remove(record).await {
                Ok(ack) if ack.code.is_success() => {
                    removed += 1;
                    info!(path = %record.path, "removed unrecorded file");
                }
                Ok(ack) => {
                    warn!(path = %record.path, code = ack.code.0, "storage service kept unrecorded file")
                }
                Err(err) => {
                    error!(path = %record.path, error = %err, "could not remove unrecorded file")
                }
            }
        }
        removed
    }
}
