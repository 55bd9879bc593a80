pub mod envelope;
pub mod record;

pub use envelope::{
    messages, Ack, FindResponse, InsertRequest, ResultCode, UploadResponse,
};
pub use record::FileRecord;
