use serde::{Deserialize, Serialize};

use crate::record::FileRecord;

/// Application-level result code carried in every reply body.
///
/// Callers branch on this field, not on the HTTP status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ResultCode(pub u16);

impl ResultCode {
    pub const SUCCESS: Self = Self(9000);
    pub const FAILURE: Self = Self(4000);
    pub const NOT_FOUND: Self = Self(404);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

pub mod messages {
    pub const UPLOAD_SUCCEEDED: &str = "upload succeeded";
    pub const UPLOAD_FAILED: &str = "upload failed";
    pub const INSERT_SUCCEEDED: &str = "insert succeeded";
    pub const INSERT_FAILED: &str = "insert failed";
    pub const QUERY_SUCCEEDED: &str = "query succeeded";
    pub const QUERY_FAILED: &str = "query failed";
    pub const DELETE_SUCCEEDED: &str = "delete succeeded";
    pub const DELETE_FAILED: &str = "delete failed";
    pub const NOT_FOUND: &str = "not found";
}

/// Reply of the storage service upload route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub code: ResultCode,
    pub success: bool,
    pub messages: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_info: Option<Vec<FileRecord>>,
}

impl UploadResponse {
    pub fn succeeded(files_info: Vec<FileRecord>) -> Self {
        Self {
            code: ResultCode::SUCCESS,
            success: true,
            messages: messages::UPLOAD_SUCCEEDED.to_string(),
            files_info: Some(files_info),
        }
    }

    pub fn failed() -> Self {
        Self {
            code: ResultCode::FAILURE,
            success: false,
            messages: messages::UPLOAD_FAILED.to_string(),
            files_info: None,
        }
    }

    /// Stored records of a successful upload, `None` for anything else.
    pub fn stored_files(&self) -> Option<&[FileRecord]> {
        if !self.success || !self.code.is_success() {
            return None;
        }
        self.files_info.as_deref()
    }
}

/// Body of the metadata insert route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertRequest {
    #[serde(default)]
    pub files_info: Vec<FileRecord>,
}

/// Code/message pair used by insert, delete and unknown-operation replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub code: ResultCode,
    pub messages: String,
}

impl Ack {
    pub fn new(code: ResultCode, messages: &str) -> Self {
        Self {
            code,
            messages: messages.to_string(),
        }
    }

    pub fn inserted() -> Self {
        Self::new(ResultCode::SUCCESS, messages::INSERT_SUCCEEDED)
    }

    pub fn insert_failed() -> Self {
        Self::new(ResultCode::FAILURE, messages::INSERT_FAILED)
    }

    pub fn deleted() -> Self {
        Self::new(ResultCode::SUCCESS, messages::DELETE_SUCCEEDED)
    }

    pub fn delete_failed() -> Self {
        Self::new(ResultCode::FAILURE, messages::DELETE_FAILED)
    }

    pub fn not_found() -> Self {
        Self::new(ResultCode::NOT_FOUND, messages::NOT_FOUND)
    }
}

/// Reply of the metadata find route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindResponse {
    pub code: ResultCode,
    pub messages: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<FileRecord>>,
}

impl FindResponse {
    pub fn found(result: Vec<FileRecord>) -> Self {
        Self {
            code: ResultCode::SUCCESS,
            messages: messages::QUERY_SUCCEEDED.to_string(),
            result: Some(result),
        }
    }

    pub fn failed() -> Self {
        Self {
            code: ResultCode::FAILURE,
            messages: messages::QUERY_FAILED.to_string(),
            result: None,
        }
    }
}
