use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// HTTP methods in the order their operations are emitted for one path.
pub const METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerDoc {
    pub swagger: String,
    pub info: Info,
    #[serde(default)]
    pub paths: BTreeMap<String, BTreeMap<String, serde_yaml::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    pub title: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    Path,
    Query,
    Header,
    FormData,
    Body,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: Location,
    #[serde(default)]
    pub required: bool,
}

/// One operation with the path and method it is mounted at.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub operation: Operation,
}

impl SwaggerDoc {
    /// Parses a contract. JSON documents are accepted since JSON is YAML.
    pub fn parse(source: &str) -> Result<Self> {
        let doc: SwaggerDoc =
            serde_yaml::from_str(source).context("failed to parse swagger contract")?;
        if !doc.swagger.starts_with("2.") {
            bail!("unsupported swagger version {}", doc.swagger);
        }
        Ok(doc)
    }

    /// Operations sorted by path, then by `METHODS` order.
    pub fn endpoints(&self) -> Result<Vec<Endpoint>> {
        let mut endpoints = Vec::new();
        for (path, item) in &self.paths {
            for method in METHODS {
                let Some(raw) = item.get(*method) else {
                    continue;
                };
                let operation: Operation = serde_yaml::from_value(raw.clone())
                    .with_context(|| format!("invalid operation {} {}", method, path))?;
                endpoints.push(Endpoint {
                    method: method.to_string(),
                    path: path.clone(),
                    operation,
                });
            }
        }
        Ok(endpoints)
    }
}
