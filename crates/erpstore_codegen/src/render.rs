use std::collections::HashSet;
use std::fmt::Write as _;

use anyhow::Result;

use crate::naming::{ident, normalize_title, pascal_case, snake_case};
use crate::swagger::{Endpoint, Location, Parameter, SwaggerDoc};

/// One generated client module, ready to be written to `<module_name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    pub module_name: String,
    pub struct_name: String,
    pub source: String,
}

struct Arg<'a> {
    binding: String,
    param: &'a Parameter,
}

impl Arg<'_> {
    // path parameters are always part of the URL
    fn required(&self) -> bool {
        self.param.required || self.param.location == Location::Path
    }

    fn rust_type(&self) -> &'static str {
        match (self.param.location == Location::Body, self.required()) {
            (true, true) => "&Value",
            (true, false) => "Option<&Value>",
            (false, true) => "&str",
            (false, false) => "Option<&str>",
        }
    }

    fn builder_call(&self) -> String {
        let name = format!("{:?}", self.param.name);
        let binding = &self.binding;
        let suffix = if self.required() { "" } else { "_opt" };
        match self.param.location {
            Location::Path => format!(".path_param({name}, {binding})"),
            Location::Query => format!(".query{suffix}({name}, {binding})"),
            Location::Header => format!(".header{suffix}({name}, {binding})"),
            Location::FormData => format!(".form{suffix}({name}, {binding})"),
            Location::Body => format!(".json_body{suffix}({binding})"),
        }
    }
}

/// Renders the client module for one Swagger 2.0 contract.
pub fn render_api_module(contract: &str) -> Result<RenderedModule> {
    let doc = SwaggerDoc::parse(contract)?;
    let endpoints = doc.endpoints()?;

    let struct_name = pascal_case(&normalize_title(&doc.info.title));
    let module_name = snake_case(&struct_name);
    let title = doc.info.title.split_whitespace().collect::<Vec<_>>().join(" ");

    let has_body = endpoints.iter().any(|endpoint| {
        endpoint
            .operation
            .parameters
            .iter()
            .any(|param| param.location == Location::Body)
    });

    let mut out = String::new();
    writeln!(
        out,
        "// @generated by erpstore_codegen from the \"{title}\" contract. Do not edit."
    )?;
    writeln!(out)?;
    if !endpoints.is_empty() {
        writeln!(out, "use http::Method;")?;
    }
    if has_body {
        writeln!(out, "use serde_json::Value;")?;
    }
    if !endpoints.is_empty() || has_body {
        writeln!(out)?;
    }
    writeln!(
        out,
        "use crate::runtime::{{ApiClient, ApiError, ApiRequest, ApiResponse}};"
    )?;
    writeln!(out)?;
    writeln!(out, "/// Client for the `{title}` contract.")?;
    writeln!(out, "#[derive(Debug, Clone)]")?;
    writeln!(out, "pub struct {struct_name} {{")?;
    writeln!(out, "    client: ApiClient,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl {struct_name} {{")?;
    writeln!(out, "    pub fn new(client: ApiClient) -> Self {{")?;
    writeln!(out, "        Self {{ client }}")?;
    writeln!(out, "    }}")?;

    let mut method_names = HashSet::new();
    for endpoint in &endpoints {
        writeln!(out)?;
        render_method(&mut out, endpoint, &mut method_names)?;
    }
    writeln!(out, "}}")?;

    Ok(RenderedModule {
        module_name,
        struct_name,
        source: out,
    })
}

fn render_method(
    out: &mut String,
    endpoint: &Endpoint,
    taken: &mut HashSet<String>,
) -> Result<()> {
    let operation = &endpoint.operation;
    let base_name = match &operation.operation_id {
        Some(id) => ident(id),
        None => ident(&format!("{} {}", endpoint.method, endpoint.path)),
    };
    let method_name = unique(base_name, taken);

    let mut bindings = HashSet::from(["extra_query".to_string()]);
    let args: Vec<Arg<'_>> = operation
        .parameters
        .iter()
        .map(|param| Arg {
            binding: unique(ident(&param.name), &mut bindings),
            param,
        })
        .collect();

    let accept = if operation.produces.is_empty() {
        "*/*".to_string()
    } else {
        operation.produces.join(", ")
    };

    if let Some(summary) = operation.summary.as_deref().map(str::trim) {
        if !summary.is_empty() {
            for line in summary.lines() {
                writeln!(out, "    /// {}", line.trim_end())?;
            }
            writeln!(out, "    ///")?;
        }
    }
    writeln!(
        out,
        "    /// `{} {}`",
        endpoint.method.to_uppercase(),
        endpoint.path
    )?;
    writeln!(out, "    pub async fn {method_name}(")?;
    writeln!(out, "        &self,")?;
    for arg in &args {
        writeln!(out, "        {}: {},", arg.binding, arg.rust_type())?;
    }
    writeln!(out, "        extra_query: &[(&str, &str)],")?;
    writeln!(out, "    ) -> Result<ApiResponse, ApiError> {{")?;
    writeln!(
        out,
        "        let request = ApiRequest::new(Method::{}, {:?})",
        endpoint.method.to_uppercase(),
        endpoint.path
    )?;
    writeln!(out, "            .header(\"Accept\", {accept:?})")?;
    for arg in &args {
        writeln!(out, "            {}", arg.builder_call())?;
    }
    writeln!(out, "            .extra_query(extra_query);")?;
    writeln!(out, "        self.client.send(request).await")?;
    writeln!(out, "    }}")?;
    Ok(())
}

fn unique(base: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{base}_{n}");
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

/// Renders `generated/mod.rs` for the given modules, sorted by module name.
pub fn render_index_module(modules: &[RenderedModule]) -> String {
    let mut sorted: Vec<&RenderedModule> = modules.iter().collect();
    sorted.sort_by(|a, b| a.module_name.cmp(&b.module_name));

    let mut out = String::from("// @generated by erpstore_codegen. Do not edit.\n");
    if sorted.is_empty() {
        return out;
    }
    out.push('\n');
    for module in &sorted {
        out.push_str(&format!("pub mod {};\n", module.module_name));
    }
    out.push('\n');
    for module in &sorted {
        out.push_str(&format!(
            "pub use {}::{};\n",
            module.module_name, module.struct_name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = r#"{
  "swagger": "2.0",
  "info": { "title": "ERP Shop api", "version": "1.0" },
  "paths": {
    "/shopServ/shop/{shopId}": {
      "get": {
        "summary": "Load one shop",
        "operationId": "getShopUsingGET",
        "produces": ["application/json"],
        "parameters": [
          { "name": "shopId", "in": "path", "required": true, "type": "string" },
          { "name": "type", "in": "query", "required": false, "type": "string" },
          { "name": "X-Tenant", "in": "header", "required": true, "type": "string" }
        ]
      },
      "post": {
        "operationId": "updateShopUsingPOST",
        "parameters": [
          { "name": "shopId", "in": "path", "required": true, "type": "string" },
          { "name": "shopVo", "in": "body", "required": true, "schema": { "type": "object" } }
        ]
      }
    },
    "/shopServ/logo": {
      "post": {
        "operationId": "uploadLogoUsingPOST",
        "parameters": [
          { "name": "caption", "in": "formData", "required": false, "type": "string" }
        ]
      }
    }
  }
}"#;

    #[test]
    fn names_struct_and_module_from_title() {
        let module = render_api_module(CONTRACT).expect("render");
        assert_eq!(module.struct_name, "ErpShopApi");
        assert_eq!(module.module_name, "erp_shop_api");
        assert!(module.source.starts_with(
            "// @generated by erpstore_codegen from the \"ERP Shop api\" contract. Do not edit.\n"
        ));
        assert!(module.source.contains("pub struct ErpShopApi {"));
        assert!(module.source.contains("use serde_json::Value;"));
    }

    #[test]
    fn methods_bind_every_parameter_location() {
        let source = render_api_module(CONTRACT).expect("render").source;

        assert!(source.contains(
            "    /// Load one shop\n    ///\n    /// `GET /shopServ/shop/{shopId}`\n    pub async fn get_shop_using_get(\n        &self,\n        shop_id: &str,\n        type_: Option<&str>,\n        x_tenant: &str,\n        extra_query: &[(&str, &str)],\n    ) -> Result<ApiResponse, ApiError> {\n"
        ));
        assert!(source.contains(
            "        let request = ApiRequest::new(Method::GET, \"/shopServ/shop/{shopId}\")\n            .header(\"Accept\", \"application/json\")\n            .path_param(\"shopId\", shop_id)\n            .query_opt(\"type\", type_)\n            .header(\"X-Tenant\", x_tenant)\n            .extra_query(extra_query);\n        self.client.send(request).await\n"
        ));
        assert!(source.contains("        shop_vo: &Value,\n"));
        assert!(source.contains("            .json_body(shop_vo)\n"));
        assert!(source.contains("            .form_opt(\"caption\", caption)\n"));
        assert!(source.contains("            .header(\"Accept\", \"*/*\")\n"));
    }

    #[test]
    fn operations_follow_path_then_method_order() {
        let source = render_api_module(CONTRACT).expect("render").source;
        let logo = source.find("upload_logo_using_post").expect("logo");
        let get = source.find("get_shop_using_get").expect("get");
        let update = source.find("update_shop_using_post").expect("update");
        assert!(logo < get && get < update);
    }

    #[test]
    fn contracts_without_body_parameters_skip_the_value_import() {
        let contract = r#"
swagger: "2.0"
info:
  title: erp-mns.api
paths:
  /mns/ping:
    get:
      operationId: ping
"#;
        let module = render_api_module(contract).expect("render");
        assert_eq!(module.struct_name, "ErpMnsApi");
        assert!(!module.source.contains("serde_json"));
        assert!(module.source.contains("pub async fn ping("));
    }

    #[test]
    fn rejects_openapi_three() {
        let contract = r#"{ "swagger": "3.0", "info": { "title": "x" }, "paths": {} }"#;
        assert!(render_api_module(contract).is_err());
    }

    #[test]
    fn duplicate_operation_ids_get_a_suffix() {
        let contract = r#"{
  "swagger": "2.0",
  "info": { "title": "dup" },
  "paths": {
    "/a": { "get": { "operationId": "load" } },
    "/b": { "get": { "operationId": "load" } }
  }
}"#;
        let source = render_api_module(contract).expect("render").source;
        assert!(source.contains("pub async fn load("));
        assert!(source.contains("pub async fn load_2("));
    }

    #[test]
    fn index_lists_modules_sorted() {
        let module = |name: &str, ty: &str| RenderedModule {
            module_name: name.to_string(),
            struct_name: ty.to_string(),
            source: String::new(),
        };
        let index = render_index_module(&[
            module("erp_shop_api", "ErpShopApi"),
            module("erp_account_api", "ErpAccountApi"),
        ]);
        assert_eq!(
            index,
            "// @generated by erpstore_codegen. Do not edit.\n\npub mod erp_account_api;\npub mod erp_shop_api;\n\npub use erp_account_api::ErpAccountApi;\npub use erp_shop_api::ErpShopApi;\n"
        );
    }
}
