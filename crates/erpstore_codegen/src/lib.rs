//! Renders Rust clients for the ERP gateway from its Swagger 2.0 contracts.

pub mod naming;
pub mod render;
pub mod swagger;

pub use render::{render_api_module, render_index_module, RenderedModule};

/// Services published by the ERP gateway, in the order their contracts are fetched.
pub const ERP_SERVICES: &[&str] = &[
    "erp-account",
    "erp-mns",
    "erp-shop",
    "erp-privilege",
    "erp-inventory",
];

/// Where a service publishes its contract on the gateway.
pub fn api_docs_url(gateway: &str, service: &str) -> String {
    format!("{}/{}/v2/api-docs", gateway.trim_end_matches('/'), service)
}

#[cfg(test)]
mod tests {
    use super::api_docs_url;

    #[test]
    fn docs_url_ignores_trailing_slash() {
        assert_eq!(
            api_docs_url("http://erp-gateway/", "erp-shop"),
            "http://erp-gateway/erp-shop/v2/api-docs"
        );
    }
}
