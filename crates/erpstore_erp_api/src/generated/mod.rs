// @generated by erpstore_codegen. Do not edit.

pub mod erp_account_api;
pub mod erp_inventory_api;
pub mod erp_privilege_api;
pub mod erpmns_api;
pub mod erpshop_api;

pub use erp_account_api::ErpAccountApi;
pub use erp_inventory_api::ErpInventoryApi;
pub use erp_privilege_api::ErpPrivilegeApi;
pub use erpmns_api::ErpmnsApi;
pub use erpshop_api::ErpshopApi;
