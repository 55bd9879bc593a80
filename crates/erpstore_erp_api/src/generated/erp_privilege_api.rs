// @generated by erpstore_codegen from the "ERP Privilege api" contract. Do not edit.

use http::Method;
use serde_json::Value;

use crate::runtime::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Client for the `ERP Privilege api` contract.
#[derive(Debug, Clone)]
pub struct ErpPrivilegeApi {
    client: ApiClient,
}

impl ErpPrivilegeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 查询所有的权限节点
    ///
    /// `POST /privilegeServ/findAllPrivileges`
    pub async fn find_all_privileges_using_post(
        &self,
        find_all_privileges_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/findAllPrivileges")
            .header("Accept", "*/*")
            .json_body_opt(find_all_privileges_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询员工被授予的所有权限节点
    ///
    /// `POST /privilegeServ/findGrantedPrivilegeByUserId`
    pub async fn find_granted_privilege_by_user_id_using_post(
        &self,
        query_user_privilege_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/findGrantedPrivilegeByUserId")
            .header("Accept", "*/*")
            .json_body_opt(query_user_privilege_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询员工被授权管理的所有店铺
    ///
    /// `POST /privilegeServ/findGrantedShopByUserId`
    pub async fn find_granted_shop_by_user_id_using_post(
        &self,
        query_user_privilege_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/findGrantedShopByUserId")
            .header("Accept", "*/*")
            .json_body_opt(query_user_privilege_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 授权给用户
    ///
    /// `POST /privilegeServ/grantUserPrivilege`
    pub async fn grant_user_privilege_using_post(
        &self,
        grant_privilege_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/grantUserPrivilege")
            .header("Accept", "*/*")
            .json_body_opt(grant_privilege_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询员工是否拥有单位操作的某个权限节点（比如添加员工、设置权限）
    ///
    /// `POST /privilegeServ/hasPrivilegeNode`
    pub async fn has_privilege_node_using_post(
        &self,
        privilege_node_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/hasPrivilegeNode")
            .header("Accept", "*/*")
            .json_body_opt(privilege_node_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询员工是否拥有某个店铺的某个权限操作点（比如入库、出库是针对店铺的）
    ///
    /// `POST /privilegeServ/hasPrivilegeShop`
    pub async fn has_privilege_shop_using_post(
        &self,
        privilege_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/privilegeServ/hasPrivilegeShop")
            .header("Accept", "*/*")
            .json_body_opt(privilege_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }
}
