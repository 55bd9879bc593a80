// @generated by erpstore_codegen from the "ERP SHOP api" contract. Do not edit.

use http::Method;
use serde_json::Value;

use crate::runtime::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Client for the `ERP SHOP api` contract.
#[derive(Debug, Clone)]
pub struct ErpshopApi {
    client: ApiClient,
}

impl ErpshopApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 添加店铺
    ///
    /// `POST /addShopForAndBusinessGatherService/addShop`
    pub async fn add_shop_using_post(
        &self,
        add_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/addShopForAndBusinessGatherService/addShop")
            .header("Accept", "*/*")
            .json_body_opt(add_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 添加店员
    ///
    /// `POST /clerkServ/addClerk`
    pub async fn add_clerk_using_post(
        &self,
        add_clerk_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/addClerk")
            .header("Accept", "*/*")
            .json_body_opt(add_clerk_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除店员,类似于离职
    ///
    /// `POST /clerkServ/delClerk`
    pub async fn del_clerk_using_post(
        &self,
        employee_edit_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/delClerk")
            .header("Accept", "*/*")
            .json_body_opt(employee_edit_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 锁定店员,不允许店员操作店铺
    ///
    /// `POST /clerkServ/lockClerk`
    pub async fn lock_clerk_using_post(
        &self,
        employee_edit_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/lockClerk")
            .header("Accept", "*/*")
            .json_body_opt(employee_edit_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询该单位所有店员
    ///
    /// `POST /clerkServ/queryAllClerks`
    pub async fn query_all_clerks_using_post(
        &self,
        query_clerk_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/queryAllClerks")
            .header("Accept", "*/*")
            .json_body_opt(query_clerk_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店员所属单位Id
    ///
    /// `POST /clerkServ/queryClerkCompanyId`
    pub async fn query_clerk_company_id_using_post(
        &self,
        shop_company_clerk: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/queryClerkCompanyId")
            .header("Accept", "*/*")
            .json_body_opt(shop_company_clerk)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店员的状态
    ///
    /// `POST /clerkServ/queryClerkStatus`
    pub async fn query_clerk_status_using_post(
        &self,
        shop_company_clerk: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/queryClerkStatus")
            .header("Accept", "*/*")
            .json_body_opt(shop_company_clerk)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询用户身份信息
    ///
    /// `POST /clerkServ/queryUserIdentity`
    pub async fn query_user_identity_using_post(
        &self,
        query_user_identity_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/clerkServ/queryUserIdentity")
            .header("Accept", "*/*")
            .json_body_opt(query_user_identity_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 添加单位
    ///
    /// `POST /companyServ/addCompany`
    pub async fn add_company_using_post(
        &self,
        company_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/companyServ/addCompany")
            .header("Accept", "*/*")
            .json_body_opt(company_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 编辑单位信息
    ///
    /// `POST /companyServ/editCompany`
    pub async fn edit_company_using_post(
        &self,
        edit_company_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/companyServ/editCompany")
            .header("Accept", "*/*")
            .json_body_opt(edit_company_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 创建订单
    ///
    /// `POST /orderServ/createOrder`
    pub async fn create_order_using_post(
        &self,
        create_order_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/orderServ/createOrder")
            .header("Accept", "*/*")
            .json_body_opt(create_order_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 去支付或者继续支付
    ///
    /// `POST /orderServ/goPay`
    pub async fn go_pay_using_post(
        &self,
        go_pay_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/orderServ/goPay")
            .header("Accept", "*/*")
            .json_body_opt(go_pay_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 支付结果回调
    ///
    /// `POST /orderServ/payResultCallback`
    pub async fn pay_result_callback_using_post(
        &self,
        pay_result_callback_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/orderServ/payResultCallback")
            .header("Accept", "*/*")
            .json_body_opt(pay_result_callback_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 支付结果查询
    ///
    /// `POST /orderServ/queryPayOrderResult`
    pub async fn query_pay_order_result_using_post(
        &self,
        create_order_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/orderServ/queryPayOrderResult")
            .header("Accept", "*/*")
            .json_body_opt(create_order_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 添加店铺
    ///
    /// `POST /shopServ/addShop`
    pub async fn add_shop_using_post_1(
        &self,
        shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/addShop")
            .header("Accept", "*/*")
            .json_body_opt(shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除店铺信息
    ///
    /// `POST /shopServ/delShop`
    pub async fn del_shop_using_post(
        &self,
        del_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/delShop")
            .header("Accept", "*/*")
            .json_body_opt(del_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 编辑店铺信息
    ///
    /// `POST /shopServ/editShop`
    pub async fn edit_shop_using_post(
        &self,
        edit_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/editShop")
            .header("Accept", "*/*")
            .json_body_opt(edit_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询我的店铺信息
    ///
    /// `POST /shopServ/queryAllMyShops`
    pub async fn query_all_my_shops_using_post(
        &self,
        query_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryAllMyShops")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店铺的员工信息
    ///
    /// `POST /shopServ/queryClerkByShopIds`
    pub async fn query_clerk_by_shop_ids_using_post(
        &self,
        query_clerk_by_shop_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryClerkByShopIds")
            .header("Accept", "*/*")
            .json_body_opt(query_clerk_by_shop_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询我的店铺
    ///
    /// `POST /shopServ/queryMyShop`
    pub async fn query_my_shop_using_post(
        &self,
        query_my_shop_req_vo: &Value,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryMyShop")
            .header("Accept", "*/*")
            .json_body(query_my_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据Id查询店铺信息
    ///
    /// `POST /shopServ/queryShopById`
    pub async fn query_shop_by_id_using_post(
        &self,
        query_shop_by_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryShopById")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_by_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据Id查询店铺信息
    ///
    /// `POST /shopServ/queryShopByList`
    pub async fn query_shop_by_list_using_post(
        &self,
        query_shop_by_list_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryShopByList")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_by_list_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询用户服务的店铺信息
    ///
    /// `POST /shopServ/queryUserServiceShops`
    pub async fn query_user_service_shops_using_post(
        &self,
        query_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryUserServiceShops")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询用户服务的所有店铺ID和名称
    ///
    /// `POST /shopServ/queryUserServiceShopsByCompass`
    pub async fn query_user_service_shops_by_compass_using_post(
        &self,
        query_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryUserServiceShopsByCompass")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询用户服务的所有店铺销售数据
    ///
    /// `POST /shopServ/queryUserServiceShopsSale`
    pub async fn query_user_service_shops_sale_using_post(
        &self,
        query_shop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/shopServ/queryUserServiceShopsSale")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }
}
