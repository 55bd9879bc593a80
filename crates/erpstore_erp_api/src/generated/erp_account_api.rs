// @generated by erpstore_codegen from the "ERP Account api" contract. Do not edit.

use http::Method;
use serde_json::Value;

use crate::runtime::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Client for the `ERP Account api` contract.
#[derive(Debug, Clone)]
pub struct ErpAccountApi {
    client: ApiClient,
}

impl ErpAccountApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 平台账户登录
    ///
    /// `POST /addUserAccountServ/loginForAndBusinessGather`
    pub async fn login_for_and_business_gather_using_post(
        &self,
        add_user_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/addUserAccountServ/loginForAndBusinessGather")
            .header("Accept", "*/*")
            .json_body_opt(add_user_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 第三方boss登录
    ///
    /// `POST /loginServ/bossLogin`
    pub async fn boss_login_using_post(
        &self,
        boss_login_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/bossLogin")
            .header("Accept", "*/*")
            .json_body_opt(boss_login_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 平台账户登录
    ///
    /// `POST /loginServ/login`
    pub async fn user_login_using_post(
        &self,
        login_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/login")
            .header("Accept", "*/*")
            .json_body_opt(login_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 账户登出
    ///
    /// `POST /loginServ/logout`
    pub async fn logout_using_post(
        &self,
        login_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/logout")
            .header("Accept", "*/*")
            .json_body_opt(login_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 第三方账户登录
    ///
    /// `POST /loginServ/otherLogin`
    pub async fn other_login_using_post(
        &self,
        other_login_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/otherLogin")
            .header("Accept", "*/*")
            .json_body_opt(other_login_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 第三方账户登录回调
    ///
    /// `POST /loginServ/otherLoginCallBack`
    pub async fn other_login_call_back_using_post(
        &self,
        obj: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/otherLoginCallBack")
            .header("Accept", "*/*")
            .json_body_opt(obj)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 快速登录
    ///
    /// `POST /loginServ/quickLogin`
    pub async fn quick_login_using_post(
        &self,
        quick_login_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/loginServ/quickLogin")
            .header("Accept", "*/*")
            .json_body_opt(quick_login_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 密码修改完成后,发送短信告诉用户
    ///
    /// `POST /passwordServ/modifyPassword`
    pub async fn modify_password_using_post(
        &self,
        modify_password_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/passwordServ/modifyPassword")
            .header("Accept", "*/*")
            .json_body_opt(modify_password_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 找回密码的重置功能,需要再次验证手机验证码是否已经验证通过
    ///
    /// `POST /passwordServ/resetPassword`
    pub async fn reset_password_using_post(
        &self,
        reset_password_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/passwordServ/resetPassword")
            .header("Accept", "*/*")
            .json_body_opt(reset_password_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 注册
    ///
    /// `POST /regServ/userReg`
    pub async fn user_reg_using_post(
        &self,
        reg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/regServ/userReg")
            .header("Accept", "*/*")
            .json_body_opt(reg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 用户使用第三方账户登录进入主页后,需要调用本接口绑定手机号,同时需要设置登录密码
    ///
    /// `POST /userInfoServ/bindMobile`
    pub async fn bind_mobile_using_post(
        &self,
        bind_mobile_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/bindMobile")
            .header("Accept", "*/*")
            .json_body_opt(bind_mobile_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 判断用户的手机号是否已经绑定
    ///
    /// `POST /userInfoServ/checkBindState`
    pub async fn check_bind_state_using_post(
        &self,
        check_bind_mobile_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/checkBindState")
            .header("Accept", "*/*")
            .json_body_opt(check_bind_mobile_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 完善用户信息
    ///
    /// `POST /userInfoServ/completeInfo`
    pub async fn complete_info_using_post(
        &self,
        user_info_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/completeInfo")
            .header("Accept", "*/*")
            .json_body_opt(user_info_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据userId查询社交绑定信息
    ///
    /// `POST /userInfoServ/querySNSBind`
    pub async fn query_sns_bind_using_post(
        &self,
        query_sns_bind_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/querySNSBind")
            .header("Accept", "*/*")
            .json_body_opt(query_sns_bind_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据用户ID或者手机号查询用户信息
    ///
    /// `POST /userInfoServ/queryUserInfo`
    pub async fn query_user_info_using_post(
        &self,
        query_user_info_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/queryUserInfo")
            .header("Accept", "*/*")
            .json_body_opt(query_user_info_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据用户ID列表查询用户信息
    ///
    /// `POST /userInfoServ/queryUserInfoByUserIds`
    pub async fn query_user_info_by_user_ids_using_post(
        &self,
        query_user_info_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/queryUserInfoByUserIds")
            .header("Accept", "*/*")
            .json_body_opt(query_user_info_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据userKey查询用户信息
    ///
    /// `POST /userInfoServ/queryUserInfoByUserKey`
    pub async fn query_user_info_by_user_key_using_post(
        &self,
        query_user_info_by_user_key_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/userInfoServ/queryUserInfoByUserKey")
            .header("Accept", "*/*")
            .json_body_opt(query_user_info_by_user_key_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }
}
