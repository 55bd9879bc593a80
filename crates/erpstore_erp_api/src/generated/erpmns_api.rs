// @generated by erpstore_codegen from the "ERP MNS api" contract. Do not edit.

use http::Method;
use serde_json::Value;

use crate::runtime::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Client for the `ERP MNS api` contract.
#[derive(Debug, Clone)]
pub struct ErpmnsApi {
    client: ApiClient,
}

impl ErpmnsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 批量删除站内信
    ///
    /// `POST /internalMsgServ/batchDelInternalMsg`
    pub async fn batch_del_internal_msg_using_post(
        &self,
        batch_opert_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/batchDelInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(batch_opert_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 批量阅读站内信
    ///
    /// `POST /internalMsgServ/batchReadInternalMsg`
    pub async fn batch_read_internal_msg_using_post(
        &self,
        batch_opert_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/batchReadInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(batch_opert_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除站内信
    ///
    /// `POST /internalMsgServ/delInternalMsg`
    pub async fn del_internal_msg_using_post(
        &self,
        operate_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/delInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(operate_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询站内信
    ///
    /// `POST /internalMsgServ/queryInternalMsg`
    pub async fn query_internal_msg_using_post(
        &self,
        query_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/queryInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(query_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 通过id查询站内信
    ///
    /// `POST /internalMsgServ/queryInternalMsgById`
    pub async fn query_internal_msg_by_id_using_post(
        &self,
        query_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/queryInternalMsgById")
            .header("Accept", "*/*")
            .json_body_opt(query_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 通过userId查询站内信未读条数
    ///
    /// `POST /internalMsgServ/queryUnReadInternalMsgCount`
    pub async fn query_un_read_internal_msg_count_using_post(
        &self,
        query_un_read_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/queryUnReadInternalMsgCount")
            .header("Accept", "*/*")
            .json_body_opt(query_un_read_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 阅读站内信
    ///
    /// `POST /internalMsgServ/readInternalMsg`
    pub async fn read_internal_msg_using_post(
        &self,
        operate_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/readInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(operate_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 发送站内信
    ///
    /// `POST /internalMsgServ/sendInternalMsg`
    pub async fn send_internal_msg_using_post(
        &self,
        internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/internalMsgServ/sendInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 新增无模板消息请求
    ///
    /// `POST /msgInterReqProcServ/addNoTemplateMsgInterReqProc`
    pub async fn add_no_template_msg_inter_req_proc_using_post(
        &self,
        msg_inter_req_proc_req_vo: &Value,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/msgInterReqProcServ/addNoTemplateMsgInterReqProc")
            .header("Accept", "*/*")
            .json_body(msg_inter_req_proc_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 新增有模板消息请求
    ///
    /// `POST /msgInterReqProcServ/addTemplateMsgInterReqProc`
    pub async fn add_template_msg_inter_req_proc_using_post(
        &self,
        msg_inter_req_proc_req_vo: &Value,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/msgInterReqProcServ/addTemplateMsgInterReqProc")
            .header("Accept", "*/*")
            .json_body(msg_inter_req_proc_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 异步批量处理站内信请求
    ///
    /// `POST /msgInterReqProcServ/batchDealInternalMsg`
    pub async fn batch_deal_internal_msg_using_post(
        &self,
        batch_deal_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/msgInterReqProcServ/batchDealInternalMsg")
            .header("Accept", "*/*")
            .json_body_opt(batch_deal_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 发送短信验证码，返回ticket
    ///
    /// `POST /smsServ/sendSMSCode`
    pub async fn send_sms_code_using_post(
        &self,
        s_ms_code_send_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/smsServ/sendSMSCode")
            .header("Accept", "*/*")
            .json_body_opt(s_ms_code_send_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 短信验证码验证
    ///
    /// `POST /smsServ/verifySMSCode`
    pub async fn verify_sms_code_using_post(
        &self,
        sms_code_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/smsServ/verifySMSCode")
            .header("Accept", "*/*")
            .json_body_opt(sms_code_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除系统消息
    ///
    /// `POST /systemMsgServ/delSystemMsg`
    pub async fn del_system_msg_using_post(
        &self,
        operate_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/systemMsgServ/delSystemMsg")
            .header("Accept", "*/*")
            .json_body_opt(operate_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询系统消息
    ///
    /// `POST /systemMsgServ/querySystemMsg`
    pub async fn query_system_msg_using_post(
        &self,
        query_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/systemMsgServ/querySystemMsg")
            .header("Accept", "*/*")
            .json_body_opt(query_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 阅读系统消息
    ///
    /// `POST /systemMsgServ/readSystemMsg`
    pub async fn read_system_msg_using_post(
        &self,
        operate_internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/systemMsgServ/readSystemMsg")
            .header("Accept", "*/*")
            .json_body_opt(operate_internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 发送系统消息
    ///
    /// `POST /systemMsgServ/sendSystemMsg`
    pub async fn send_system_msg_using_post(
        &self,
        internal_msg_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/systemMsgServ/sendSystemMsg")
            .header("Accept", "*/*")
            .json_body_opt(internal_msg_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }
}
