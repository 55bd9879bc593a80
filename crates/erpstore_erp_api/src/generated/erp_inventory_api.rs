// @generated by erpstore_codegen from the "ERP inventory api" contract. Do not edit.

use http::Method;
use serde_json::Value;

use crate::runtime::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Client for the `ERP inventory api` contract.
#[derive(Debug, Clone)]
pub struct ErpInventoryApi {
    client: ApiClient,
}

impl ErpInventoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 新增配件商品
    ///
    /// `POST /categoryServ/addDeviceProduct`
    pub async fn add_device_product_using_post(
        &self,
        device_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/addDeviceProduct")
            .header("Accept", "*/*")
            .json_body_opt(device_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 新增手机商品
    ///
    /// `POST /categoryServ/addMobileProduct`
    pub async fn add_mobile_product_using_post(
        &self,
        mobile_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/addMobileProduct")
            .header("Accept", "*/*")
            .json_body_opt(mobile_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品管理：删除类目服务
    ///
    /// `POST /categoryServ/deleteMobileCategory`
    pub async fn delete_mobile_category_using_post(
        &self,
        delete_mobile_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/deleteMobileCategory")
            .header("Accept", "*/*")
            .json_body_opt(delete_mobile_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品修改
    ///
    /// `POST /categoryServ/modifyProductInProductManage`
    pub async fn modify_product_in_product_manage_using_post(
        &self,
        operate_product_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/modifyProductInProductManage")
            .header("Accept", "*/*")
            .json_body_opt(operate_product_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询商品是否已存在
    ///
    /// `POST /categoryServ/queryCategoryIsExist`
    pub async fn query_category_is_exist_using_post(
        &self,
        device_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/queryCategoryIsExist")
            .header("Accept", "*/*")
            .json_body_opt(device_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据手机品牌、型号查询出手机对应所有内存和颜色列表接口
    ///
    /// `POST /categoryServ/queryMobileCategoryByBrandAndModel`
    pub async fn query_mobile_category_by_brand_and_model_using_post(
        &self,
        query_mobile_category_by_brand_and_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/queryMobileCategoryByBrandAndModel")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_category_by_brand_and_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询手机/配件类目服务
    ///
    /// `POST /categoryServ/queryProductCategory`
    pub async fn query_product_category_using_post(
        &self,
        query_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/queryProductCategory")
            .header("Accept", "*/*")
            .json_body_opt(query_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据categoryId查询类目服务
    ///
    /// `POST /categoryServ/queryProductCategoryBycategoryId`
    pub async fn query_product_category_bycategory_id_using_post(
        &self,
        query_category_bycategory_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/queryProductCategoryBycategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_category_bycategory_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品管理：查询手机/配件类目服务
    ///
    /// `POST /categoryServ/queryProductCategoryInProductManage`
    pub async fn query_product_category_in_product_manage_using_post(
        &self,
        query_product_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/categoryServ/queryProductCategoryInProductManage")
            .header("Accept", "*/*")
            .json_body_opt(query_product_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商财务收款/付款
    ///
    /// `POST /financeManagerServ/payOrTakeInBill`
    pub async fn pay_or_take_in_supplier_bill_using_post(
        &self,
        supplier_arap_bill_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/financeManagerServ/payOrTakeInBill")
            .header("Accept", "*/*")
            .json_body_opt(supplier_arap_bill_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商财务流水明细查询
    ///
    /// `POST /financeManagerServ/queryBillDetail`
    pub async fn query_bill_detail_using_post(
        &self,
        product_supplier_bill_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/financeManagerServ/queryBillDetail")
            .header("Accept", "*/*")
            .json_body_opt(product_supplier_bill_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 采购/分销数据查询明细
    ///
    /// `POST /financeManagerServ/queryFinanceStats`
    pub async fn query_finance_stats_using_post(
        &self,
        query_finance_stats_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/financeManagerServ/queryFinanceStats")
            .header("Accept", "*/*")
            .json_body_opt(query_finance_stats_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 采购/分销数据统计
    ///
    /// `POST /financeManagerServ/queryTotalFinanceStats`
    pub async fn query_total_finance_stats_using_post(
        &self,
        query_total_finance_stats_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/financeManagerServ/queryTotalFinanceStats")
            .header("Accept", "*/*")
            .json_body_opt(query_total_finance_stats_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商调账
    ///
    /// `POST /financeManagerServ/transferSupplierBill`
    pub async fn transfer_supplier_bill_using_post(
        &self,
        transfer_bill_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/financeManagerServ/transferSupplierBill")
            .header("Accept", "*/*")
            .json_body_opt(transfer_bill_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据外部业务订单号查询商品库存订单
    ///
    /// `POST /inventoryOrderServ/queryProductOrderByOutBizNo`
    pub async fn query_product_order_by_out_biz_no_using_post(
        &self,
        query_product_order_by_out_biz_no_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryOrderServ/queryProductOrderByOutBizNo")
            .header("Accept", "*/*")
            .json_body_opt(query_product_order_by_out_biz_no_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询调拨(调入)单详情
    ///
    /// `POST /inventoryQueryServ/queryAllocateInRecordDetail`
    pub async fn query_allocate_in_record_detail_using_post(
        &self,
        query_allocate_stock_in_order_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryAllocateInRecordDetail")
            .header("Accept", "*/*")
            .json_body_opt(query_allocate_stock_in_order_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询调拨(调出)单详情
    ///
    /// `POST /inventoryQueryServ/queryAllocateOutRecordDetail`
    pub async fn query_allocate_out_record_detail_using_post(
        &self,
        query_allocate_stock_out_order_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryAllocateOutRecordDetail")
            .header("Accept", "*/*")
            .json_body_opt(query_allocate_stock_out_order_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据单位编号、店铺编号、商品类别查询产品库存
    ///
    /// `POST /inventoryQueryServ/queryCategoryCountByCategoryId`
    pub async fn query_category_by_category_id_using_post(
        &self,
        query_category_count_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryCategoryCountByCategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_category_count_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据类别编号(category_id)、商品类别查询产品库存、建议零售价格
    ///
    /// `POST /inventoryQueryServ/queryCategoryInfoByCategoryId`
    pub async fn query_category_info_by_category_id_using_post(
        &self,
        query_category_info_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryCategoryInfoByCategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_category_info_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店铺个人销售记录
    ///
    /// `POST /inventoryQueryServ/queryClerkStockoutRecords`
    pub async fn query_clerk_stockout_records_using_post(
        &self,
        query_clerk_stockout_record_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryClerkStockoutRecords")
            .header("Accept", "*/*")
            .json_body_opt(query_clerk_stockout_record_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据名称模糊查询配件库存数量
    ///
    /// `POST /inventoryQueryServ/queryDeviceByFullName`
    pub async fn query_device_stock_info_by_full_name_using_post(
        &self,
        query_device_stock_info_by_full_name: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryDeviceByFullName")
            .header("Accept", "*/*")
            .json_body_opt(query_device_stock_info_by_full_name)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据ClassID查询店铺库存数量大于0的配件信息
    ///
    /// `POST /inventoryQueryServ/queryDeviceCategoryInfoByClassId`
    pub async fn query_device_category_info_by_class_id_using_post(
        &self,
        query_device_category_by_class_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryDeviceCategoryInfoByClassId")
            .header("Accept", "*/*")
            .json_body_opt(query_device_category_by_class_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 和商汇调用ERP根据categoryId、productType、shopId查询库存信息
    ///
    /// `POST /inventoryQueryServ/queryInventoryByCategoryIdAndShopId`
    pub async fn query_inventory_by_category_id_and_shop_id_using_post(
        &self,
        query_inventory_by_category_id_and_shop_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryInventoryByCategoryIdAndShopId")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_by_category_id_and_shop_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 产品库存详情导出
    ///
    /// `POST /inventoryQueryServ/queryInventoryDetailForExport`
    pub async fn query_inventory_detail_for_export_using_post(
        &self,
        query_inventory_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryInventoryDetailForExport")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据imei号查询手机信息
    ///
    /// `POST /inventoryQueryServ/queryMobileByImeiNo`
    pub async fn query_mobile_by_imei_no_using_post(
        &self,
        query_mobile_by_imei_no_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryMobileByImeiNo")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_by_imei_no_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据imei列表查询手机信息列表
    ///
    /// `POST /inventoryQueryServ/queryMobilesByImeiNos`
    pub async fn query_mobiles_by_imei_nos_using_post(
        &self,
        query_mobiles_by_imei_nos_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryMobilesByImeiNos")
            .header("Accept", "*/*")
            .json_body_opt(query_mobiles_by_imei_nos_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询产品库存
    ///
    /// `POST /inventoryQueryServ/queryProductInventory`
    pub async fn query_product_inventory_using_post(
        &self,
        query_inventory_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryProductInventory")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询产品库存详情
    ///
    /// `POST /inventoryQueryServ/queryProductInventoryDetail`
    pub async fn query_product_inventory_detail_using_post(
        &self,
        query_inventory_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryProductInventoryDetail")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 库存导出查询
    ///
    /// `POST /inventoryQueryServ/queryProductInventoryForExport`
    pub async fn query_product_inventory_for_export_using_post(
        &self,
        query_inventory_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryProductInventoryForExport")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据店铺id和categoryID查询库存量
    ///
    /// `POST /inventoryQueryServ/queryProductStockByShopIdsAndcategoryId`
    pub async fn query_product_stock_by_shop_ids_andcategory_id_using_post(
        &self,
        product_stock_by_category_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryProductStockByShopIdsAndcategoryId")
            .header("Accept", "*/*")
            .json_body_opt(product_stock_by_category_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店铺推荐配件信息
    ///
    /// `POST /inventoryQueryServ/queryRecommendDeviceCategoryInfo`
    pub async fn query_recommend_device_category_info_using_post(
        &self,
        query_recommend_device_category_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryRecommendDeviceCategoryInfo")
            .header("Accept", "*/*")
            .json_body_opt(query_recommend_device_category_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据关键字查询店铺配件信息
    ///
    /// `POST /inventoryQueryServ/queryRecommendDeviceCategoryInfoByKeyWord`
    pub async fn query_recommend_device_category_info_by_key_word_using_post(
        &self,
        query_recommend_device_category_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryRecommendDeviceCategoryInfoByKeyWord")
            .header("Accept", "*/*")
            .json_body_opt(query_recommend_device_category_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店铺是否有库存
    ///
    /// `POST /inventoryQueryServ/queryRemainStock`
    pub async fn query_remain_stock_using_post(
        &self,
        query_product_stock_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryRemainStock")
            .header("Accept", "*/*")
            .json_body_opt(query_product_stock_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询销售出库订单详情
    ///
    /// `POST /inventoryQueryServ/querySaleStockOutOrderDetail`
    pub async fn query_sale_stock_out_order_detail_using_post(
        &self,
        query_sale_stock_out_order_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/querySaleStockOutOrderDetail")
            .header("Accept", "*/*")
            .json_body_opt(query_sale_stock_out_order_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 库存筛选查询商品信息-app
    ///
    /// `POST /inventoryQueryServ/queryScreenProductCategoryInfo`
    pub async fn query_screen_product_category_info_using_post(
        &self,
        query_screen_product_category_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryScreenProductCategoryInfo")
            .header("Accept", "*/*")
            .json_body_opt(query_screen_product_category_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 出库导出查询
    ///
    /// `POST /inventoryQueryServ/queryStockOutRecordForExport`
    pub async fn query_stock_out_record_for_export_using_post(
        &self,
        query_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryStockOutRecordForExport")
            .header("Accept", "*/*")
            .json_body_opt(query_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询入库单详情
    ///
    /// `POST /inventoryQueryServ/queryStockinRecordDetail`
    pub async fn query_stockin_record_detail_using_post(
        &self,
        query_stock_in_record_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryStockinRecordDetail")
            .header("Accept", "*/*")
            .json_body_opt(query_stock_in_record_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 入库导出查询
    ///
    /// `POST /inventoryQueryServ/queryStockinRecordForExport`
    pub async fn query_stockin_record_for_export_using_post(
        &self,
        query_inventory_detail_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryStockinRecordForExport")
            .header("Accept", "*/*")
            .json_body_opt(query_inventory_detail_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询入库记录
    ///
    /// `POST /inventoryQueryServ/queryStockinRecords`
    pub async fn query_stockin_records_using_post(
        &self,
        query_stock_in_records_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryStockinRecords")
            .header("Accept", "*/*")
            .json_body_opt(query_stock_in_records_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询出库记录
    ///
    /// `POST /inventoryQueryServ/queryStockoutRecords`
    pub async fn query_stockout_records_using_post(
        &self,
        query_stock_out_records_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryQueryServ/queryStockoutRecords")
            .header("Accept", "*/*")
            .json_body_opt(query_stock_out_records_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 修改库存商品的建议零售价格
    ///
    /// `POST /inventoryServ/modifyInventoryProductSuggestPrice`
    pub async fn modify_inventory_product_suggest_price_using_post(
        &self,
        modify_suggest_price_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/modifyInventoryProductSuggestPrice")
            .header("Accept", "*/*")
            .json_body_opt(modify_suggest_price_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 修改入库价格
    ///
    /// `POST /inventoryServ/modifyStockInUnitPrice`
    pub async fn modify_stock_in_unit_price_using_post(
        &self,
        modify_stock_in_price_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/modifyStockInUnitPrice")
            .header("Accept", "*/*")
            .json_body_opt(modify_stock_in_price_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品调拨
    ///
    /// `POST /inventoryServ/stockAllocate`
    pub async fn stock_allocate_using_post(
        &self,
        stock_allocate_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockAllocate")
            .header("Accept", "*/*")
            .json_body_opt(stock_allocate_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品换货
    ///
    /// `POST /inventoryServ/stockExchange`
    pub async fn stock_exchange_using_post(
        &self,
        stock_change_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockExchange")
            .header("Accept", "*/*")
            .json_body_opt(stock_change_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品入库
    ///
    /// `POST /inventoryServ/stockIn`
    pub async fn stock_in_using_post(
        &self,
        stock_in_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockIn")
            .header("Accept", "*/*")
            .json_body_opt(stock_in_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品出库
    ///
    /// `POST /inventoryServ/stockOut`
    pub async fn stock_out_using_post(
        &self,
        stock_out_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockOut")
            .header("Accept", "*/*")
            .json_body_opt(stock_out_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品批量出库
    ///
    /// `POST /inventoryServ/stockOutBatch`
    pub async fn stock_out_batch_using_post(
        &self,
        stock_out_batch_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockOutBatch")
            .header("Accept", "*/*")
            .json_body_opt(stock_out_batch_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品分销出库
    ///
    /// `POST /inventoryServ/stockOutBySupplier`
    pub async fn stock_out_by_supplier_using_post(
        &self,
        stock_out_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockOutBySupplier")
            .header("Accept", "*/*")
            .json_body_opt(stock_out_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 商品退货
    ///
    /// `POST /inventoryServ/stockReturn`
    pub async fn stock_return_using_post(
        &self,
        stock_return_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/inventoryServ/stockReturn")
            .header("Accept", "*/*")
            .json_body_opt(stock_return_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据categoryId和ChnId查询手机评价数据信息
    ///
    /// `POST /mobileEvaluateQueryServ/queryMobileEvaluateInfoByCategoryId`
    pub async fn query_mobile_evaluate_info_by_category_id_using_post(
        &self,
        query_mobile_evaluate_by_category_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/mobileEvaluateQueryServ/queryMobileEvaluateInfoByCategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_evaluate_by_category_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据categoryId修改手机详情数据信息
    ///
    /// `POST /mobileInformationQueryServ/modifyMobileInformation`
    pub async fn modify_mobile_information_using_post(
        &self,
        mobile_information_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/mobileInformationQueryServ/modifyMobileInformation")
            .header("Accept", "*/*")
            .json_body_opt(mobile_information_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据categoryId查询手机详情数据信息
    ///
    /// `POST /mobileInformationQueryServ/queryMobileInformationByCategoryId`
    pub async fn query_mobile_information_by_category_id_using_post(
        &self,
        query_mobile_information_by_category_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/mobileInformationQueryServ/queryMobileInformationByCategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_information_by_category_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据categoryId查询手机渠道价格数据信息
    ///
    /// `POST /mobilePriceQueryServ/queryMobilePriceByCategoryId`
    pub async fn query_mobile_price_by_category_id_using_post(
        &self,
        query_mobile_price_by_category_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/mobilePriceQueryServ/queryMobilePriceByCategoryId")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_price_by_category_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 新增品牌
    ///
    /// `POST /productBrandsManageSrv/addProductBrand`
    pub async fn add_product_brand_using_post(
        &self,
        product_brand_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productBrandsManageSrv/addProductBrand")
            .header("Accept", "*/*")
            .json_body_opt(product_brand_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除品牌
    ///
    /// `POST /productBrandsManageSrv/deleteProductBrand`
    pub async fn delete_product_brand_using_post(
        &self,
        operate_brand_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productBrandsManageSrv/deleteProductBrand")
            .header("Accept", "*/*")
            .json_body_opt(operate_brand_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 修改商品品牌
    ///
    /// `POST /productBrandsManageSrv/modifyProductBrand`
    pub async fn modify_product_brand_using_post(
        &self,
        operate_brand_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productBrandsManageSrv/modifyProductBrand")
            .header("Accept", "*/*")
            .json_body_opt(operate_brand_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询所有品牌
    ///
    /// `POST /productBrandsManageSrv/queryProductBrand`
    pub async fn query_product_brands_using_post(
        &self,
        queryproduct_brand_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productBrandsManageSrv/queryProductBrand")
            .header("Accept", "*/*")
            .json_body_opt(queryproduct_brand_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据ClassId查询店铺拥有的品牌类型-APP专用
    ///
    /// `POST /productBrandsManageSrv/queryShopProductBrandsByClassId`
    pub async fn query_shop_product_brands_by_class_id_using_post(
        &self,
        query_shop_product_brand_by_class_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productBrandsManageSrv/queryShopProductBrandsByClassId")
            .header("Accept", "*/*")
            .json_body_opt(query_shop_product_brand_by_class_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 增加配件类型
    ///
    /// `POST /productClassSrv/addDeviceClass`
    pub async fn add_device_class_using_post(
        &self,
        product_class_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productClassSrv/addDeviceClass")
            .header("Accept", "*/*")
            .json_body_opt(product_class_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询配件类型
    ///
    /// `POST /productClassSrv/queryDeviceClass`
    pub async fn query_device_class_using_post(
        &self,
        query_device_class_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productClassSrv/queryDeviceClass")
            .header("Accept", "*/*")
            .json_body_opt(query_device_class_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店铺拥有的所有商品类型-APP专用
    ///
    /// `POST /productClassSrv/queryShopAllProductClass`
    pub async fn query_shop_all_product_class_using_post(
        &self,
        query_all_product_class_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productClassSrv/queryShopAllProductClass")
            .header("Accept", "*/*")
            .json_body_opt(query_all_product_class_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 新增产品型号
    ///
    /// `POST /productModelServ/addProductModel`
    pub async fn add_product_model_using_post(
        &self,
        add_product_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productModelServ/addProductModel")
            .header("Accept", "*/*")
            .json_body_opt(add_product_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 删除产品型号
    ///
    /// `POST /productModelServ/deleteProductModel`
    pub async fn delete_product_model_using_post(
        &self,
        delete_product_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productModelServ/deleteProductModel")
            .header("Accept", "*/*")
            .json_body_opt(delete_product_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 修改产品型号
    ///
    /// `POST /productModelServ/modifyProductModel`
    pub async fn modify_product_model_using_post(
        &self,
        product_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productModelServ/modifyProductModel")
            .header("Accept", "*/*")
            .json_body_opt(product_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询产品型号
    ///
    /// `POST /productModelServ/queryProductModel`
    pub async fn query_product_model_using_post(
        &self,
        query_product_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productModelServ/queryProductModel")
            .header("Accept", "*/*")
            .json_body_opt(query_product_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 根据ClassId和brandId查询店铺拥有的手机型号-APP专用
    ///
    /// `POST /productModelServ/queryProductModelByClassId`
    pub async fn query_product_model_by_class_id_using_post(
        &self,
        query_product_model_by_class_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productModelServ/queryProductModelByClassId")
            .header("Accept", "*/*")
            .json_body_opt(query_product_model_by_class_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商新增
    ///
    /// `POST /productSupplierServ/addProductSupplier`
    pub async fn add_product_supplier_using_post(
        &self,
        product_supplier_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/addProductSupplier")
            .header("Accept", "*/*")
            .json_body_opt(product_supplier_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商删除
    ///
    /// `POST /productSupplierServ/delProductSupplier`
    pub async fn del_product_supplier_using_post(
        &self,
        del_product_supplier_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/delProductSupplier")
            .header("Accept", "*/*")
            .json_body_opt(del_product_supplier_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商修改
    ///
    /// `POST /productSupplierServ/modifyProductSupplier`
    pub async fn modify_product_supplier_using_post(
        &self,
        product_supplier_model_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/modifyProductSupplier")
            .header("Accept", "*/*")
            .json_body_opt(product_supplier_model_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商分页查询
    ///
    /// `POST /productSupplierServ/queryProductSupplierList`
    pub async fn query_product_supplier_list_using_post(
        &self,
        query_product_supplier_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/queryProductSupplierList")
            .header("Accept", "*/*")
            .json_body_opt(query_product_supplier_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询单位下的供应商/分销商(不分页)
    ///
    /// `POST /productSupplierServ/queryProductSuppliers`
    pub async fn query_product_suppliers_using_post(
        &self,
        query_product_supplier_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/queryProductSuppliers")
            .header("Accept", "*/*")
            .json_body_opt(query_product_supplier_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 供应商/分销商根据主键查询
    ///
    /// `POST /productSupplierServ/querySupplierByKey`
    pub async fn query_supplier_by_key_using_post(
        &self,
        query_key_supplier_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/querySupplierByKey")
            .header("Accept", "*/*")
            .json_body_opt(query_key_supplier_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 单位的供应商/分销商数量查询
    ///
    /// `POST /productSupplierServ/querySupplierCount`
    pub async fn query_supplier_count_using_post(
        &self,
        query_supplier_by_company_id_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/productSupplierServ/querySupplierCount")
            .header("Accept", "*/*")
            .json_body_opt(query_supplier_by_company_id_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询我服务的店铺
    ///
    /// `POST /salePerformanceStatServ/queryMyServiceShop`
    pub async fn query_my_service_shop_using_post(
        &self,
        stat_sale_for_myshop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/queryMyServiceShop")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_for_myshop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 查询店员的销售详情
    ///
    /// `POST /salePerformanceStatServ/querySalerSaleDetails`
    pub async fn query_saler_sale_details_using_post(
        &self,
        stat_sale_for_myshop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/querySalerSaleDetails")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_for_myshop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计店铺 30天内销售最好手机品牌信息
    ///
    /// `POST /salePerformanceStatServ/statBestMobileBrandSalePerformance`
    pub async fn stat_best_mobile_brand_sale_performance_using_post(
        &self,
        query_mobile_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statBestMobileBrandSalePerformance")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计手机品牌查询30天内销售最好手机型号信息
    ///
    /// `POST /salePerformanceStatServ/statBestMobileModelSalePerformance`
    pub async fn stat_best_mobile_model_sale_performance_using_post(
        &self,
        query_mobile_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statBestMobileModelSalePerformance")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 配件销售额统计
    ///
    /// `POST /salePerformanceStatServ/statDeviceSale`
    pub async fn stat_device_sale_using_post(
        &self,
        stat_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statDeviceSale")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 手机销售状况TOP5统计
    ///
    /// `POST /salePerformanceStatServ/statMobileBrandSalePerformanceTop5`
    pub async fn stat_mobile_brand_sale_performance_top5_using_post(
        &self,
        query_mobile_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statMobileBrandSalePerformanceTop5")
            .header("Accept", "*/*")
            .json_body_opt(query_mobile_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 手机销售额统计
    ///
    /// `POST /salePerformanceStatServ/statMobileSale`
    pub async fn stat_mobile_sale_using_post(
        &self,
        stat_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statMobileSale")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 销售额统计
    ///
    /// `POST /salePerformanceStatServ/statSaleAmt`
    pub async fn stat_sale_amt_using_post(
        &self,
        stat_sale_amt_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSaleAmt")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_amt_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 综合统计销售业绩
    ///
    /// `POST /salePerformanceStatServ/statSaleComposite`
    pub async fn stat_sale_composite_using_post(
        &self,
        stat_sale_composite_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSaleComposite")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_composite_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计我的店铺中店员的销售业绩
    ///
    /// `POST /salePerformanceStatServ/statSaleForMyshop`
    pub async fn stat_sale_for_myshop_using_post(
        &self,
        stat_sale_for_myshop_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSaleForMyshop")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_for_myshop_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 销售利润统计服务
    ///
    /// `POST /salePerformanceStatServ/statSaleProfit`
    pub async fn stat_sale_profit_using_post(
        &self,
        stat_sale_profit_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSaleProfit")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_profit_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 销量统计服务
    ///
    /// `POST /salePerformanceStatServ/statSaleQuantity`
    pub async fn stat_sale_quantity_using_post(
        &self,
        stat_sale_quantity_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSaleQuantity")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_quantity_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 店员销售额统计
    ///
    /// `POST /salePerformanceStatServ/statSalerSale`
    pub async fn stat_saler_sale_using_post(
        &self,
        stat_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statSalerSale")
            .header("Accept", "*/*")
            .json_body_opt(stat_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计店铺 当月和当日销售情况
    ///
    /// `POST /salePerformanceStatServ/statShopMonthSalePerformance`
    pub async fn stat_shop_month_sale_performance_using_post(
        &self,
        query_stat_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statShopMonthSalePerformance")
            .header("Accept", "*/*")
            .json_body_opt(query_stat_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计店铺销售状况
    ///
    /// `POST /salePerformanceStatServ/statShopSalePerformance`
    pub async fn stat_shop_sale_performance_using_post(
        &self,
        stat_shop_sale_performance_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statShopSalePerformance")
            .header("Accept", "*/*")
            .json_body_opt(stat_shop_sale_performance_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计店员个人当月和当日销售情况-APP专用
    ///
    /// `POST /salePerformanceStatServ/statShopSalePerformanceForApp`
    pub async fn stat_shop_sale_performance_for_app_using_post(
        &self,
        query_stat_sale_for_app_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statShopSalePerformanceForApp")
            .header("Accept", "*/*")
            .json_body_opt(query_stat_sale_for_app_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }

    /// 统计店员个人最近7天销售状况
    ///
    /// `POST /salePerformanceStatServ/statShopSevenDaysSalePerformance`
    pub async fn stat_shop_seven_days_sale_performance_using_post(
        &self,
        query_seven_days_stat_sale_req_vo: Option<&Value>,
        extra_query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/salePerformanceStatServ/statShopSevenDaysSalePerformance")
            .header("Accept", "*/*")
            .json_body_opt(query_seven_days_stat_sale_req_vo)
            .extra_query(extra_query);
        self.client.send(request).await
    }
}
