//! 定价与折扣码存储操作

use super::SeaOrmStorage;
use crate::entity::discount_codes::{
    ActiveModel as DiscountCodeActiveModel, Column as DiscountCodeColumn, Entity as DiscountCodes,
};
use crate::entity::pricing::{ActiveModel, Column, Entity as Pricings};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::pricing::{
    entities::{DiscountCode, Pricing},
    requests::{CreateDiscountCodeRequest, CreatePricingRequest, UpdatePricingRequest},
};
use crate::utils::random_code::{DEFAULT_DISCOUNT_CODE_LEN, generate_discount_code};
use crate::utils::validate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建定价
    pub async fn create_pricing_impl(&self, req: CreatePricingRequest) -> Result<Pricing> {
        validate::validate_price(req.price).map_err(EnglishSchoolError::validation)?;

        let model = ActiveModel {
            course_type: Set(req.course_type),
            price: Set(req.price),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建定价失败: {e}")))?;

        Ok(result.into_pricing())
    }

    /// 通过课程类别获取定价
    pub async fn get_pricing_by_course_type_impl(
        &self,
        course_type: &str,
    ) -> Result<Option<Pricing>> {
        let result = Pricings::find()
            .filter(Column::CourseType.eq(course_type))
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询定价失败: {e}")))?;

        Ok(result.map(|m| m.into_pricing()))
    }

    /// 列出全部定价
    pub async fn list_pricing_impl(&self) -> Result<Vec<Pricing>> {
        let pricing = Pricings::find()
            .order_by_asc(Column::CourseType)
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询定价列表失败: {e}")))?;

        Ok(pricing.into_iter().map(|m| m.into_pricing()).collect())
    }

    /// 更新定价
    pub async fn update_pricing_impl(
        &self,
        id: i64,
        update: UpdatePricingRequest,
    ) -> Result<Option<Pricing>> {
        // 先检查定价是否存在
        let existing = Pricings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询定价失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.course_type.is_none() && update.price.is_none() {
            return Ok(existing.map(|m| m.into_pricing()));
        }

        if let Some(price) = update.price {
            validate::validate_price(price).map_err(EnglishSchoolError::validation)?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(course_type) = update.course_type {
            model.course_type = Set(course_type);
        }

        if let Some(price) = update.price {
            model.price = Set(price);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新定价失败: {e}")))?;

        Ok(Some(result.into_pricing()))
    }

    /// 删除定价
    pub async fn delete_pricing_impl(&self, id: i64) -> Result<bool> {
        let result = Pricings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除定价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建折扣码
    ///
    /// 未指定 code 时自动生成；重复的 code 由唯一索引报出。
    pub async fn create_discount_code_impl(
        &self,
        req: CreateDiscountCodeRequest,
    ) -> Result<DiscountCode> {
        validate::validate_discount_percent(req.discount_percent)
            .map_err(EnglishSchoolError::validation)?;

        let code = match req.code {
            Some(code) => code,
            None => generate_discount_code(DEFAULT_DISCOUNT_CODE_LEN),
        };

        let model = DiscountCodeActiveModel {
            code: Set(code),
            discount_percent: Set(req.discount_percent),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建折扣码失败: {e}")))?;

        Ok(result.into_discount_code())
    }

    /// 通过折扣码文本获取折扣码
    pub async fn get_discount_code_by_code_impl(&self, code: &str) -> Result<Option<DiscountCode>> {
        let result = DiscountCodes::find()
            .filter(DiscountCodeColumn::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询折扣码失败: {e}")))?;

        Ok(result.map(|m| m.into_discount_code()))
    }

    /// 列出全部折扣码
    pub async fn list_discount_codes_impl(&self) -> Result<Vec<DiscountCode>> {
        let codes = DiscountCodes::find()
            .order_by_asc(DiscountCodeColumn::Code)
            .all(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询折扣码列表失败: {e}"))
            })?;

        Ok(codes.into_iter().map(|m| m.into_discount_code()).collect())
    }

    /// 删除折扣码
    pub async fn delete_discount_code_impl(&self, id: i64) -> Result<bool> {
        let result = DiscountCodes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除折扣码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
