//! Patch a line item

use super::CommandHandler;
use crate::error::OrderError;
use crate::lifecycle::ensure_unlocked;
use crate::pricing::recompute_final_price;
use shared::models::{LineItemPatch, Order};
use shared::util::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// Apply a partial update to the item at `position`
///
/// Pricing inputs in the patch trigger an eager final-price
/// recomputation; the stored derived price is never stale.
#[derive(Debug, Clone)]
pub struct ModifyItemAction {
    pub position: u32,
    pub patch: LineItemPatch,
}

impl ModifyItemAction {
    fn validate(&self) -> Result<(), OrderError> {
        if let Some(article_number) = &self.patch.article_number {
            validate_required_text(article_number, "article_number", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(name) = &self.patch.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(description) = &self.patch.description {
            validate_optional_text(description, "description", MAX_NOTE_LEN)?;
        }
        if let Some(unit) = &self.patch.unit {
            validate_required_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(currency) = &self.patch.currency {
            validate_required_text(currency, "currency", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(management_info) = &self.patch.management_info {
            validate_optional_text(management_info, "management_info", MAX_NOTE_LEN)?;
        }
        if matches!(self.patch.quantity, Some(q) if q <= 0.0) {
            return Err(OrderError::Validation("quantity must be positive".into()));
        }
        if matches!(self.patch.list_price, Some(p) if p < 0.0) {
            return Err(OrderError::Validation(
                "list_price must not be negative".into(),
            ));
        }
        if matches!(self.patch.discount_percent, Some(d) if !(0.0..=100.0).contains(&d)) {
            return Err(OrderError::Validation(
                "discount_percent must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

impl CommandHandler for ModifyItemAction {
    fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        ensure_unlocked(order, "items")?;
        self.validate()?;
        let item = order
            .item_mut(self.position)
            .ok_or(OrderError::ItemNotFound(self.position))?;

        if let Some(article_number) = &self.patch.article_number {
            item.article_number = article_number.clone();
        }
        if let Some(name) = &self.patch.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.patch.description {
            item.description = description.clone();
        }
        if let Some(quantity) = self.patch.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = &self.patch.unit {
            item.unit = unit.clone();
        }
        if let Some(currency) = &self.patch.currency {
            item.currency = currency.clone();
        }
        if let Some(list_price) = self.patch.list_price {
            item.list_price = list_price;
        }
        if let Some(discount_percent) = self.patch.discount_percent {
            item.discount_percent = discount_percent;
        }
        if let Some(management_info) = &self.patch.management_info {
            item.management_info = management_info.clone();
        }

        if self.patch.touches_pricing() {
            recompute_final_price(item);
        }
        Ok(())
    }
}
