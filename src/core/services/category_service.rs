use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::ledger::Ledger;

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, category: Category) -> ServiceResult<Uuid> {
        Self::validate_label(ledger, None, &category.label)?;
        if category.is_reserved() && ledger.category(category.id).is_some() {
            return Err(ServiceError::Invalid(
                "Transfer category already exists".into(),
            ));
        }
        Ok(ledger.add_category(category))
    }

    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Category) -> ServiceResult<()> {
        Self::validate_label(ledger, Some(id), &changes.label)?;
        let category = ledger
            .category_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
        if category.is_reserved() {
            return Err(ServiceError::Invalid(
                "The transfer category cannot be edited".into(),
            ));
        }
        category.label = changes.label;
        category.icon = changes.icon;
        category.color = changes.color;
        category.kind = changes.kind;
        ledger.touch();
        Ok(())
    }

    /// Removes a category. Transactions keep their now-dangling category id;
    /// breakdowns treat it as unknown. The reserved transfer category must
    /// always exist and cannot be removed.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if id == crate::domain::category::TRANSFER_CATEGORY_ID {
            return Err(ServiceError::Invalid(
                "The transfer category cannot be removed".into(),
            ));
        }
        let before = ledger.categories.len();
        ledger.categories.retain(|category| category.id != id);
        if ledger.categories.len() == before {
            return Err(ServiceError::Invalid("Category not found".into()));
        }
        ledger.touch();
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_label(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid(
                "Category label cannot be empty".into(),
            ));
        }
        let duplicate = ledger.categories.iter().any(|category| {
            let label = category.label.trim().to_ascii_lowercase();
            label == normalized && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
