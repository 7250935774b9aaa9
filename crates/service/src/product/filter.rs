use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, Condition};

use models::product;

/// Optional search criteria. Each supplied field narrows the result (AND);
/// an absent field does not constrain it. There are no reserved values, so a
/// stored color of `""` or a category id of `-1` is matched like any other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub color: Option<String>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.min_price.is_none() && self.max_price.is_none() && self.color.is_none()
    }

    /// WHERE clause for the supplied fields. With nothing supplied it holds no
    /// predicate and renders as `WHERE TRUE`.
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.category_id.map(|id| product::Column::CategoryId.eq(id)))
            .add_option(self.min_price.map(|min| product::Column::Price.gte(min)))
            .add_option(self.max_price.map(|max| product::Column::Price.lte(max)))
            .add_option(self.color.clone().map(|c| product::Column::Color.eq(c)))
    }

    /// Same predicate as [`condition`](Self::condition), evaluated in memory.
    pub fn matches(&self, p: &product::Model) -> bool {
        self.category_id.map_or(true, |id| p.category_id == id)
            && self.min_price.map_or(true, |min| p.price >= min)
            && self.max_price.map_or(true, |max| p.price <= max)
            && self.color.as_ref().map_or(true, |c| p.color.as_ref() == Some(c))
    }
}
