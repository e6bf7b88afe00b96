//! Filter criteria: optional per-dimension constraints for one export call

use rust_decimal::Decimal;

use crate::entities::part::Part;

/// The optional constraints of one export request.
///
/// An absent field imposes no constraint on that dimension; supplied
/// dimensions are combined with logical AND. Built from the request,
/// consumed once, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the manufacturer
    pub manufacturer: Option<String>,

    /// Case-insensitive substring of the category
    pub category: Option<String>,

    /// Case-insensitive substring of the compatible vehicle
    pub vehicle: Option<String>,

    /// Inclusive lower price bound
    pub price_min: Option<Decimal>,

    /// Inclusive upper price bound
    pub price_max: Option<Decimal>,

    /// Part code. The criterion is upper-cased and compared against the
    /// stored code in its original case, so the match is effectively
    /// case-sensitive on the stored side. Long-standing behavior; keep it
    /// until a product decision says otherwise.
    pub code: Option<String>,
}

impl FilterCriteria {
    /// True when no dimension is constrained
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_none()
            && self.category.is_none()
            && self.vehicle.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.code.is_none()
    }

    /// Test a single part against every supplied constraint
    pub fn matches(&self, part: &Part) -> bool {
        self.manufacturer
            .as_ref()
            .is_none_or(|m| contains_ci(&part.manufacturer, m))
            && self
                .category
                .as_ref()
                .is_none_or(|c| contains_ci(&part.category, c))
            && self
                .vehicle
                .as_ref()
                .is_none_or(|v| contains_ci(&part.compatible_vehicle, v))
            && self.price_min.is_none_or(|min| part.unit_price >= min)
            && self.price_max.is_none_or(|max| part.unit_price <= max)
            && self
                .code
                .as_ref()
                .is_none_or(|code| part.code == code.to_uppercase())
    }

    /// Select the matching subsequence, preserving source iteration order
    pub fn select<'a>(&self, parts: &'a [Part]) -> Vec<&'a Part> {
        parts.iter().filter(|p| self.matches(p)).collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::PartId;
    use crate::entities::part::PartDraft;
    use chrono::NaiveDate;

    fn part(name: &str, code: &str, maker: &str, vehicle: &str, price: &str, cat: &str) -> Part {
        Part::from_draft(
            PartDraft {
                name: name.to_string(),
                code: code.to_string(),
                manufacturer: maker.to_string(),
                compatible_vehicle: vehicle.to_string(),
                stock_quantity: 50,
                unit_price: price.parse().unwrap(),
                category: cat.to_string(),
            },
            PartId::new(),
            NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
        )
    }

    fn inventory() -> Vec<Part> {
        vec![
            part("Filtro de Óleo", "FO123", "Bosch", "Fiat Uno", "25.90", "Motor"),
            part("Pastilha de Freio", "PF456", "Cobreq", "Volkswagen Gol", "89.90", "Freio"),
            part("Amortecedor Dianteiro", "AD789", "Monroe", "Chevrolet Onix", "320.00", "Suspensão"),
        ]
    }

    #[test]
    fn test_empty_criteria_selects_everything_in_order() {
        let parts = inventory();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let selected = criteria.select(&parts);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].code, "FO123");
        assert_eq!(selected[2].code, "AD789");
    }

    #[test]
    fn test_manufacturer_is_case_insensitive_substring() {
        let parts = inventory();
        let criteria = FilterCriteria {
            manufacturer: Some("bosch".to_string()),
            ..Default::default()
        };

        let selected = criteria.select(&parts);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Filtro de Óleo");
    }

    #[test]
    fn test_category_mismatch_excludes() {
        let parts = inventory();
        let criteria = FilterCriteria {
            category: Some("Freio".to_string()),
            ..Default::default()
        };

        let selected = criteria.select(&parts);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].code, "PF456");
    }

    #[test]
    fn test_dimensions_are_anded() {
        let parts = inventory();
        let criteria = FilterCriteria {
            manufacturer: Some("bosch".to_string()),
            category: Some("Freio".to_string()),
            ..Default::default()
        };

        assert!(criteria.select(&parts).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let parts = inventory();

        let at_min = FilterCriteria {
            price_min: Some("25.90".parse().unwrap()),
            ..Default::default()
        };
        assert!(at_min.matches(&parts[0]));

        let above_min = FilterCriteria {
            price_min: Some("25.91".parse().unwrap()),
            ..Default::default()
        };
        assert!(!above_min.matches(&parts[0]));

        let at_max = FilterCriteria {
            price_max: Some("25.90".parse().unwrap()),
            ..Default::default()
        };
        assert!(at_max.matches(&parts[0]));

        let below_max = FilterCriteria {
            price_max: Some("25.89".parse().unwrap()),
            ..Default::default()
        };
        assert!(!below_max.matches(&parts[0]));
    }

    #[test]
    fn test_price_comparison_is_exact_decimal() {
        let p = part("Vela", "VI654", "NGK", "Fiat Uno", "0.30", "Ignição");
        // 0.1 + 0.2 == 0.3 holds for decimals, unlike floats
        let min: Decimal = "0.10".parse::<Decimal>().unwrap() + "0.20".parse::<Decimal>().unwrap();
        let criteria = FilterCriteria {
            price_min: Some(min),
            ..Default::default()
        };
        assert!(criteria.matches(&p));
    }

    #[test]
    fn test_code_uppercases_criterion_only() {
        let parts = inventory();

        // lower-case input matches the upper-case stored code
        let lower_input = FilterCriteria {
            code: Some("fo123".to_string()),
            ..Default::default()
        };
        assert!(lower_input.matches(&parts[0]));

        // a lower-case *stored* code never matches: the stored side is
        // compared in its original case
        let lower_stored = part("Filtro", "fo999", "Bosch", "Fiat Uno", "10.00", "Motor");
        let criteria = FilterCriteria {
            code: Some("fo999".to_string()),
            ..Default::default()
        };
        assert!(!criteria.matches(&lower_stored));
    }

    #[test]
    fn test_code_is_exact_not_substring() {
        let parts = inventory();
        let criteria = FilterCriteria {
            code: Some("FO12".to_string()),
            ..Default::default()
        };
        assert!(!criteria.matches(&parts[0]));
    }
}
