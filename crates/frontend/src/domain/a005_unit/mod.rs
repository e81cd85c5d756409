pub mod api;

use crate::shared::search_select::ComboOption;
use contracts::domain::a005_unit::aggregate::Unit;

/// "Килограмм (кг)"
pub fn unit_label(unit: &Unit) -> String {
    format!("{} ({})", unit.name, unit.symbol)
}

pub fn unit_options(units: &[Unit]) -> Vec<ComboOption> {
    units
        .iter()
        .map(|u| ComboOption::new(u.id.to_string(), unit_label(u)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_label() {
        let unit = Unit {
            id: 2,
            name: "Килограмм".into(),
            symbol: "кг".into(),
        };
        assert_eq!(unit_label(&unit), "Килограмм (кг)");
        assert_eq!(unit_options(&[unit])[0].value, "2");
    }
}
