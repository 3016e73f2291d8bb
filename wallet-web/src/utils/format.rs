//! # Formatting Utilities for the Eco-Eeelien views
//!
//! Short Spanish labels for counts and figures. For addresses use
//! [`shared::utils::truncate_address`]; for thousands separators use
//! [`shared::utils::group_thousands`].

/// `"+12 hoy"` style daily increment badge
pub fn format_today(delta: u64) -> String {
    format!("+{} hoy", delta)
}

pub fn format_co2(kg: u32) -> String {
    format!("{}kg", kg)
}

pub fn format_rank(position: u32) -> String {
    format!("#{}", position)
}

pub fn format_bottles(count: u32) -> String {
    match count {
        1 => "1 botella".to_string(),
        n => format!("{} botellas", n),
    }
}

pub fn format_token_cost(cost: u64) -> String {
    format!("{} tokens", cost)
}

/// Remaining time on a challenge, e.g. `"3 días restantes"`
pub fn format_days_remaining(days: u32) -> String {
    match days {
        0 => "Último día".to_string(),
        1 => "1 día restante".to_string(),
        n => format!("{} días restantes", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_labels() {
        assert_eq!(format_today(12), "+12 hoy");
        assert_eq!(format_co2(148), "148kg");
        assert_eq!(format_rank(8), "#8");
        assert_eq!(format_token_cost(200), "200 tokens");
    }

    #[test]
    fn test_plurals() {
        assert_eq!(format_bottles(1), "1 botella");
        assert_eq!(format_bottles(342), "342 botellas");
        assert_eq!(format_days_remaining(3), "3 días restantes");
        assert_eq!(format_days_remaining(1), "1 día restante");
        assert_eq!(format_days_remaining(0), "Último día");
    }
}
