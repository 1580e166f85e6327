use chrono::{Datelike, Duration, NaiveDate};
use common::error::{AppError, Res};
use common::fmt::{MONTHS_FULL, format_date_br};

/// Report window selector. Weekly runs Sunday through Saturday (pt-BR
/// convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Semanal,
    Mensal,
    Anual,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Semanal => "semanal",
            Period::Mensal => "mensal",
            Period::Anual => "anual",
        }
    }

    pub fn parse(s: &str) -> Res<Self> {
        match s {
            "semanal" => Ok(Period::Semanal),
            "mensal" => Ok(Period::Mensal),
            "anual" => Ok(Period::Anual),
            other => Err(AppError::BadRequest(format!("Unknown period: {}", other))),
        }
    }

    /// Inclusive date range of the window containing `today`.
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Semanal => {
                let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                (start, start + Duration::days(6))
            }
            Period::Mensal => {
                let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
                let end = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1).unwrap()
                } - Duration::days(1);
                (start, end)
            }
            Period::Anual => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap(),
            ),
        }
    }

    /// Human label for the window, e.g. `março 2026` or
    /// `Semana de 01/03/2026 a 07/03/2026`.
    pub fn label(&self, today: NaiveDate) -> String {
        let (start, end) = self.range(today);
        match self {
            Period::Semanal => format!(
                "Semana de {} a {}",
                format_date_br(start),
                format_date_br(end)
            ),
            Period::Mensal => format!(
                "{} {}",
                MONTHS_FULL[(start.month() - 1) as usize],
                start.year()
            ),
            Period::Anual => start.year().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_range_starts_on_sunday() {
        // 2026-03-10 is a Tuesday; the containing week starts Sunday 03-08
        let (start, end) = Period::Semanal.range(day(2026, 3, 10));
        assert_eq!(start, day(2026, 3, 8));
        assert_eq!(end, day(2026, 3, 14));
    }

    #[test]
    fn weekly_range_on_a_sunday_is_that_sunday() {
        let (start, end) = Period::Semanal.range(day(2026, 3, 8));
        assert_eq!(start, day(2026, 3, 8));
        assert_eq!(end, day(2026, 3, 14));
    }

    #[test]
    fn monthly_range_covers_the_calendar_month() {
        let (start, end) = Period::Mensal.range(day(2026, 2, 15));
        assert_eq!(start, day(2026, 2, 1));
        assert_eq!(end, day(2026, 2, 28));
    }

    #[test]
    fn monthly_range_handles_december() {
        let (start, end) = Period::Mensal.range(day(2026, 12, 25));
        assert_eq!(start, day(2026, 12, 1));
        assert_eq!(end, day(2026, 12, 31));
    }

    #[test]
    fn yearly_range_covers_the_calendar_year() {
        let (start, end) = Period::Anual.range(day(2026, 7, 4));
        assert_eq!(start, day(2026, 1, 1));
        assert_eq!(end, day(2026, 12, 31));
    }

    #[test]
    fn labels_render_per_period() {
        assert_eq!(Period::Mensal.label(day(2026, 3, 10)), "março 2026");
        assert_eq!(Period::Anual.label(day(2026, 3, 10)), "2026");
        assert_eq!(
            Period::Semanal.label(day(2026, 3, 10)),
            "Semana de 08/03/2026 a 14/03/2026"
        );
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!(Period::parse("quinzenal").is_err());
        assert!(Period::parse("mensal").is_ok());
    }
}
