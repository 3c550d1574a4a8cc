use chrono::NaiveDate;
use types::{Holiday, HolidayKind};

/// Dates on which no class fires and no syllabus progress is consumed.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    entries: Vec<Holiday>,
}

impl HolidayCalendar {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Brazilian national holidays for the 2026 academic year.
    pub fn brazil_2026() -> Self {
        const TABLE: [(u32, u32, &str); 12] = [
            (1, 1, "Confraternização Universal"),
            (2, 16, "Carnaval (Segunda)"),
            (2, 17, "Carnaval (Terça)"),
            (4, 3, "Sexta-feira Santa"),
            (4, 21, "Tiradentes"),
            (5, 1, "Dia do Trabalho"),
            (6, 4, "Corpus Christi"),
            (9, 7, "Independência do Brasil"),
            (10, 12, "Nossa Senhora Aparecida"),
            (11, 2, "Finados"),
            (11, 15, "Proclamação da República"),
            (12, 25, "Natal"),
        ];
        let entries = TABLE
            .iter()
            .filter_map(|&(month, day, name)| {
                Some(Holiday {
                    date: NaiveDate::from_ymd_opt(2026, month, day)?,
                    name: name.to_string(),
                    kind: HolidayKind::National,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn with_custom(mut self, extra: impl IntoIterator<Item = Holiday>) -> Self {
        self.entries.extend(extra);
        self
    }

    pub fn push(&mut self, holiday: Holiday) {
        self.entries.push(holiday);
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|h| h.date == date)
    }

    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    pub fn entries(&self) -> &[Holiday] {
        &self.entries
    }
}
