// src/common/period.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

const MESES_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MESES_ABREV_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Um mês de competência ('2025-11'). O mês é sempre válido (1 a 12),
/// garantido na construção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Primeiro dia do mês.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("mês validado na construção")
    }

    /// Último dia do mês (próximo mês, dia 1, menos um dia).
    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("dia anterior sempre existe")
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Recua `n` meses (para as séries "últimos N meses").
    pub fn minus_months(&self, n: u32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) - n as i32;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// Nome completo em pt-BR, ex.: "novembro 2025".
    pub fn label_pt(&self) -> String {
        format!("{} {}", MESES_PT[(self.month - 1) as usize], self.year)
    }

    /// Abreviação em pt-BR, ex.: "nov".
    pub fn abbr_pt(&self) -> &'static str {
        MESES_ABREV_PT[(self.month - 1) as usize]
    }
}

/// Carimbo por extenso em pt-BR, ex.: "05 de agosto de 2026 às 14:30".
pub fn format_datetime_pt(datetime: &DateTime<Utc>) -> String {
    format!(
        "{:02} de {} de {} às {:02}:{:02}",
        datetime.day(),
        MESES_PT[(datetime.month() - 1) as usize],
        datetime.year(),
        datetime.hour(),
        datetime.minute()
    )
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    // Aceita o formato 'yyyy-MM' (ex.: '2025-11').
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let erro = || format!("Mês inválido: '{}'. Use o formato yyyy-MM.", s);

        let (year_str, month_str) = s.split_once('-').ok_or_else(erro)?;
        let year: i32 = year_str.parse().map_err(|_| erro())?;
        let month: u32 = month_str.parse().map_err(|_| erro())?;

        Self::new(year, month).ok_or_else(erro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mes_valido() {
        let ym: YearMonth = "2025-11".parse().unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month(), 11);
        assert_eq!(ym.to_string(), "2025-11");
    }

    #[test]
    fn parse_rejeita_formatos_invalidos() {
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-00".parse::<YearMonth>().is_err());
        assert!("novembro".parse::<YearMonth>().is_err());
    }

    #[test]
    fn avanca_virada_de_ano() {
        let dez: YearMonth = "2025-12".parse().unwrap();
        let jan = dez.next();
        assert_eq!(jan.to_string(), "2026-01");
        assert_eq!(jan.first_day(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn ultimo_dia_considera_ano_bissexto() {
        let fev: YearMonth = "2024-02".parse().unwrap();
        assert_eq!(fev.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let fev: YearMonth = "2025-02".parse().unwrap();
        assert_eq!(fev.last_day(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn recua_meses_atravessando_anos() {
        let mar: YearMonth = "2026-03".parse().unwrap();
        assert_eq!(mar.minus_months(0).to_string(), "2026-03");
        assert_eq!(mar.minus_months(3).to_string(), "2025-12");
        assert_eq!(mar.minus_months(15).to_string(), "2024-12");
    }

    #[test]
    fn rotulos_em_portugues() {
        let nov: YearMonth = "2025-11".parse().unwrap();
        assert_eq!(nov.label_pt(), "novembro 2025");
        assert_eq!(nov.abbr_pt(), "nov");
    }

    #[test]
    fn carimbo_por_extenso() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(format_datetime_pt(&dt), "05 de agosto de 2026 às 14:30");
    }
}
