// src/services/report_service.rs

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use genpdf::{elements, style, Element};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        period::{format_datetime_pt, YearMonth},
    },
    db::{CompanyRepository, DashboardRepository},
    models::{
        dashboard::MonthlyChartEntry,
        finance::TransactionKind,
        reports::{ReportPeriod, ReportSummary},
    },
};

const REPORT_TITLE: &str = "Relatório Financeiro";
const COMPARISON_MONTHS: u32 = 6;

#[derive(Clone)]
pub struct ReportService {
    dashboard_repo: DashboardRepository,
    company_repo: CompanyRepository,
    fonts_dir: String,
}

impl ReportService {
    pub fn new(
        dashboard_repo: DashboardRepository,
        company_repo: CompanyRepository,
        fonts_dir: String,
    ) -> Self {
        Self {
            dashboard_repo,
            company_repo,
            fonts_dir,
        }
    }

    /// Resumo do período: totais, quebra por categoria e comparativo mensal.
    pub async fn build_summary(
        &self,
        company_id: Uuid,
        period: ReportPeriod,
    ) -> Result<ReportSummary, AppError> {
        let company = self
            .company_repo
            .find_by_id(company_id)
            .await?
            .ok_or(AppError::CompanyNotFound)?;

        let today = Utc::now().date_naive();
        let (start, end, period_label) = period_range(period, today);

        let total_revenues = self
            .dashboard_repo
            .sum_in_range(TransactionKind::Revenue, company_id, start, end)
            .await?;
        let total_expenses = self
            .dashboard_repo
            .sum_in_range(TransactionKind::Expense, company_id, start, end)
            .await?;

        let revenues_by_category = self
            .dashboard_repo
            .category_totals(TransactionKind::Revenue, company_id, start, end)
            .await?;
        let expenses_by_category = self
            .dashboard_repo
            .category_totals(TransactionKind::Expense, company_id, start, end)
            .await?;

        // Comparativo dos últimos 6 meses, como na tela de relatórios.
        let current = YearMonth::from_date(today);
        let mut monthly_comparison = Vec::with_capacity(COMPARISON_MONTHS as usize);
        for i in (0..COMPARISON_MONTHS).rev() {
            let month = current.minus_months(i);
            let revenues = self
                .dashboard_repo
                .sum_in_range(
                    TransactionKind::Revenue,
                    company_id,
                    month.first_day(),
                    month.last_day(),
                )
                .await?;
            let expenses = self
                .dashboard_repo
                .sum_in_range(
                    TransactionKind::Expense,
                    company_id,
                    month.first_day(),
                    month.last_day(),
                )
                .await?;

            monthly_comparison.push(MonthlyChartEntry {
                month: month.abbr_pt().to_string(),
                revenues,
                expenses,
            });
        }

        Ok(ReportSummary {
            title: REPORT_TITLE.to_string(),
            company: company.name,
            period_label,
            total_revenues,
            total_expenses,
            balance: total_revenues - total_expenses,
            revenues_by_category,
            expenses_by_category,
            monthly_comparison,
        })
    }

    /// Renderiza o resumo como PDF, em memória.
    pub fn render_pdf(
        &self,
        summary: &ReportSummary,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta configurada
        let font_family = genpdf::fonts::from_files(&self.fonts_dir, "Roboto", None)
            .map_err(|_| {
                AppError::FontNotFound(format!("Fonte não encontrada na pasta {}", self.fonts_dir))
            })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(summary.title.clone());
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new(summary.title.clone())
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(elements::Paragraph::new(format!("Empresa: {}", summary.company)));
        doc.push(elements::Paragraph::new(format!(
            "Período: {}",
            summary.period_label
        )));
        doc.push(elements::Break::new(1.5));

        // --- RESUMO FINANCEIRO ---
        let style_bold = style::Style::new().bold();

        let mut table = elements::TableLayout::new(vec![3, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        table
            .row()
            .element(elements::Paragraph::new("Total de Receitas").styled(style_bold))
            .element(elements::Paragraph::new(format!(
                "R$ {}",
                format_brl(summary.total_revenues)
            )))
            .push()
            .expect("Table error");
        table
            .row()
            .element(elements::Paragraph::new("Total de Despesas").styled(style_bold))
            .element(elements::Paragraph::new(format!(
                "R$ {}",
                format_brl(summary.total_expenses)
            )))
            .push()
            .expect("Table error");
        table
            .row()
            .element(elements::Paragraph::new("Resultado").styled(style_bold))
            .element(elements::Paragraph::new(format!(
                "R$ {}",
                format_brl(summary.balance)
            )))
            .push()
            .expect("Table error");

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- QUEBRA POR CATEGORIA ---
        for (heading, totals) in [
            ("Receitas por categoria", &summary.revenues_by_category),
            ("Despesas por categoria", &summary.expenses_by_category),
        ] {
            if totals.is_empty() {
                continue;
            }

            doc.push(
                elements::Paragraph::new(heading)
                    .styled(style::Style::new().bold().with_font_size(12)),
            );

            let mut table = elements::TableLayout::new(vec![3, 2]);
            table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));
            for total in totals {
                table
                    .row()
                    .element(elements::Paragraph::new(total.name.clone()))
                    .element(elements::Paragraph::new(format!(
                        "R$ {}",
                        format_brl(total.value)
                    )))
                    .push()
                    .expect("Table row error");
            }
            doc.push(table);
            doc.push(elements::Break::new(1));
        }

        // --- RODAPÉ ---
        doc.push(
            elements::Paragraph::new(format!("Gerado em {}", format_datetime_pt(&generated_at)))
                .styled(style::Style::new().italic().with_font_size(8)),
        );

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }

}

/// Renderiza o resumo como texto puro, com réguas de caixa.
pub fn render_txt(summary: &ReportSummary, generated_at: DateTime<Utc>) -> String {
    let heavy_rule = "═".repeat(67);
    let light_rule = "─".repeat(67);

    format!(
        "\n{heavy_rule}\n  {title}\n{heavy_rule}\n\n\
         INFORMAÇÕES DO RELATÓRIO\n\
         Empresa: {company}\n\
         Período: {period}\n\
         Data de Geração: {generated}\n\n\
         {light_rule}\n\
         RESUMO FINANCEIRO\n\
         {light_rule}\n\n\
         Total de Receitas: R$ {revenues}\n\
         Total de Despesas: R$ {expenses}\n\
         Resultado:         R$ {balance}\n\n\
         {heavy_rule}\n",
        title = summary.title.to_uppercase(),
        company = summary.company,
        period = summary.period_label,
        generated = format_datetime_pt(&generated_at),
        revenues = format_brl(summary.total_revenues),
        expenses = format_brl(summary.total_expenses),
        balance = format_brl(summary.balance),
    )
}

// Intervalo e rótulo do período: mês corrente ou ano corrente.
fn period_range(period: ReportPeriod, today: NaiveDate) -> (NaiveDate, NaiveDate, String) {
    match period {
        ReportPeriod::Month => {
            let month = YearMonth::from_date(today);
            (month.first_day(), month.last_day(), month.label_pt())
        }
        ReportPeriod::Year => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("janeiro sempre existe");
            let end =
                NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("dezembro sempre existe");
            (start, end, today.year().to_string())
        }
    }
}

/// Nome do arquivo exportado: relatorio_<empresa>_<data>.<ext>
pub fn export_filename(company: &str, date: NaiveDate, extension: &str) -> String {
    let company_slug: String = company.split_whitespace().collect::<Vec<_>>().join("_");
    format!("relatorio_{}_{}.{}", company_slug, date.format("%Y-%m-%d"), extension)
}

// Valor no padrão pt-BR: milhar com ponto, decimal com vírgula.
fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let raw = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{dec_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_valores_no_padrao_brasileiro() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "1.234,56");
        assert_eq!(format_brl(Decimal::from(1_000_000)), "1.000.000,00");
        assert_eq!(format_brl(Decimal::new(-987654321, 2)), "-9.876.543,21");
        assert_eq!(format_brl(Decimal::ZERO), "0,00");
        assert_eq!(format_brl(Decimal::new(5, 1)), "0,50");
    }

    #[test]
    fn periodo_mes_cobre_o_mes_corrente() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let (start, end, label) = period_range(ReportPeriod::Month, today);

        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
        assert_eq!(label, "agosto 2026");
    }

    #[test]
    fn periodo_ano_cobre_o_ano_civil() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let (start, end, label) = period_range(ReportPeriod::Year, today);

        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert_eq!(label, "2026");
    }

    #[test]
    fn nome_do_arquivo_troca_espacos_por_sublinhado() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(
            export_filename("Funerária Central Ltda", date, "pdf"),
            "relatorio_Funerária_Central_Ltda_2026-08-05.pdf"
        );
    }

    #[test]
    fn relatorio_txt_traz_cabecalho_e_totais() {
        let summary = ReportSummary {
            title: "Relatório Financeiro".to_string(),
            company: "Funerária Central".to_string(),
            period_label: "agosto 2026".to_string(),
            total_revenues: Decimal::new(150000, 2),
            total_expenses: Decimal::new(30000, 2),
            balance: Decimal::new(120000, 2),
            revenues_by_category: vec![],
            expenses_by_category: vec![],
            monthly_comparison: vec![],
        };
        let generated_at = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();

        let txt = render_txt(&summary, generated_at);

        assert!(txt.contains("RELATÓRIO FINANCEIRO"));
        assert!(txt.contains("Empresa: Funerária Central"));
        assert!(txt.contains("Período: agosto 2026"));
        assert!(txt.contains("Data de Geração: 05 de agosto de 2026 às 14:30"));
        assert!(txt.contains("Total de Receitas: R$ 1.500,00"));
        assert!(txt.contains("Total de Despesas: R$ 300,00"));
        assert!(txt.contains("Resultado:         R$ 1.200,00"));
    }
}
